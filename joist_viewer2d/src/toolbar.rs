// Copyright 2025 the Joist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toolbars: the viewer's navigation strip and the editor's main commands.

use smallvec::SmallVec;

use crate::actions::{ProjectActions, Viewer3DActions};
use crate::classify::Tool;
use crate::mode::InteractionMode;

/// One button of the navigation strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavButton {
    /// Tool the button selects (feed it to
    /// [`Viewer2D::change_tool`](crate::Viewer2D::change_tool)).
    pub tool: Tool,
    /// Whether the button is highlighted.
    pub active: bool,
}

/// Navigation strip for the current `tool`.
///
/// The edit button selects [`Tool::None`] and is lit while the mode's tool is
/// [`Tool::Auto`]; a view-only viewer does not offer it.
#[must_use]
pub fn navigation_buttons(tool: Tool, view_only: bool) -> SmallVec<[NavButton; 4]> {
    let mut buttons = SmallVec::new();
    if !view_only {
        buttons.push(NavButton {
            tool: Tool::None,
            active: tool == Tool::Auto,
        });
    }
    for nav in [Tool::Pan, Tool::ZoomIn, Tool::ZoomOut] {
        buttons.push(NavButton {
            tool: nav,
            active: tool == nav,
        });
    }
    buttons
}

/// A command of the editor's main toolbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToolbarCommand {
    /// Open the catalog.
    OpenCatalog,
    /// Show the 3D view.
    View3D,
    /// Back to the 2D editor.
    View2D,
    /// Show the first-person 3D view.
    FirstPerson3D,
    /// Undo the last change.
    Undo,
    /// Open the project settings.
    ConfigureProject,
}

impl ToolbarCommand {
    /// Every command, in display order.
    pub const ALL: [Self; 6] = [
        Self::OpenCatalog,
        Self::View3D,
        Self::View2D,
        Self::FirstPerson3D,
        Self::Undo,
        Self::ConfigureProject,
    ];

    /// Whether the command's button is highlighted in `mode`.
    #[must_use]
    pub const fn is_active(self, mode: InteractionMode) -> bool {
        match self {
            Self::OpenCatalog => matches!(mode, InteractionMode::ViewingCatalog),
            Self::View3D => matches!(mode, InteractionMode::View3D),
            Self::View2D => matches!(mode, InteractionMode::Idle),
            Self::FirstPerson3D => matches!(mode, InteractionMode::FirstPerson3D),
            Self::Undo => false,
            Self::ConfigureProject => matches!(mode, InteractionMode::ConfiguringProject),
        }
    }

    /// Requests the command from `actions`.
    pub fn invoke<A>(self, actions: &mut A)
    where
        A: ProjectActions + Viewer3DActions + ?Sized,
    {
        tracing::debug!(command = ?self, "toolbar command");
        match self {
            Self::OpenCatalog => actions.open_catalog(),
            Self::View3D => actions.select_tool_3d_view(),
            Self::View2D => actions.rollback(),
            Self::FirstPerson3D => actions.select_tool_3d_first_person(),
            Self::Undo => actions.undo(),
            Self::ConfigureProject => actions.open_project_configurator(),
        }
    }
}

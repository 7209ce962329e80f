// Copyright 2025 the Joist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mode classifier: what the viewer looks and behaves like in each mode.
//!
//! Four lookups, each an exhaustive `match` over [`InteractionMode`]:
//!
//! | mode                         | tool      | scene pointer events | cursor      | autopan |
//! |------------------------------|-----------|----------------------|-------------|---------|
//! | `Idle`                       | auto      | enabled              | default     | no      |
//! | `Pan` / `ZoomIn` / `ZoomOut` | same      | enabled              | default     | no      |
//! | `WaitingDrawingLine`         | none      | enabled              | crosshair   | no      |
//! | `DrawingLine`                | none      | disabled             | crosshair   | yes     |
//! | `DrawingHole`, `DrawingItem` | none      | disabled             | default     | yes     |
//! | `Dragging*`                  | none      | disabled             | move        | yes     |
//! | `RotatingItem`               | none      | enabled              | ew-resize   | no      |
//! | anything else                | none      | enabled              | default     | no      |
//!
//! The `none` tool turns off the viewport's own pan/zoom gestures so they do
//! not compete with drawing and dragging. Disabling pointer events on scene
//! elements lets the viewport surface receive every event of a gesture
//! instead of the shape being moved.

use core::fmt;
use core::str::FromStr;

use crate::mode::InteractionMode;

/// Navigation tool of the pan/zoom viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Tool {
    /// Viewport navigation off; pointer events belong to the editor.
    None,
    /// Drag pans.
    Pan,
    /// Click zooms in, drag zooms to a region.
    ZoomIn,
    /// Click zooms out.
    ZoomOut,
    /// Editor events plus drag-to-pan on empty space and wheel zoom.
    Auto,
}

/// A tool name that does not match any [`Tool`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown viewer tool `{0}`")]
pub struct UnknownTool(pub String);

impl Tool {
    /// The tool's name as used by pan/zoom widgets.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Pan => "pan",
            Self::ZoomIn => "zoom-in",
            Self::ZoomOut => "zoom-out",
            Self::Auto => "auto",
        }
    }

    /// `true` for the tools that move the camera themselves.
    #[must_use]
    pub const fn navigates(self) -> bool {
        matches!(self, Self::Pan | Self::ZoomIn | Self::ZoomOut)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "pan" => Ok(Self::Pan),
            "zoom-in" => Ok(Self::ZoomIn),
            "zoom-out" => Ok(Self::ZoomOut),
            "auto" => Ok(Self::Auto),
            other => Err(UnknownTool(other.to_owned())),
        }
    }
}

/// Whether rendered scene elements receive pointer events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PointerEvents {
    /// Elements are hit-testable.
    #[default]
    Enabled,
    /// Elements are transparent to the pointer.
    Disabled,
}

impl PointerEvents {
    /// CSS `pointer-events` value, or `None` to leave the property unset.
    #[must_use]
    pub const fn as_css(self) -> Option<&'static str> {
        match self {
            Self::Enabled => None,
            Self::Disabled => Some("none"),
        }
    }
}

/// Cursor shown over the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cursor {
    /// Platform default arrow.
    #[default]
    Default,
    /// Four-way move arrows.
    Move,
    /// Horizontal resize arrows.
    EwResize,
    /// Crosshair.
    Crosshair,
}

impl Cursor {
    /// CSS `cursor` keyword.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Move => "move",
            Self::EwResize => "ew-resize",
            Self::Crosshair => "crosshair",
        }
    }
}

/// Viewport tool for `mode`.
#[must_use]
pub const fn tool_for(mode: InteractionMode) -> Tool {
    match mode {
        InteractionMode::Pan => Tool::Pan,
        InteractionMode::ZoomIn => Tool::ZoomIn,
        InteractionMode::ZoomOut => Tool::ZoomOut,
        InteractionMode::Idle => Tool::Auto,
        InteractionMode::View3D
        | InteractionMode::FirstPerson3D
        | InteractionMode::WaitingDrawingLine
        | InteractionMode::DrawingLine
        | InteractionMode::DrawingHole
        | InteractionMode::DrawingItem
        | InteractionMode::DraggingLine
        | InteractionMode::DraggingHole
        | InteractionMode::DraggingItem
        | InteractionMode::DraggingVertex
        | InteractionMode::RotatingItem
        | InteractionMode::UploadingImage
        | InteractionMode::FittingImage
        | InteractionMode::ViewingCatalog
        | InteractionMode::ConfiguringProject
        | InteractionMode::ConfiguringLayer
        | InteractionMode::ConfiguringElement => Tool::None,
    }
}

/// Pointer-event pass-through for scene elements in `mode`.
#[must_use]
pub const fn pointer_events_for(mode: InteractionMode) -> PointerEvents {
    match mode {
        InteractionMode::DrawingLine
        | InteractionMode::DrawingHole
        | InteractionMode::DrawingItem
        | InteractionMode::DraggingHole
        | InteractionMode::DraggingItem
        | InteractionMode::DraggingLine
        | InteractionMode::DraggingVertex => PointerEvents::Disabled,
        InteractionMode::Idle
        | InteractionMode::View3D
        | InteractionMode::FirstPerson3D
        | InteractionMode::Pan
        | InteractionMode::ZoomIn
        | InteractionMode::ZoomOut
        | InteractionMode::WaitingDrawingLine
        | InteractionMode::RotatingItem
        | InteractionMode::UploadingImage
        | InteractionMode::FittingImage
        | InteractionMode::ViewingCatalog
        | InteractionMode::ConfiguringProject
        | InteractionMode::ConfiguringLayer
        | InteractionMode::ConfiguringElement => PointerEvents::Enabled,
    }
}

/// Cursor for `mode`.
#[must_use]
pub const fn cursor_for(mode: InteractionMode) -> Cursor {
    match mode {
        InteractionMode::DraggingHole
        | InteractionMode::DraggingLine
        | InteractionMode::DraggingVertex
        | InteractionMode::DraggingItem => Cursor::Move,
        InteractionMode::RotatingItem => Cursor::EwResize,
        InteractionMode::WaitingDrawingLine | InteractionMode::DrawingLine => Cursor::Crosshair,
        InteractionMode::Idle
        | InteractionMode::View3D
        | InteractionMode::FirstPerson3D
        | InteractionMode::Pan
        | InteractionMode::ZoomIn
        | InteractionMode::ZoomOut
        | InteractionMode::DrawingHole
        | InteractionMode::DrawingItem
        | InteractionMode::UploadingImage
        | InteractionMode::FittingImage
        | InteractionMode::ViewingCatalog
        | InteractionMode::ConfiguringProject
        | InteractionMode::ConfiguringLayer
        | InteractionMode::ConfiguringElement => Cursor::Default,
    }
}

/// Whether the camera should follow the pointer to the viewer edges in `mode`.
#[must_use]
pub const fn autopan_for(mode: InteractionMode) -> bool {
    match mode {
        InteractionMode::DrawingLine
        | InteractionMode::DraggingLine
        | InteractionMode::DraggingVertex
        | InteractionMode::DraggingHole
        | InteractionMode::DraggingItem
        | InteractionMode::DrawingHole
        | InteractionMode::DrawingItem => true,
        InteractionMode::Idle
        | InteractionMode::View3D
        | InteractionMode::FirstPerson3D
        | InteractionMode::Pan
        | InteractionMode::ZoomIn
        | InteractionMode::ZoomOut
        | InteractionMode::WaitingDrawingLine
        | InteractionMode::RotatingItem
        | InteractionMode::UploadingImage
        | InteractionMode::FittingImage
        | InteractionMode::ViewingCatalog
        | InteractionMode::ConfiguringProject
        | InteractionMode::ConfiguringLayer
        | InteractionMode::ConfiguringElement => false,
    }
}

/// The four classifications of one mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeProfile {
    /// Viewport tool.
    pub tool: Tool,
    /// Scene element pointer events.
    pub pointer_events: PointerEvents,
    /// Cursor over the scene.
    pub cursor: Cursor,
    /// Edge autopan.
    pub autopan: bool,
}

impl ModeProfile {
    /// Profile used for mode names the viewer does not recognize: no viewport
    /// navigation, nothing disabled, default cursor, no autopan.
    pub const INERT: Self = Self {
        tool: Tool::None,
        pointer_events: PointerEvents::Enabled,
        cursor: Cursor::Default,
        autopan: false,
    };

    /// Classifies `mode`.
    #[must_use]
    pub const fn of(mode: InteractionMode) -> Self {
        Self {
            tool: tool_for(mode),
            pointer_events: pointer_events_for(mode),
            cursor: cursor_for(mode),
            autopan: autopan_for(mode),
        }
    }

    /// Classifies a raw mode name from host state, falling back to
    /// [`ModeProfile::INERT`] for names this crate does not know.
    #[must_use]
    pub fn of_name(name: &str) -> Self {
        match name.parse() {
            Ok(mode) => Self::of(mode),
            Err(err) => {
                tracing::debug!(%err, "classifying unrecognized mode as inert");
                Self::INERT
            }
        }
    }
}

// Copyright 2025 the Joist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The editor's interaction modes.

use core::fmt;
use core::str::FromStr;

/// A mode name that does not match any [`InteractionMode`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown interaction mode `{0}`")]
pub struct UnknownMode(pub String);

/// The single active interaction state of the editor.
///
/// Owned by the host's project state; the viewer only reads it. Because the
/// mode is one scalar, at most one of drawing, dragging, or rotating can be
/// in progress at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum InteractionMode {
    /// Nothing in progress; clicks select, presses on a selection drag it.
    #[default]
    Idle,
    /// The 3D orbit viewer is shown.
    View3D,
    /// The 3D first-person viewer is shown.
    FirstPerson3D,
    /// 2D pan tool.
    Pan,
    /// 2D zoom-in tool.
    ZoomIn,
    /// 2D zoom-out tool.
    ZoomOut,
    /// A line tool is armed; the next click places the first vertex.
    WaitingDrawingLine,
    /// A line is being drawn.
    DrawingLine,
    /// A hole picked from the catalog follows the pointer.
    DrawingHole,
    /// An item picked from the catalog follows the pointer.
    DrawingItem,
    /// A selected line is being dragged.
    DraggingLine,
    /// A selected hole is being dragged along its line.
    DraggingHole,
    /// A selected item is being dragged.
    DraggingItem,
    /// A selected vertex is being dragged.
    DraggingVertex,
    /// A selected item is being rotated by its handle.
    RotatingItem,
    /// A background image is being uploaded.
    UploadingImage,
    /// A background image is being fitted to the plan.
    FittingImage,
    /// The catalog is open.
    ViewingCatalog,
    /// The project settings are open.
    ConfiguringProject,
    /// Layer settings are open.
    ConfiguringLayer,
    /// Element settings are open.
    ConfiguringElement,
}

impl InteractionMode {
    /// Every mode, in declaration order.
    pub const ALL: [Self; 21] = [
        Self::Idle,
        Self::View3D,
        Self::FirstPerson3D,
        Self::Pan,
        Self::ZoomIn,
        Self::ZoomOut,
        Self::WaitingDrawingLine,
        Self::DrawingLine,
        Self::DrawingHole,
        Self::DrawingItem,
        Self::DraggingLine,
        Self::DraggingHole,
        Self::DraggingItem,
        Self::DraggingVertex,
        Self::RotatingItem,
        Self::UploadingImage,
        Self::FittingImage,
        Self::ViewingCatalog,
        Self::ConfiguringProject,
        Self::ConfiguringLayer,
        Self::ConfiguringElement,
    ];

    /// The mode's name in the host's project state.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "MODE_IDLE",
            Self::View3D => "MODE_3D_VIEW",
            Self::FirstPerson3D => "MODE_3D_FIRST_PERSON",
            Self::Pan => "MODE_2D_PAN",
            Self::ZoomIn => "MODE_2D_ZOOM_IN",
            Self::ZoomOut => "MODE_2D_ZOOM_OUT",
            Self::WaitingDrawingLine => "MODE_WAITING_DRAWING_LINE",
            Self::DrawingLine => "MODE_DRAWING_LINE",
            Self::DrawingHole => "MODE_DRAWING_HOLE",
            Self::DrawingItem => "MODE_DRAWING_ITEM",
            Self::DraggingLine => "MODE_DRAGGING_LINE",
            Self::DraggingHole => "MODE_DRAGGING_HOLE",
            Self::DraggingItem => "MODE_DRAGGING_ITEM",
            Self::DraggingVertex => "MODE_DRAGGING_VERTEX",
            Self::RotatingItem => "MODE_ROTATING_ITEM",
            Self::UploadingImage => "MODE_UPLOADING_IMAGE",
            Self::FittingImage => "MODE_FITTING_IMAGE",
            Self::ViewingCatalog => "MODE_VIEWING_CATALOG",
            Self::ConfiguringProject => "MODE_CONFIGURING_PROJECT",
            Self::ConfiguringLayer => "MODE_CONFIGURING_LAYER",
            Self::ConfiguringElement => "MODE_CONFIGURING_ELEMENT",
        }
    }

    /// Drawing a line, hole, or item (not waiting to draw).
    #[must_use]
    pub const fn is_drawing(self) -> bool {
        matches!(self, Self::DrawingLine | Self::DrawingHole | Self::DrawingItem)
    }

    /// Dragging a line, hole, item, or vertex.
    #[must_use]
    pub const fn is_dragging(self) -> bool {
        matches!(
            self,
            Self::DraggingLine | Self::DraggingHole | Self::DraggingItem | Self::DraggingVertex
        )
    }

    /// One of the 2D navigation tools.
    #[must_use]
    pub const fn is_navigation(self) -> bool {
        matches!(self, Self::Pan | Self::ZoomIn | Self::ZoomOut)
    }

    /// A drawing, dragging, or rotating gesture is in progress.
    #[must_use]
    pub const fn is_gesture(self) -> bool {
        self.is_drawing() || self.is_dragging() || matches!(self, Self::RotatingItem)
    }
}

impl fmt::Display for InteractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InteractionMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| UnknownMode(s.to_owned()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for InteractionMode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for InteractionMode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = <String as serde::Deserialize>::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

// Copyright 2025 the Joist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Part name carried by the rotation handle of an item.
pub const ROTATION_ANCHOR: &str = "rotation-anchor";

/// Kind of a rendered scene element (the `data-prototype` value).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Wall lines.
    Lines,
    /// Doors, windows and other openings hosted by a line.
    Holes,
    /// Furniture and other free-standing catalog items.
    Items,
    /// Line end points.
    Vertices,
    /// Rooms enclosed by lines.
    Areas,
    /// A kind this crate does not know about. Kept verbatim so callers can
    /// report it.
    Other(String),
}

impl ElementKind {
    /// Parses a `data-prototype` value. Unknown values become
    /// [`ElementKind::Other`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "lines" => Self::Lines,
            "holes" => Self::Holes,
            "items" => Self::Items,
            "vertices" => Self::Vertices,
            "areas" => Self::Areas,
            other => Self::Other(other.to_owned()),
        }
    }

    /// The `data-prototype` value for this kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Lines => "lines",
            Self::Holes => "holes",
            Self::Items => "items",
            Self::Vertices => "vertices",
            Self::Areas => "areas",
            Self::Other(other) => other,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of the scene element under the pointer.
///
/// Derived per event and discarded once the event is handled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementRef {
    /// Element kind.
    pub kind: ElementKind,
    /// Id of the layer owning the element.
    pub layer_id: String,
    /// Element id within its layer.
    pub element_id: String,
    /// Sub-part of the element that was hit, if the renderer tagged one.
    pub part: Option<String>,
    /// Whether the element was selected when it was rendered.
    pub selected: bool,
}

impl ElementRef {
    /// An unselected element reference without a part.
    pub fn new(
        kind: ElementKind,
        layer_id: impl Into<String>,
        element_id: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            layer_id: layer_id.into(),
            element_id: element_id.into(),
            part: None,
            selected: false,
        }
    }

    /// Sets the hit part.
    #[must_use]
    pub fn with_part(mut self, part: impl Into<String>) -> Self {
        self.part = Some(part.into());
        self
    }

    /// Sets the selected flag.
    #[must_use]
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// `true` when the hit part is an item's rotation handle.
    #[must_use]
    pub fn is_rotation_anchor(&self) -> bool {
        self.part.as_deref() == Some(ROTATION_ANCHOR)
    }
}

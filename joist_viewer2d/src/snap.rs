// Copyright 2025 the Joist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

bitflags::bitflags! {
    /// Geometric snapping targets enabled in the editor.
    ///
    /// The viewer never inspects these bits. It forwards the mask from host
    /// state to line and vertex collaborators exactly as received.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SnapMask: u8 {
        /// Snap to existing vertices.
        const POINT   = 0b0000_0001;
        /// Snap to infinite extensions of lines.
        const LINE    = 0b0000_0010;
        /// Snap to line segments.
        const SEGMENT = 0b0000_0100;
        /// Snap to the grid.
        const GRID    = 0b0000_1000;
        /// Snap to guides.
        const GUIDE   = 0b0001_0000;
    }
}

impl Default for SnapMask {
    fn default() -> Self {
        Self::all()
    }
}

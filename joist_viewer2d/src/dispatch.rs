// Copyright 2025 the Joist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture dispatcher: pointer events plus the current mode in, one
//! collaborator request out.
//!
//! The dispatcher is keyed by `(mode, event)`:
//!
//! - **move**: always reports the pointer position through
//!   [`ProjectActions::update_mouse_coord`](crate::actions::ProjectActions::update_mouse_coord),
//!   then forwards gesture progress for drawing, dragging and rotating modes.
//! - **down**: only `Idle` looks at the element under the pointer. A press on
//!   a *selected* line, vertex, hole or item begins dragging it; a press on an
//!   item's rotation handle begins rotating it. Unselected elements and empty
//!   space do nothing.
//! - **up**: in `Idle`, a release on an unselected area, line, hole or item
//!   selects it and a release on empty space clears the selection. In gesture
//!   modes it ends the gesture; while drawing a line it ends the segment and
//!   starts the next one at the same point.
//!
//! The dispatcher keeps no state between events. Mode transitions happen in
//! the store as a result of the requests it makes.
//!
//! ## Event order
//!
//! Callers must deliver the events of one gesture as down, any number of
//! moves, then up. The dispatcher cannot tell an up that closes a gesture from
//! a stray one, so filtering unpaired releases is the caller's job
//! ([`Viewer2D`](crate::Viewer2D) does it with a
//! [`PointerSequence`](joist_event_state::PointerSequence)).

use joist_hit::{ElementKind, ElementLookup, ElementRef, HitError};
use kurbo::Point;

use crate::actions::PlannerActions;
use crate::mode::InteractionMode;
use crate::snap::SnapMask;

/// Host state read by one dispatch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DispatchContext<'a> {
    /// Current interaction mode.
    pub mode: InteractionMode,
    /// The scene's selected layer; new lines, holes and items go there.
    pub layer_id: &'a str,
    /// Snap configuration forwarded to line and vertex requests.
    pub snap_mask: SnapMask,
}

impl<'a> DispatchContext<'a> {
    /// A context with the default snap mask.
    #[must_use]
    pub fn new(mode: InteractionMode, layer_id: &'a str) -> Self {
        Self {
            mode,
            layer_id,
            snap_mask: SnapMask::default(),
        }
    }

    /// Replaces the snap mask.
    #[must_use]
    pub fn with_snap_mask(mut self, snap_mask: SnapMask) -> Self {
        self.snap_mask = snap_mask;
        self
    }
}

/// The gesture request made by one dispatch.
///
/// The coordinate readout made by every move is not listed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dispatched {
    /// Nothing was requested.
    None,
    /// [`ProjectActions::unselect_all`](crate::actions::ProjectActions::unselect_all).
    UnselectAll,
    /// An area was selected.
    SelectArea,
    /// A line was selected.
    SelectLine,
    /// A hole was selected.
    SelectHole,
    /// An item was selected.
    SelectItem,
    /// A new line was started.
    BeginDrawingLine,
    /// The line being drawn was updated.
    UpdateDrawingLine,
    /// The current segment was committed and the next one started.
    ContinueDrawingLine,
    /// The hole being placed was moved.
    UpdateDrawingHole,
    /// The hole being placed was committed.
    EndDrawingHole,
    /// The item being placed was moved.
    UpdateDrawingItem,
    /// The item being placed was committed.
    EndDrawingItem,
    /// A line drag began.
    BeginDraggingLine,
    /// A line drag progressed.
    UpdateDraggingLine,
    /// A line drag ended.
    EndDraggingLine,
    /// A hole drag began.
    BeginDraggingHole,
    /// A hole drag progressed.
    UpdateDraggingHole,
    /// A hole drag ended.
    EndDraggingHole,
    /// An item drag began.
    BeginDraggingItem,
    /// An item drag progressed.
    UpdateDraggingItem,
    /// An item drag ended.
    EndDraggingItem,
    /// A vertex drag began.
    BeginDraggingVertex,
    /// A vertex drag progressed.
    UpdateDraggingVertex,
    /// A vertex drag ended.
    EndDraggingVertex,
    /// An item rotation began.
    BeginRotatingItem,
    /// An item rotation progressed.
    UpdateRotatingItem,
    /// An item rotation ended.
    EndRotatingItem,
}

/// Translates pointer events into collaborator requests.
///
/// Owns its collaborators; reach them through [`GestureDispatcher::actions`]
/// and friends.
#[derive(Clone, Debug, Default)]
pub struct GestureDispatcher<A> {
    actions: A,
}

impl<A: PlannerActions> GestureDispatcher<A> {
    /// Creates a dispatcher requesting mutations from `actions`.
    pub fn new(actions: A) -> Self {
        Self { actions }
    }

    /// The collaborators.
    pub fn actions(&self) -> &A {
        &self.actions
    }

    /// The collaborators, mutably.
    pub fn actions_mut(&mut self) -> &mut A {
        &mut self.actions
    }

    /// Gives the collaborators back.
    pub fn into_actions(self) -> A {
        self.actions
    }

    /// Handles a pointer move to scene point `at`.
    ///
    /// Precondition: during a gesture, moves arrive between the down and the
    /// up that delimit it.
    pub fn pointer_move(&mut self, ctx: &DispatchContext<'_>, at: Point) -> Dispatched {
        self.actions.update_mouse_coord(at);
        let snap = ctx.snap_mask;
        let dispatched = match ctx.mode {
            InteractionMode::DrawingLine => {
                self.actions.update_drawing_line(at, snap);
                Dispatched::UpdateDrawingLine
            }
            InteractionMode::DrawingHole => {
                self.actions.update_drawing_hole(ctx.layer_id, at);
                Dispatched::UpdateDrawingHole
            }
            InteractionMode::DrawingItem => {
                self.actions.update_drawing_item(ctx.layer_id, at);
                Dispatched::UpdateDrawingItem
            }
            InteractionMode::DraggingHole => {
                self.actions.update_dragging_hole(at);
                Dispatched::UpdateDraggingHole
            }
            InteractionMode::DraggingLine => {
                self.actions.update_dragging_line(at, snap);
                Dispatched::UpdateDraggingLine
            }
            InteractionMode::DraggingVertex => {
                self.actions.update_dragging_vertex(at, snap);
                Dispatched::UpdateDraggingVertex
            }
            InteractionMode::DraggingItem => {
                self.actions.update_dragging_item(at);
                Dispatched::UpdateDraggingItem
            }
            InteractionMode::RotatingItem => {
                self.actions.update_rotating_item(at);
                Dispatched::UpdateRotatingItem
            }
            InteractionMode::Idle
            | InteractionMode::View3D
            | InteractionMode::FirstPerson3D
            | InteractionMode::Pan
            | InteractionMode::ZoomIn
            | InteractionMode::ZoomOut
            | InteractionMode::WaitingDrawingLine
            | InteractionMode::UploadingImage
            | InteractionMode::FittingImage
            | InteractionMode::ViewingCatalog
            | InteractionMode::ConfiguringProject
            | InteractionMode::ConfiguringLayer
            | InteractionMode::ConfiguringElement => Dispatched::None,
        };
        tracing::trace!(mode = %ctx.mode, ?dispatched, "pointer move");
        dispatched
    }

    /// Handles a pointer press at scene point `at` over `target`.
    ///
    /// Precondition: no other press is in flight. Outside `Idle` the event is
    /// ignored without resolving `target`.
    ///
    /// # Errors
    ///
    /// Returns the lookup's [`HitError`] when `target` lies in a malformed
    /// element root. No collaborator is called in that case.
    pub fn pointer_down<L: ElementLookup>(
        &mut self,
        ctx: &DispatchContext<'_>,
        lookup: &L,
        target: L::Handle,
        at: Point,
    ) -> Result<Dispatched, HitError> {
        if ctx.mode != InteractionMode::Idle {
            tracing::trace!(mode = %ctx.mode, "pointer down ignored outside idle");
            return Ok(Dispatched::None);
        }
        let Some(element) = lookup.resolve(target)? else {
            return Ok(Dispatched::None);
        };
        if !element.selected {
            tracing::trace!(
                kind = %element.kind,
                id = %element.element_id,
                "press on unselected element"
            );
            return Ok(Dispatched::None);
        }

        let ElementRef {
            kind,
            layer_id,
            element_id,
            ..
        } = &element;
        let snap = ctx.snap_mask;
        let dispatched = match kind {
            ElementKind::Lines => {
                self.actions.begin_dragging_line(layer_id, element_id, at, snap);
                Dispatched::BeginDraggingLine
            }
            ElementKind::Vertices => {
                self.actions.begin_dragging_vertex(layer_id, element_id, at, snap);
                Dispatched::BeginDraggingVertex
            }
            ElementKind::Items if element.is_rotation_anchor() => {
                self.actions.begin_rotating_item(layer_id, element_id, at);
                Dispatched::BeginRotatingItem
            }
            ElementKind::Items => {
                self.actions.begin_dragging_item(layer_id, element_id, at);
                Dispatched::BeginDraggingItem
            }
            ElementKind::Holes => {
                self.actions.begin_dragging_hole(layer_id, element_id, at);
                Dispatched::BeginDraggingHole
            }
            ElementKind::Areas => Dispatched::None,
            ElementKind::Other(other) => {
                tracing::debug!(kind = %other, "press on unknown element kind ignored");
                Dispatched::None
            }
        };
        tracing::debug!(?dispatched, layer = %layer_id, id = %element_id, "pointer down");
        Ok(dispatched)
    }

    /// Handles a pointer release at scene point `at` over `target`.
    ///
    /// Precondition: a matching [`pointer_down`](Self::pointer_down) was
    /// delivered for this gesture. `target` is only resolved in `Idle`.
    ///
    /// # Errors
    ///
    /// Returns the lookup's [`HitError`] when `target` lies in a malformed
    /// element root. No collaborator is called in that case.
    pub fn pointer_up<L: ElementLookup>(
        &mut self,
        ctx: &DispatchContext<'_>,
        lookup: &L,
        target: L::Handle,
        at: Point,
    ) -> Result<Dispatched, HitError> {
        let snap = ctx.snap_mask;
        let dispatched = match ctx.mode {
            InteractionMode::Idle => {
                let element = lookup.resolve(target)?;
                self.select(element)
            }
            InteractionMode::WaitingDrawingLine => {
                self.actions.begin_drawing_line(ctx.layer_id, at, snap);
                Dispatched::BeginDrawingLine
            }
            InteractionMode::DrawingLine => {
                self.actions.end_drawing_line(at, snap);
                self.actions.begin_drawing_line(ctx.layer_id, at, snap);
                Dispatched::ContinueDrawingLine
            }
            InteractionMode::DrawingHole => {
                self.actions.end_drawing_hole(ctx.layer_id, at);
                Dispatched::EndDrawingHole
            }
            InteractionMode::DrawingItem => {
                self.actions.end_drawing_item(ctx.layer_id, at);
                Dispatched::EndDrawingItem
            }
            InteractionMode::DraggingLine => {
                self.actions.end_dragging_line(at, snap);
                Dispatched::EndDraggingLine
            }
            InteractionMode::DraggingHole => {
                self.actions.end_dragging_hole(at);
                Dispatched::EndDraggingHole
            }
            InteractionMode::DraggingItem => {
                self.actions.end_dragging_item(at);
                Dispatched::EndDraggingItem
            }
            InteractionMode::DraggingVertex => {
                self.actions.end_dragging_vertex(at, snap);
                Dispatched::EndDraggingVertex
            }
            InteractionMode::RotatingItem => {
                self.actions.end_rotating_item(at);
                Dispatched::EndRotatingItem
            }
            InteractionMode::View3D
            | InteractionMode::FirstPerson3D
            | InteractionMode::Pan
            | InteractionMode::ZoomIn
            | InteractionMode::ZoomOut
            | InteractionMode::UploadingImage
            | InteractionMode::FittingImage
            | InteractionMode::ViewingCatalog
            | InteractionMode::ConfiguringProject
            | InteractionMode::ConfiguringLayer
            | InteractionMode::ConfiguringElement => Dispatched::None,
        };
        tracing::debug!(mode = %ctx.mode, ?dispatched, "pointer up");
        Ok(dispatched)
    }

    fn select(&mut self, element: Option<ElementRef>) -> Dispatched {
        let Some(element) = element else {
            self.actions.unselect_all();
            return Dispatched::UnselectAll;
        };
        // Releasing a press that began a drag must not re-select.
        if element.selected {
            return Dispatched::None;
        }
        let (layer_id, element_id) = (&element.layer_id, &element.element_id);
        match &element.kind {
            ElementKind::Areas => {
                self.actions.select_area(layer_id, element_id);
                Dispatched::SelectArea
            }
            ElementKind::Lines => {
                self.actions.select_line(layer_id, element_id);
                Dispatched::SelectLine
            }
            ElementKind::Holes => {
                self.actions.select_hole(layer_id, element_id);
                Dispatched::SelectHole
            }
            ElementKind::Items => {
                self.actions.select_item(layer_id, element_id);
                Dispatched::SelectItem
            }
            ElementKind::Vertices => Dispatched::None,
            ElementKind::Other(other) => {
                tracing::debug!(kind = %other, "release on unknown element kind ignored");
                Dispatched::None
            }
        }
    }
}

// Copyright 2025 the Joist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared doubles for the viewer integration tests.

#![allow(
    missing_docs,
    dead_code,
    reason = "Integration-test helper module; each test file uses a different subset."
)]

use joist_viewer2d::actions::{
    AreaActions, HolesActions, ItemsActions, LinesActions, ProjectActions, VerticesActions,
    Viewer2DActions, Viewer3DActions,
};
use joist_viewer2d::{ElementKind, ElementLookup, ElementRef, HitError, SnapMask, ViewTransform};
use kurbo::Point;

/// One collaborator request, with its arguments.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    UpdateMouseCoord(Point),
    UnselectAll,
    UpdateZoomScale(f64),
    Rollback,
    Undo,
    SelectToolEdit,
    OpenCatalog,
    OpenProjectConfigurator,
    UpdateCameraView(ViewTransform),
    SelectToolPan,
    SelectToolZoomIn,
    SelectToolZoomOut,
    SelectTool3DView,
    SelectTool3DFirstPerson,
    BeginDrawingLine(String, Point, SnapMask),
    UpdateDrawingLine(Point, SnapMask),
    EndDrawingLine(Point, SnapMask),
    BeginDraggingLine(String, String, Point, SnapMask),
    UpdateDraggingLine(Point, SnapMask),
    EndDraggingLine(Point, SnapMask),
    SelectLine(String, String),
    BeginDrawingHole(String, Point),
    UpdateDrawingHole(String, Point),
    EndDrawingHole(String, Point),
    BeginDraggingHole(String, String, Point),
    UpdateDraggingHole(Point),
    EndDraggingHole(Point),
    SelectHole(String, String),
    BeginDrawingItem(String, Point),
    UpdateDrawingItem(String, Point),
    EndDrawingItem(String, Point),
    BeginDraggingItem(String, String, Point),
    UpdateDraggingItem(Point),
    EndDraggingItem(Point),
    BeginRotatingItem(String, String, Point),
    UpdateRotatingItem(Point),
    EndRotatingItem(Point),
    SelectItem(String, String),
    BeginDraggingVertex(String, String, Point, SnapMask),
    UpdateDraggingVertex(Point, SnapMask),
    EndDraggingVertex(Point, SnapMask),
    SelectArea(String, String),
}

impl Call {
    pub fn is_mouse_coord(&self) -> bool {
        matches!(self, Self::UpdateMouseCoord(_))
    }
}

/// Records every request in order.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
}

impl Recorder {
    /// Requests other than the coordinate readout.
    pub fn gesture_calls(&self) -> Vec<Call> {
        self.calls
            .iter()
            .filter(|call| !call.is_mouse_coord())
            .cloned()
            .collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    fn push(&mut self, call: Call) {
        self.calls.push(call);
    }
}

impl ProjectActions for Recorder {
    fn update_mouse_coord(&mut self, at: Point) {
        self.push(Call::UpdateMouseCoord(at));
    }
    fn unselect_all(&mut self) {
        self.push(Call::UnselectAll);
    }
    fn update_zoom_scale(&mut self, scale: f64) {
        self.push(Call::UpdateZoomScale(scale));
    }
    fn rollback(&mut self) {
        self.push(Call::Rollback);
    }
    fn undo(&mut self) {
        self.push(Call::Undo);
    }
    fn select_tool_edit(&mut self) {
        self.push(Call::SelectToolEdit);
    }
    fn open_catalog(&mut self) {
        self.push(Call::OpenCatalog);
    }
    fn open_project_configurator(&mut self) {
        self.push(Call::OpenProjectConfigurator);
    }
}

impl Viewer2DActions for Recorder {
    fn update_camera_view(&mut self, value: ViewTransform) {
        self.push(Call::UpdateCameraView(value));
    }
    fn select_tool_pan(&mut self) {
        self.push(Call::SelectToolPan);
    }
    fn select_tool_zoom_in(&mut self) {
        self.push(Call::SelectToolZoomIn);
    }
    fn select_tool_zoom_out(&mut self) {
        self.push(Call::SelectToolZoomOut);
    }
}

impl Viewer3DActions for Recorder {
    fn select_tool_3d_view(&mut self) {
        self.push(Call::SelectTool3DView);
    }
    fn select_tool_3d_first_person(&mut self) {
        self.push(Call::SelectTool3DFirstPerson);
    }
}

impl LinesActions for Recorder {
    fn begin_drawing_line(&mut self, layer_id: &str, at: Point, snap: SnapMask) {
        self.push(Call::BeginDrawingLine(layer_id.into(), at, snap));
    }
    fn update_drawing_line(&mut self, at: Point, snap: SnapMask) {
        self.push(Call::UpdateDrawingLine(at, snap));
    }
    fn end_drawing_line(&mut self, at: Point, snap: SnapMask) {
        self.push(Call::EndDrawingLine(at, snap));
    }
    fn begin_dragging_line(&mut self, layer_id: &str, line_id: &str, at: Point, snap: SnapMask) {
        self.push(Call::BeginDraggingLine(layer_id.into(), line_id.into(), at, snap));
    }
    fn update_dragging_line(&mut self, at: Point, snap: SnapMask) {
        self.push(Call::UpdateDraggingLine(at, snap));
    }
    fn end_dragging_line(&mut self, at: Point, snap: SnapMask) {
        self.push(Call::EndDraggingLine(at, snap));
    }
    fn select_line(&mut self, layer_id: &str, line_id: &str) {
        self.push(Call::SelectLine(layer_id.into(), line_id.into()));
    }
}

impl HolesActions for Recorder {
    fn begin_drawing_hole(&mut self, layer_id: &str, at: Point) {
        self.push(Call::BeginDrawingHole(layer_id.into(), at));
    }
    fn update_drawing_hole(&mut self, layer_id: &str, at: Point) {
        self.push(Call::UpdateDrawingHole(layer_id.into(), at));
    }
    fn end_drawing_hole(&mut self, layer_id: &str, at: Point) {
        self.push(Call::EndDrawingHole(layer_id.into(), at));
    }
    fn begin_dragging_hole(&mut self, layer_id: &str, hole_id: &str, at: Point) {
        self.push(Call::BeginDraggingHole(layer_id.into(), hole_id.into(), at));
    }
    fn update_dragging_hole(&mut self, at: Point) {
        self.push(Call::UpdateDraggingHole(at));
    }
    fn end_dragging_hole(&mut self, at: Point) {
        self.push(Call::EndDraggingHole(at));
    }
    fn select_hole(&mut self, layer_id: &str, hole_id: &str) {
        self.push(Call::SelectHole(layer_id.into(), hole_id.into()));
    }
}

impl ItemsActions for Recorder {
    fn begin_drawing_item(&mut self, layer_id: &str, at: Point) {
        self.push(Call::BeginDrawingItem(layer_id.into(), at));
    }
    fn update_drawing_item(&mut self, layer_id: &str, at: Point) {
        self.push(Call::UpdateDrawingItem(layer_id.into(), at));
    }
    fn end_drawing_item(&mut self, layer_id: &str, at: Point) {
        self.push(Call::EndDrawingItem(layer_id.into(), at));
    }
    fn begin_dragging_item(&mut self, layer_id: &str, item_id: &str, at: Point) {
        self.push(Call::BeginDraggingItem(layer_id.into(), item_id.into(), at));
    }
    fn update_dragging_item(&mut self, at: Point) {
        self.push(Call::UpdateDraggingItem(at));
    }
    fn end_dragging_item(&mut self, at: Point) {
        self.push(Call::EndDraggingItem(at));
    }
    fn begin_rotating_item(&mut self, layer_id: &str, item_id: &str, at: Point) {
        self.push(Call::BeginRotatingItem(layer_id.into(), item_id.into(), at));
    }
    fn update_rotating_item(&mut self, at: Point) {
        self.push(Call::UpdateRotatingItem(at));
    }
    fn end_rotating_item(&mut self, at: Point) {
        self.push(Call::EndRotatingItem(at));
    }
    fn select_item(&mut self, layer_id: &str, item_id: &str) {
        self.push(Call::SelectItem(layer_id.into(), item_id.into()));
    }
}

impl VerticesActions for Recorder {
    fn begin_dragging_vertex(
        &mut self,
        layer_id: &str,
        vertex_id: &str,
        at: Point,
        snap: SnapMask,
    ) {
        self.push(Call::BeginDraggingVertex(layer_id.into(), vertex_id.into(), at, snap));
    }
    fn update_dragging_vertex(&mut self, at: Point, snap: SnapMask) {
        self.push(Call::UpdateDraggingVertex(at, snap));
    }
    fn end_dragging_vertex(&mut self, at: Point, snap: SnapMask) {
        self.push(Call::EndDraggingVertex(at, snap));
    }
}

impl AreaActions for Recorder {
    fn select_area(&mut self, layer_id: &str, area_id: &str) {
        self.push(Call::SelectArea(layer_id.into(), area_id.into()));
    }
}

/// Lookup whose handles are the hit results themselves.
#[derive(Clone, Copy, Debug, Default)]
pub struct Synthetic;

impl ElementLookup for Synthetic {
    type Handle = Result<Option<ElementRef>, HitError>;

    fn resolve(&self, handle: Self::Handle) -> Result<Option<ElementRef>, HitError> {
        handle
    }
}

pub fn nothing() -> Result<Option<ElementRef>, HitError> {
    Ok(None)
}

pub fn hit(kind: ElementKind, id: &str, selected: bool) -> Result<Option<ElementRef>, HitError> {
    Ok(Some(ElementRef::new(kind, "layer-1", id).selected(selected)))
}

pub fn hit_part(
    kind: ElementKind,
    id: &str,
    part: &str,
    selected: bool,
) -> Result<Option<ElementRef>, HitError> {
    Ok(Some(
        ElementRef::new(kind, "layer-1", id)
            .with_part(part)
            .selected(selected),
    ))
}

pub fn malformed() -> Result<Option<ElementRef>, HitError> {
    Err(HitError::MissingAttribute { attribute: "data-id" })
}

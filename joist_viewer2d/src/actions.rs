// Copyright 2025 the Joist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator contracts: the mutations the viewer may request.
//!
//! The editor store owns the scene, the mode and the camera. The viewer never
//! touches them directly; it calls into these traits and reads the new state
//! on the next render. Each trait mirrors one action group of the store.
//!
//! Points are scene-space. Update and end calls of a gesture carry only the
//! point (plus the snap mask for lines and vertices) because the store already
//! knows which element the gesture began on.

use joist_view2d::ViewTransform;
use kurbo::Point;

use crate::snap::SnapMask;

/// Project-wide actions.
pub trait ProjectActions {
    /// Reports the scene-space pointer position for the coordinate readout.
    fn update_mouse_coord(&mut self, at: Point);
    /// Clears the selection.
    fn unselect_all(&mut self);
    /// Reports the camera's zoom scale.
    fn update_zoom_scale(&mut self, scale: f64);
    /// Abandons the current operation and returns to idle.
    fn rollback(&mut self);
    /// Reverts the last committed change.
    fn undo(&mut self);
    /// Switches to the editing tool.
    fn select_tool_edit(&mut self);
    /// Opens the element catalog.
    fn open_catalog(&mut self);
    /// Opens the project settings.
    fn open_project_configurator(&mut self);
}

/// Actions of the 2D viewer.
pub trait Viewer2DActions {
    /// Stores a new camera value.
    fn update_camera_view(&mut self, value: ViewTransform);
    /// Switches to the pan tool.
    fn select_tool_pan(&mut self);
    /// Switches to the zoom-in tool.
    fn select_tool_zoom_in(&mut self);
    /// Switches to the zoom-out tool.
    fn select_tool_zoom_out(&mut self);
}

/// Actions of the 3D viewers, reachable from the main toolbar.
pub trait Viewer3DActions {
    /// Shows the orbiting 3D view.
    fn select_tool_3d_view(&mut self);
    /// Shows the first-person 3D view.
    fn select_tool_3d_first_person(&mut self);
}

/// Wall line actions.
pub trait LinesActions {
    /// Places the first vertex of a new line on `layer_id`.
    fn begin_drawing_line(&mut self, layer_id: &str, at: Point, snap: SnapMask);
    /// Moves the free end of the line being drawn.
    fn update_drawing_line(&mut self, at: Point, snap: SnapMask);
    /// Commits the line being drawn.
    fn end_drawing_line(&mut self, at: Point, snap: SnapMask);
    /// Starts dragging a selected line.
    fn begin_dragging_line(&mut self, layer_id: &str, line_id: &str, at: Point, snap: SnapMask);
    /// Moves the dragged line.
    fn update_dragging_line(&mut self, at: Point, snap: SnapMask);
    /// Drops the dragged line.
    fn end_dragging_line(&mut self, at: Point, snap: SnapMask);
    /// Selects a line.
    fn select_line(&mut self, layer_id: &str, line_id: &str);
}

/// Hole (door, window) actions.
pub trait HolesActions {
    /// Starts placing a new hole. Called by catalog surfaces, not by the viewer.
    fn begin_drawing_hole(&mut self, layer_id: &str, at: Point);
    /// Moves the hole being placed.
    fn update_drawing_hole(&mut self, layer_id: &str, at: Point);
    /// Commits the hole being placed.
    fn end_drawing_hole(&mut self, layer_id: &str, at: Point);
    /// Starts dragging a selected hole.
    fn begin_dragging_hole(&mut self, layer_id: &str, hole_id: &str, at: Point);
    /// Moves the dragged hole along its line.
    fn update_dragging_hole(&mut self, at: Point);
    /// Drops the dragged hole.
    fn end_dragging_hole(&mut self, at: Point);
    /// Selects a hole.
    fn select_hole(&mut self, layer_id: &str, hole_id: &str);
}

/// Item (furniture) actions.
pub trait ItemsActions {
    /// Starts placing a new item. Called by catalog surfaces, not by the viewer.
    fn begin_drawing_item(&mut self, layer_id: &str, at: Point);
    /// Moves the item being placed.
    fn update_drawing_item(&mut self, layer_id: &str, at: Point);
    /// Commits the item being placed.
    fn end_drawing_item(&mut self, layer_id: &str, at: Point);
    /// Starts dragging a selected item.
    fn begin_dragging_item(&mut self, layer_id: &str, item_id: &str, at: Point);
    /// Moves the dragged item.
    fn update_dragging_item(&mut self, at: Point);
    /// Drops the dragged item.
    fn end_dragging_item(&mut self, at: Point);
    /// Starts rotating a selected item by its handle.
    fn begin_rotating_item(&mut self, layer_id: &str, item_id: &str, at: Point);
    /// Rotates the item towards `at`.
    fn update_rotating_item(&mut self, at: Point);
    /// Commits the rotation.
    fn end_rotating_item(&mut self, at: Point);
    /// Selects an item.
    fn select_item(&mut self, layer_id: &str, item_id: &str);
}

/// Vertex actions.
pub trait VerticesActions {
    /// Starts dragging a selected vertex.
    fn begin_dragging_vertex(&mut self, layer_id: &str, vertex_id: &str, at: Point, snap: SnapMask);
    /// Moves the dragged vertex.
    fn update_dragging_vertex(&mut self, at: Point, snap: SnapMask);
    /// Drops the dragged vertex.
    fn end_dragging_vertex(&mut self, at: Point, snap: SnapMask);
}

/// Area (room) actions.
pub trait AreaActions {
    /// Selects an area.
    fn select_area(&mut self, layer_id: &str, area_id: &str);
}

/// Every collaborator the viewer talks to.
///
/// Implemented automatically for any type implementing all the groups, which
/// is usually the editor store itself.
pub trait PlannerActions:
    ProjectActions
    + Viewer2DActions
    + Viewer3DActions
    + LinesActions
    + HolesActions
    + ItemsActions
    + VerticesActions
    + AreaActions
{
}

impl<T> PlannerActions for T where
    T: ProjectActions
        + Viewer2DActions
        + Viewer3DActions
        + LinesActions
        + HolesActions
        + ItemsActions
        + VerticesActions
        + AreaActions
{
}

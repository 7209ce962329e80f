// Copyright 2025 the Joist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The 2D viewer: camera, tool routing and gesture dispatch behind one type.
//!
//! [`Viewer2D`] receives device-space pointer events from the host widget
//! together with a snapshot of host state ([`ViewerState`]). For each event
//! it:
//!
//! 1. loads the host camera into its [`Viewport2D`] (or fits the scene when
//!    the host has none yet),
//! 2. maps the pointer to scene space (device -> viewer -> scene),
//! 3. tells registered [`PointerObserver`]s,
//! 4. routes the event by the mode's [`Tool`]: navigation tools move the
//!    camera, `None` and `Auto` go to the [`GestureDispatcher`].
//!
//! Camera changes are never applied locally. They are reported through
//! [`Viewer2D::change_value`] and come back in the next [`ViewerState`].

use core::fmt;

use joist_event_state::PointerSequence;
use joist_hit::{ElementLookup, HitError};
use joist_view2d::{SceneFrame, ViewTransform, Viewport2D};
use kurbo::{Point, Rect, Vec2};
use smallvec::SmallVec;

use crate::actions::PlannerActions;
use crate::classify::{ModeProfile, Tool};
use crate::dispatch::{DispatchContext, Dispatched, GestureDispatcher};
use crate::mode::InteractionMode;
use crate::options::ViewerOptions;
use crate::snap::SnapMask;
use crate::toolbar::{NavButton, navigation_buttons};

/// The part of the scene the viewer reads.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneInfo {
    /// Surface width in scene units.
    pub width: f64,
    /// Surface height in scene units.
    pub height: f64,
    /// Layer receiving newly drawn elements.
    pub selected_layer: String,
}

impl SceneInfo {
    /// Describes a `width` x `height` scene drawing into `selected_layer`.
    pub fn new(width: f64, height: f64, selected_layer: impl Into<String>) -> Self {
        Self {
            width,
            height,
            selected_layer: selected_layer.into(),
        }
    }

    /// The drawing surface.
    #[must_use]
    pub fn frame(&self) -> SceneFrame {
        SceneFrame::new(self.width, self.height)
    }
}

/// Snapshot of host state taken for one viewer call.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewerState {
    /// Current interaction mode.
    pub mode: InteractionMode,
    /// The scene.
    pub scene: SceneInfo,
    /// Snap configuration.
    pub snap_mask: SnapMask,
    /// Stored camera, or `None` before the first camera change.
    pub camera: Option<ViewTransform>,
}

impl ViewerState {
    /// A state in `mode` with every snap enabled and no stored camera.
    pub fn new(mode: InteractionMode, scene: SceneInfo) -> Self {
        Self {
            mode,
            scene,
            snap_mask: SnapMask::default(),
            camera: None,
        }
    }

    /// Sets the stored camera.
    #[must_use]
    pub fn with_camera(mut self, camera: ViewTransform) -> Self {
        self.camera = Some(camera);
        self
    }

    /// Sets the snap mask.
    #[must_use]
    pub fn with_snap_mask(mut self, snap_mask: SnapMask) -> Self {
        self.snap_mask = snap_mask;
        self
    }

    fn dispatch_context(&self) -> DispatchContext<'_> {
        DispatchContext::new(self.mode, &self.scene.selected_layer).with_snap_mask(self.snap_mask)
    }
}

/// A pointer event as delivered by the host widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent<H> {
    /// Pointer position in device pixels.
    pub position: Point,
    /// The host's hit handle for the node under the pointer.
    pub target: H,
}

impl<H> PointerEvent<H> {
    /// An event at `position` over `target`.
    pub fn new(position: Point, target: H) -> Self {
        Self { position, target }
    }
}

/// Phase of a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Button pressed.
    Down,
    /// Pointer moved.
    Move,
    /// Button released.
    Up,
}

/// What [`PointerObserver`]s are told about each pointer event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerNotice {
    /// Event phase.
    pub phase: PointerPhase,
    /// Mode at the time of the event.
    pub mode: InteractionMode,
    /// Device-space position.
    pub device: Point,
    /// Scene-space position.
    pub scene: Point,
}

/// Receives every pointer event before the viewer acts on it.
///
/// Plugins use this to follow the pointer without taking part in dispatch.
pub trait PointerObserver {
    /// Called once per pointer event.
    fn observe(&mut self, notice: &PointerNotice);
}

impl<F: FnMut(&PointerNotice)> PointerObserver for F {
    fn observe(&mut self, notice: &PointerNotice) {
        self(notice);
    }
}

/// Everything a scene renderer needs to draw one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Tool, cursor, pointer events and autopan of the current mode.
    pub profile: ModeProfile,
    /// Camera, viewer space to device space.
    pub transform: ViewTransform,
    /// The drawing surface.
    pub scene: SceneFrame,
    /// The viewer widget rectangle in device pixels.
    pub view_rect: Rect,
}

impl Frame {
    /// Maps a scene-space point to device pixels.
    #[must_use]
    pub fn scene_to_device(&self, scene: Point) -> Point {
        self.transform.apply(self.scene.to_viewer(scene))
    }
}

/// Draws the scene tree inside a [`Frame`].
pub trait SceneRenderer {
    /// What rendering produces (markup, a display list, ...).
    type Output;

    /// Renders `state` with the frame's camera and style.
    fn render(&mut self, frame: &Frame, state: &ViewerState) -> Self::Output;
}

/// Where a press and its follow-up events go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PressRoute {
    /// Gesture dispatcher.
    Dispatch,
    /// Auto tool press on nothing draggable: drags pan, the release dispatches.
    AutoPan,
    /// Pan tool.
    Pan,
    /// Zoom-in tool.
    ZoomIn,
    /// Zoom-out tool.
    ZoomOut,
}

/// The interactive 2D floor-plan viewer.
pub struct Viewer2D<A> {
    dispatcher: GestureDispatcher<A>,
    viewport: Viewport2D,
    sequence: PointerSequence,
    route: Option<PressRoute>,
    options: ViewerOptions,
    observers: Vec<Box<dyn PointerObserver>>,
}

impl<A: fmt::Debug> fmt::Debug for Viewer2D<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Viewer2D")
            .field("dispatcher", &self.dispatcher)
            .field("viewport", &self.viewport)
            .field("sequence", &self.sequence)
            .field("route", &self.route)
            .field("options", &self.options)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<A: PlannerActions> Viewer2D<A> {
    /// Creates a viewer filling `view_rect` (device pixels) that requests
    /// mutations from `actions`.
    pub fn new(actions: A, view_rect: Rect, options: ViewerOptions) -> Self {
        let mut viewport = Viewport2D::new(view_rect);
        let (min_zoom, max_zoom) = options.zoom_limits;
        viewport.set_zoom_limits(min_zoom, max_zoom);
        viewport.set_fit_mode(options.fit_mode);
        viewport.set_clamp_mode(options.clamp_mode);
        Self {
            dispatcher: GestureDispatcher::new(actions),
            viewport,
            sequence: PointerSequence::default(),
            route: None,
            options,
            observers: Vec::new(),
        }
    }

    /// The collaborators.
    pub fn actions(&self) -> &A {
        self.dispatcher.actions()
    }

    /// The collaborators, mutably.
    pub fn actions_mut(&mut self) -> &mut A {
        self.dispatcher.actions_mut()
    }

    /// Gives the collaborators back.
    pub fn into_actions(self) -> A {
        self.dispatcher.into_actions()
    }

    /// Current options.
    pub fn options(&self) -> &ViewerOptions {
        &self.options
    }

    /// The camera as of the last event.
    pub fn viewport(&self) -> &Viewport2D {
        &self.viewport
    }

    /// Resizes the viewer widget.
    pub fn set_view_rect(&mut self, rect: Rect) {
        self.viewport.set_view_rect(rect);
    }

    /// Registers an observer for every pointer event.
    pub fn add_observer(&mut self, observer: impl PointerObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Builds the frame for `state`.
    pub fn frame(&mut self, state: &ViewerState) -> Frame {
        self.sync_camera(state);
        Frame {
            profile: ModeProfile::of(state.mode),
            transform: self.viewport.transform(),
            scene: state.scene.frame(),
            view_rect: self.viewport.view_rect(),
        }
    }

    /// Renders `state` through `renderer`.
    pub fn render<R: SceneRenderer>(&mut self, state: &ViewerState, renderer: &mut R) -> R::Output {
        let frame = self.frame(state);
        renderer.render(&frame, state)
    }

    /// Navigation toolbar buttons for `state`.
    pub fn navigation_buttons(&self, state: &ViewerState) -> SmallVec<[NavButton; 4]> {
        navigation_buttons(ModeProfile::of(state.mode).tool, self.options.view_only)
    }

    /// Handles a pointer press.
    ///
    /// Starts a press sequence; the matching [`pointer_up`](Self::pointer_up)
    /// closes it.
    ///
    /// # Errors
    ///
    /// Returns the [`HitError`] of a malformed element root. The press is
    /// abandoned and its release will be dropped.
    pub fn pointer_down<L: ElementLookup>(
        &mut self,
        state: &ViewerState,
        lookup: &L,
        event: PointerEvent<L::Handle>,
    ) -> Result<Dispatched, HitError> {
        let scene = self.begin_event(state, PointerPhase::Down, event.position);
        self.sequence.press(event.position);

        let tool = ModeProfile::of(state.mode).tool;
        let (route, result) = match tool {
            Tool::Pan => (PressRoute::Pan, Ok(Dispatched::None)),
            Tool::ZoomIn => (PressRoute::ZoomIn, Ok(Dispatched::None)),
            Tool::ZoomOut => (PressRoute::ZoomOut, Ok(Dispatched::None)),
            Tool::None | Tool::Auto => {
                let ctx = state.dispatch_context();
                match self.dispatcher.pointer_down(&ctx, lookup, event.target, scene) {
                    Ok(Dispatched::None) if tool == Tool::Auto => {
                        (PressRoute::AutoPan, Ok(Dispatched::None))
                    }
                    Ok(dispatched) => (PressRoute::Dispatch, Ok(dispatched)),
                    Err(err) => {
                        tracing::debug!(%err, "abandoning press on malformed element");
                        self.sequence.cancel();
                        self.route = None;
                        return Err(err);
                    }
                }
            }
        };
        self.route = Some(route);
        result
    }

    /// Handles a pointer move.
    ///
    /// Always reports the pointer position; during a press it also carries the
    /// active gesture or pans the camera, and near the view edges it autopans
    /// while the mode asks for it.
    pub fn pointer_move(&mut self, state: &ViewerState, position: Point) -> Dispatched {
        let scene = self.begin_event(state, PointerPhase::Move, position);
        let profile = ModeProfile::of(state.mode);

        let drag = self.sequence.motion(position);
        if let (Some(PressRoute::Pan | PressRoute::AutoPan), Some(delta)) = (self.route, drag)
            && delta != Vec2::ZERO
        {
            self.viewport.pan_by_view(delta);
            self.commit_camera();
        }

        if profile.autopan {
            let delta = self
                .options
                .autopan
                .delta_for(self.viewport.view_rect(), position);
            if delta != Vec2::ZERO {
                tracing::trace!(?delta, "autopan");
                self.viewport.pan_by_view(delta);
                self.commit_camera();
            }
        }

        let ctx = state.dispatch_context();
        self.dispatcher.pointer_move(&ctx, scene)
    }

    /// Handles a pointer release.
    ///
    /// A release without a preceding [`pointer_down`](Self::pointer_down) is
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns the [`HitError`] of a malformed element root.
    pub fn pointer_up<L: ElementLookup>(
        &mut self,
        state: &ViewerState,
        lookup: &L,
        event: PointerEvent<L::Handle>,
    ) -> Result<Dispatched, HitError> {
        let scene = self.begin_event(state, PointerPhase::Up, event.position);
        let route = self.route.take();
        let Some(release) = self.sequence.release(event.position) else {
            tracing::debug!(mode = %state.mode, "dropping release without a press");
            return Ok(Dispatched::None);
        };
        let click = release.is_click(self.options.click_tolerance);

        match route {
            Some(PressRoute::Pan) => Ok(Dispatched::None),
            Some(PressRoute::ZoomIn) => {
                if click {
                    self.viewport
                        .zoom_about_view_point(release.end, self.options.zoom_step);
                } else {
                    let region = Rect::from_points(release.start, release.end);
                    let world = self.viewport.view_to_world_rect(region);
                    self.viewport.fit_rect(world);
                }
                self.commit_camera();
                Ok(Dispatched::None)
            }
            Some(PressRoute::ZoomOut) => {
                if self.options.zoom_step > 0.0 {
                    self.viewport
                        .zoom_about_view_point(release.end, 1.0 / self.options.zoom_step);
                    self.commit_camera();
                }
                Ok(Dispatched::None)
            }
            // An auto-pan drag still ends in select or unselect.
            Some(PressRoute::AutoPan | PressRoute::Dispatch) | None => {
                let ctx = state.dispatch_context();
                self.dispatcher
                    .pointer_up(&ctx, lookup, event.target, scene)
            }
        }
    }

    /// Handles a wheel notch at `position`; negative `delta_y` zooms in.
    ///
    /// Ignored while the mode has navigation turned off.
    pub fn wheel(&mut self, state: &ViewerState, position: Point, delta_y: f64) {
        if ModeProfile::of(state.mode).tool == Tool::None || delta_y == 0.0 {
            return;
        }
        let step = self.options.wheel_zoom_step;
        if step <= 0.0 {
            return;
        }
        self.sync_camera(state);
        let factor = if delta_y < 0.0 { step } else { 1.0 / step };
        self.viewport.zoom_about_view_point(position, factor);
        self.commit_camera();
    }

    /// Reports a camera change to the host.
    ///
    /// In view-only mode the tool is first forced back to pan.
    pub fn change_value(&mut self, value: ViewTransform) {
        let actions = self.dispatcher.actions_mut();
        if self.options.view_only {
            actions.select_tool_pan();
        }
        actions.update_zoom_scale(value.a);
        actions.update_camera_view(value);
    }

    /// Reports a tool picked on the navigation toolbar.
    pub fn change_tool(&mut self, tool: Tool) {
        let actions = self.dispatcher.actions_mut();
        match tool {
            Tool::None => actions.select_tool_edit(),
            Tool::Pan => actions.select_tool_pan(),
            Tool::ZoomIn => actions.select_tool_zoom_in(),
            Tool::ZoomOut => actions.select_tool_zoom_out(),
            Tool::Auto => tracing::debug!("auto tool is selected by mode, not by the toolbar"),
        }
    }

    fn begin_event(&mut self, state: &ViewerState, phase: PointerPhase, device: Point) -> Point {
        self.sync_camera(state);
        let scene = state
            .scene
            .frame()
            .to_scene(self.viewport.view_to_world_point(device));
        let notice = PointerNotice {
            phase,
            mode: state.mode,
            device,
            scene,
        };
        for observer in &mut self.observers {
            observer.observe(&notice);
        }
        scene
    }

    fn sync_camera(&mut self, state: &ViewerState) {
        let bounds = state.scene.frame().bounds();
        self.viewport.set_world_bounds(Some(bounds));
        match state.camera {
            Some(camera) => self.viewport.set_transform(camera),
            None => self.viewport.fit_rect(bounds),
        }
    }

    fn commit_camera(&mut self) {
        let value = self.viewport.transform();
        self.change_value(value);
    }
}

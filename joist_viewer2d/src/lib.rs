// Copyright 2025 the Joist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Joist Viewer 2D: the interaction engine of the floor-plan viewer.
//!
//! The editor store owns the scene, the current [`InteractionMode`] and the
//! camera. This crate reads them and turns user input into requests against
//! the store's action groups ([`actions`]):
//!
//! - [`classify`]: per-mode viewport tool, cursor, scene pointer events and
//!   autopan, as exhaustive lookups.
//! - [`GestureDispatcher`]: pointer down/move/up plus mode in, exactly one
//!   begin/update/end/select request out.
//! - [`Viewer2D`]: binds the dispatcher to a pan/zoom [`Viewport2D`], maps
//!   device coordinates to scene coordinates, drives the navigation tools and
//!   reports camera changes.
//! - [`toolbar`]: the navigation strip and the main toolbar commands.
//!
//! Element identity under the pointer comes from an
//! [`ElementLookup`](joist_hit::ElementLookup), so the engine is independent
//! of how the host renders the plan.
//!
//! ## Classifying a mode
//!
//! ```rust
//! use joist_viewer2d::{Cursor, InteractionMode, ModeProfile, PointerEvents, Tool};
//!
//! let dragging = ModeProfile::of(InteractionMode::DraggingVertex);
//! assert_eq!(dragging.tool, Tool::None);
//! assert_eq!(dragging.cursor, Cursor::Move);
//! assert_eq!(dragging.pointer_events, PointerEvents::Disabled);
//! assert!(dragging.autopan);
//!
//! // Host state may carry modes this crate does not know yet.
//! assert_eq!(ModeProfile::of_name("MODE_MEASURING"), ModeProfile::INERT);
//! ```
//!
//! [`Viewport2D`]: joist_view2d::Viewport2D

pub mod actions;
pub mod classify;
mod dispatch;
mod mode;
mod options;
mod snap;
pub mod toolbar;
mod viewer;

pub use actions::PlannerActions;
pub use classify::{Cursor, ModeProfile, PointerEvents, Tool, UnknownTool};
pub use dispatch::{DispatchContext, Dispatched, GestureDispatcher};
pub use mode::{InteractionMode, UnknownMode};
pub use options::ViewerOptions;
pub use snap::SnapMask;
pub use viewer::{
    Frame, PointerEvent, PointerNotice, PointerObserver, PointerPhase, SceneInfo, SceneRenderer,
    Viewer2D, ViewerState,
};

pub use joist_hit::{ElementKind, ElementLookup, ElementRef, HitError};
pub use joist_view2d::{Autopan, ViewTransform};

// Copyright 2025 the Joist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Joist Event State: pointer sequence bookkeeping.
//!
//! Host UI toolkits deliver a pointer gesture as down → move* → up. The
//! viewer relies on that order to pair "begin" and "end" requests, but it
//! does not trust it blindly: [`PointerSequence`] remembers whether a
//! press is in flight so that a stray release (for example one whose press
//! landed outside the viewer) can be dropped instead of ending a gesture that
//! never began.
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use joist_event_state::PointerSequence;
//!
//! let mut seq = PointerSequence::default();
//! assert!(seq.release(Point::new(1.0, 1.0)).is_none());
//!
//! seq.press(Point::new(10.0, 10.0));
//! assert_eq!(seq.motion(Point::new(14.0, 7.0)), Some(Vec2::new(4.0, -3.0)));
//!
//! let release = seq.release(Point::new(15.0, 7.0)).unwrap();
//! assert_eq!(release.offset, Vec2::new(5.0, -3.0));
//! assert!(!seq.is_pressed());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod press;

pub use press::{PointerSequence, Release};

// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlook Event State: pointer interaction state for image views.
//!
//! Both views of an image viewer turn a pointer-down / move / up sequence
//! into an interaction: the main view pans by the movement between events,
//! the overview re-centers its viewport on every position. [`drag::DragState`]
//! tracks that sequence, including how it ended, so a drag can never stay
//! stuck when the pointer leaves the control mid-gesture.
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use overlook_event_state::drag::{DragEnd, DragState};
//!
//! let mut drag = DragState::default();
//! drag.begin(Point::new(10.0, 10.0));
//!
//! assert_eq!(drag.step(Point::new(14.0, 7.0)), Some(Vec2::new(4.0, -3.0)));
//!
//! let summary = drag.finish(DragEnd::PointerLeft).unwrap();
//! assert_eq!(summary.total_offset(), Vec2::new(4.0, -3.0));
//! assert!(!drag.is_active());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;

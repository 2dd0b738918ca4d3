// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracking from pointer-down until release or leave.
//!
//! ## Usage
//!
//! 1) Call [`DragState::begin`] on pointer-down (the control captures the pointer).
//! 2) On each pointer-move, call [`DragState::step`] for the movement since the
//!    previous position.
//! 3) Call [`DragState::finish`] on pointer-up *and* on pointer-leave; the
//!    returned [`DragSummary`] says how the gesture ended.

use kurbo::{Point, Vec2};

/// Why a drag stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragEnd {
    /// The pointer button was released.
    Released,
    /// The pointer left the control while dragging.
    PointerLeft,
    /// The owner abandoned the drag (for example because the image changed).
    Cancelled,
}

/// A finished drag gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSummary {
    /// Where the pointer went down.
    pub start: Point,
    /// The last position seen before the drag ended.
    pub last: Point,
    /// How the drag ended.
    pub end: DragEnd,
}

impl DragSummary {
    /// Offset between the first and last pointer positions.
    #[must_use]
    pub fn total_offset(&self) -> Vec2 {
        self.last - self.start
    }
}

/// Tracks an in-progress drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    /// `(start, last)` while a drag is active.
    active: Option<(Point, Point)>,
}

impl DragState {
    /// Starts a drag at `pos`, replacing any drag already in progress.
    pub fn begin(&mut self, pos: Point) {
        self.active = Some((pos, pos));
    }

    /// Returns `true` between [`Self::begin`] and [`Self::finish`].
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Records a new pointer position and returns the movement since the
    /// previous one, or `None` when no drag is active.
    pub fn step(&mut self, pos: Point) -> Option<Vec2> {
        let (_, last) = self.active.as_mut()?;
        let delta = pos - *last;
        *last = pos;
        Some(delta)
    }

    /// Ends the active drag, returning its summary, or `None` if there was
    /// nothing to end.
    pub fn finish(&mut self, end: DragEnd) -> Option<DragSummary> {
        self.active
            .take()
            .map(|(start, last)| DragSummary { start, last, end })
    }
}

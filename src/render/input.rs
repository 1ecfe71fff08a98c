//! Pointer gesture tracking: press, drag and click.

/// Where a gesture currently is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerState {
    Idle,
    /// Button down, not yet moved past the threshold
    Pressed { start: (f32, f32), camera_start: (f32, f32) },
    /// Moved past the threshold; the camera follows the pointer
    Dragging { start: (f32, f32), camera_start: (f32, f32) },
}

/// Outcome of releasing the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Release {
    /// The threshold was never crossed
    Click,
    DragEnd,
    /// Nothing was pressed
    Ignored,
}

/// A pan request: camera position at press time plus cumulative screen delta.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pan {
    pub camera_start: (f32, f32),
    pub dx: f32,
    pub dy: f32,
}

/// Idle → Pressed → Dragging state machine.
#[derive(Clone, Debug)]
pub struct PointerTracker {
    state: PointerState,
    threshold: f32,
}

impl PointerTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            state: PointerState::Idle,
            threshold,
        }
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    pub fn press(&mut self, sx: f32, sy: f32, camera: (f32, f32)) {
        self.state = PointerState::Pressed {
            start: (sx, sy),
            camera_start: camera,
        };
    }

    /// Track a move. Returns a pan once the gesture is a drag.
    ///
    /// Displacement is measured from the press point, so the threshold is
    /// cumulative and per axis.
    pub fn track(&mut self, sx: f32, sy: f32) -> Option<Pan> {
        match self.state {
            PointerState::Idle => None,
            PointerState::Pressed { start, camera_start } => {
                let (dx, dy) = (sx - start.0, sy - start.1);
                if dx.abs() > self.threshold || dy.abs() > self.threshold {
                    self.state = PointerState::Dragging { start, camera_start };
                    Some(Pan { camera_start, dx, dy })
                } else {
                    None
                }
            }
            PointerState::Dragging { start, camera_start } => Some(Pan {
                camera_start,
                dx: sx - start.0,
                dy: sy - start.1,
            }),
        }
    }

    pub fn release(&mut self) -> Release {
        let outcome = match self.state {
            PointerState::Idle => Release::Ignored,
            PointerState::Pressed { .. } => Release::Click,
            PointerState::Dragging { .. } => Release::DragEnd,
        };
        self.state = PointerState::Idle;
        outcome
    }

    /// Abandon the gesture without a click.
    pub fn cancel(&mut self) {
        self.state = PointerState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_wiggle_is_a_click() {
        let mut tracker = PointerTracker::new(4.0);
        tracker.press(100.0, 100.0, (0.0, 0.0));
        assert_eq!(tracker.track(103.0, 96.0), None);
        assert_eq!(tracker.track(104.0, 104.0), None);
        assert_eq!(tracker.release(), Release::Click);
        assert_eq!(tracker.state(), PointerState::Idle);
    }

    #[test]
    fn test_crossing_threshold_starts_drag() {
        let mut tracker = PointerTracker::new(4.0);
        tracker.press(100.0, 100.0, (10.0, 20.0));
        let pan = tracker.track(100.0, 94.5).unwrap();
        assert_eq!(pan, Pan { camera_start: (10.0, 20.0), dx: 0.0, dy: -5.5 });

        // Coming back within the threshold is still a drag
        assert!(tracker.track(101.0, 100.0).is_some());
        assert_eq!(tracker.release(), Release::DragEnd);
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut tracker = PointerTracker::new(4.0);
        assert_eq!(tracker.track(50.0, 50.0), None);
        assert_eq!(tracker.release(), Release::Ignored);
    }

    #[test]
    fn test_cancel_drops_the_gesture() {
        let mut tracker = PointerTracker::new(4.0);
        tracker.press(0.0, 0.0, (0.0, 0.0));
        tracker.cancel();
        assert_eq!(tracker.release(), Release::Ignored);
    }
}

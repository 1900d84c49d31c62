use crate::geometry::{normalize, shortest_signed_delta, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum Hand {
    Hour,
    Minute,
}

/// Angle of one hand plus the bookkeeping needed to spin it through
/// several turns without snapping at 12 o'clock.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HandState {
    current_angle: f64,
    last_touch_angle: Option<f64>,
    accumulated_angle: f64,
}

impl HandState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Displayed angle, always in [0, 360)
    pub fn current_angle(&self) -> f64 {
        self.current_angle
    }

    /// Unbounded running total; differs from `current_angle` by whole turns
    pub fn accumulated_angle(&self) -> f64 {
        self.accumulated_angle
    }

    pub fn is_dragging(&self) -> bool {
        self.last_touch_angle.is_some()
    }

    /// The first touch places the hand under the pointer; it is not a
    /// relative offset. Ignored while a drag is already running.
    pub fn begin_drag(&mut self, pointer_angle: f64) {
        if self.is_dragging() {
            return;
        }
        self.last_touch_angle = Some(pointer_angle);
        self.accumulated_angle = pointer_angle;
        self.current_angle = normalize(pointer_angle);
    }

    pub fn continue_drag(&mut self, pointer_angle: f64) {
        let Some(last) = self.last_touch_angle else {
            return;
        };
        self.accumulated_angle += shortest_signed_delta(last, pointer_angle);
        self.current_angle = normalize(self.accumulated_angle);
        self.last_touch_angle = Some(pointer_angle);
    }

    pub fn end_drag(&mut self) {
        self.last_touch_angle = None;
    }

    pub fn tip_position(&self, center: Point, length: f64) -> Point {
        let radians = self.current_angle.to_radians();
        Point::new(
            center.x + length * radians.sin(),
            center.y - length * radians.cos(),
        )
    }
}

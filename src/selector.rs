use crate::geometry::Point;
use crate::hand::Hand;

/// Pick the hand whose tip is nearest to where the gesture started.
///
/// Equal distances go to the minute hand. Call this once per gesture; the
/// chosen hand stays grabbed until the pointer is released.
pub fn select(touch: Point, hour_tip: Point, minute_tip: Point) -> Hand {
    if touch.distance_to(hour_tip) < touch.distance_to(minute_tip) {
        Hand::Hour
    } else {
        Hand::Minute
    }
}

use crate::geometry::angular_difference;
use crate::target_time::TargetTime;

/// Largest hour hand error still accepted, in degrees (a ninth of an hour mark)
pub const HOUR_TOLERANCE_DEG: f64 = 10.0 / 3.0;
/// Largest minute hand error still accepted, in degrees
pub const MINUTE_TOLERANCE_DEG: f64 = 5.0 / 3.0;

/// True when both hands sit within tolerance of where `target` puts them.
pub fn evaluate(hour_angle: f64, minute_angle: f64, target: &TargetTime) -> bool {
    let hour_diff = angular_difference(hour_angle, target.ideal_hour_angle());
    let minute_diff = angular_difference(minute_angle, target.ideal_minute_angle());

    hour_diff < HOUR_TOLERANCE_DEG && minute_diff < MINUTE_TOLERANCE_DEG
}

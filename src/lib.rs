// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod app_dirs;
pub mod celebration;
pub mod config;
pub mod evaluator;
pub mod geometry;
pub mod hand;
pub mod runtime;
pub mod selector;
pub mod session;
pub mod target_time;
pub mod viewport;
pub mod widget;

pub use geometry::Point;
pub use hand::Hand;
pub use target_time::{TargetTime, TargetTimeError};
pub use widget::{ClockWidget, WidgetEvent, WidgetOptions};

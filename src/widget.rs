//! Interactive clock face: routes pointer gestures to the two hands and keeps
//! the correctness flag in sync with them.

use log::{debug, info};

use crate::evaluator::evaluate;
use crate::geometry::{pointer_angle, Point};
use crate::hand::{Hand, HandState};
use crate::selector::select;
use crate::target_time::TargetTime;

pub const DEFAULT_HOUR_HAND_LENGTH: f64 = 0.45;
pub const DEFAULT_MINUTE_HAND_LENGTH: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetOptions {
    /// Hour hand length as a fraction of the face radius
    pub hour_hand_length: f64,
    /// Minute hand length as a fraction of the face radius
    pub minute_hand_length: f64,
    /// Freeze the hands as soon as they show the target time
    pub lock_on_solve: bool,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            hour_hand_length: DEFAULT_HOUR_HAND_LENGTH,
            minute_hand_length: DEFAULT_MINUTE_HAND_LENGTH,
            lock_on_solve: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging(Hand),
}

/// Observable outcome of a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEvent {
    /// The hands just started showing the target time
    Solved,
}

#[derive(Debug, Clone)]
pub struct ClockWidget {
    target: TargetTime,
    options: WidgetOptions,
    center: Point,
    hour: HandState,
    minute: HandState,
    state: DragState,
    correct: bool,
    locked: bool,
}

impl ClockWidget {
    pub fn new(target: TargetTime) -> Self {
        Self::with_options(target, WidgetOptions::default())
    }

    pub fn with_options(target: TargetTime, options: WidgetOptions) -> Self {
        Self {
            target,
            options,
            center: Point::ORIGIN,
            hour: HandState::new(),
            minute: HandState::new(),
            state: DragState::Idle,
            correct: false,
            locked: false,
        }
    }

    /// Move the origin of the local frame pointer events are measured in.
    pub fn with_center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    pub fn target(&self) -> TargetTime {
        self.target
    }

    pub fn options(&self) -> WidgetOptions {
        self.options
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn hour_angle(&self) -> f64 {
        self.hour.current_angle()
    }

    pub fn minute_angle(&self) -> f64 {
        self.minute.current_angle()
    }

    pub fn is_correct(&self) -> bool {
        self.correct
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Freeze the current configuration; new gestures are ignored from now on.
    pub fn lock(&mut self) {
        if self.locked {
            return;
        }
        self.end_gesture();
        self.locked = true;
        debug!("clock for {} locked", self.target);
    }

    pub fn hand(&self, hand: Hand) -> &HandState {
        match hand {
            Hand::Hour => &self.hour,
            Hand::Minute => &self.minute,
        }
    }

    fn hand_mut(&mut self, hand: Hand) -> &mut HandState {
        match hand {
            Hand::Hour => &mut self.hour,
            Hand::Minute => &mut self.minute,
        }
    }

    pub fn hour_tip(&self) -> Point {
        self.hour
            .tip_position(self.center, self.options.hour_hand_length)
    }

    pub fn minute_tip(&self) -> Point {
        self.minute
            .tip_position(self.center, self.options.minute_hand_length)
    }

    pub fn on_pointer_down(&mut self, point: Point) -> Option<WidgetEvent> {
        if self.locked || self.state != DragState::Idle {
            return None;
        }

        let grabbed = select(point, self.hour_tip(), self.minute_tip());
        let angle = pointer_angle(point, self.center);
        self.hand_mut(grabbed).begin_drag(angle);
        self.state = DragState::Dragging(grabbed);
        debug!("grabbed {} hand at {:.1}°", grabbed, angle);

        self.refresh()
    }

    pub fn on_pointer_move(&mut self, point: Point) -> Option<WidgetEvent> {
        let DragState::Dragging(grabbed) = self.state else {
            return None;
        };

        let angle = pointer_angle(point, self.center);
        self.hand_mut(grabbed).continue_drag(angle);

        self.refresh()
    }

    /// Release or cancel of the active gesture.
    pub fn on_pointer_up(&mut self) {
        if let DragState::Dragging(grabbed) = self.state {
            debug!(
                "released {} hand at {:.1}°",
                grabbed,
                self.hand(grabbed).current_angle()
            );
        }
        self.end_gesture();
    }

    fn end_gesture(&mut self) {
        if let DragState::Dragging(grabbed) = self.state {
            self.hand_mut(grabbed).end_drag();
        }
        self.state = DragState::Idle;
    }

    fn evaluate(&self) -> bool {
        evaluate(self.hour_angle(), self.minute_angle(), &self.target)
    }

    /// Re-run the evaluator after an angle change and report the false -> true edge.
    fn refresh(&mut self) -> Option<WidgetEvent> {
        let was_correct = self.correct;
        self.correct = self.evaluate();

        if !was_correct && self.correct {
            info!(
                "solved {} (hour {:.1}°, minute {:.1}°)",
                self.target,
                self.hour_angle(),
                self.minute_angle()
            );
            if self.options.lock_on_solve {
                self.lock();
            }
            return Some(WidgetEvent::Solved);
        }
        None
    }
}

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::celebration::Celebration;
use crate::target_time::TargetTime;
use crate::viewport::Viewport;
use crate::widget::{ClockWidget, DragState, WidgetEvent, WidgetOptions};

/// Where new targets come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSource {
    Random,
    Fixed(TargetTime),
}

impl TargetSource {
    fn next(&self) -> TargetTime {
        match self {
            TargetSource::Random => TargetTime::random(&mut rand::thread_rng()),
            TargetSource::Fixed(t) => *t,
        }
    }
}

/// One practice run: the clock being worked on plus a tally of solved ones
#[derive(Debug)]
pub struct Practice {
    pub widget: ClockWidget,
    pub source: TargetSource,
    pub options: WidgetOptions,
    pub solved: u32,
    pub celebration: Celebration,
}

impl Practice {
    pub fn new(source: TargetSource, options: WidgetOptions) -> Self {
        let target = source.next();
        log::info!("new target {}", target);
        Self {
            widget: ClockWidget::with_options(target, options),
            source,
            options,
            solved: 0,
            celebration: Celebration::new(),
        }
    }

    pub fn target(&self) -> TargetTime {
        self.widget.target()
    }

    /// Drop the current clock and pose the next time with fresh hands.
    pub fn next_target(&mut self) {
        let target = self.source.next();
        log::info!("new target {}", target);
        self.widget = ClockWidget::with_options(target, self.options);
        self.celebration = Celebration::new();
    }

    /// Route a terminal mouse event to the widget. Presses only count inside
    /// the face; drags and releases are followed anywhere.
    ///
    /// A press that arrives mid-gesture means the release was lost (button let
    /// go outside the window), so the old gesture is ended first.
    pub fn on_mouse(&mut self, mouse: MouseEvent, viewport: &Viewport) {
        let point = viewport.to_local(mouse.column, mouse.row);
        let event = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.widget.state() != DragState::Idle {
                    log::debug!("press during a gesture, dropping the stale one");
                    self.widget.on_pointer_up();
                }
                if !viewport.contains(mouse.column, mouse.row) {
                    return;
                }
                self.widget.on_pointer_down(point)
            }
            MouseEventKind::Drag(MouseButton::Left) => self.widget.on_pointer_move(point),
            MouseEventKind::Up(MouseButton::Left) => {
                self.widget.on_pointer_up();
                None
            }
            _ => None,
        };

        if let Some(WidgetEvent::Solved) = event {
            self.solved += 1;
            self.celebration.start();
        }
    }

    pub fn on_tick(&mut self) {
        self.celebration.update();
    }
}

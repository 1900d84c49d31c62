use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, MouseEvent};

pub const TICK_RATE_MS: u64 = 100;

/// Unified event type consumed by the app runner
#[derive(Clone, Debug)]
pub enum ClockEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize,
    Tick,
    /// The event source is gone; no further input will arrive
    Closed,
}

/// Source of terminal events (keyboard, mouse, resize)
pub trait ClockEventSource: Send + 'static {
    /// Block for up to `timeout` waiting for an event.
    /// Returns Ok(event) if an event arrives before the timeout, or Err(Timeout) if it expires.
    fn recv_timeout(&self, timeout: Duration) -> Result<ClockEvent, RecvTimeoutError>;
}

/// Production event source using crossterm
pub struct CrosstermEventSource {
    rx: Receiver<ClockEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            let evt = match event::read() {
                Ok(CtEvent::Key(key)) => ClockEvent::Key(key),
                Ok(CtEvent::Mouse(mouse)) => ClockEvent::Mouse(mouse),
                Ok(CtEvent::Resize(_, _)) => ClockEvent::Resize,
                Ok(_) => continue,
                Err(e) => {
                    log::error!("terminal event read failed: {}", e);
                    break;
                }
            };
            if tx.send(evt).is_err() {
                break;
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockEventSource for CrosstermEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<ClockEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Configurable ticker interface
pub trait Ticker: Send + Sync + 'static {
    fn interval(&self) -> Duration;
}

/// Fixed interval ticker
#[derive(Clone, Copy, Debug)]
pub struct FixedTicker {
    interval: Duration,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Default for FixedTicker {
    fn default() -> Self {
        Self::new(Duration::from_millis(TICK_RATE_MS))
    }
}

impl Ticker for FixedTicker {
    fn interval(&self) -> Duration {
        self.interval
    }
}

/// Test event source for unit tests
pub struct TestEventSource {
    rx: Receiver<ClockEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<ClockEvent>) -> Self {
        Self { rx }
    }
}

impl ClockEventSource for TestEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<ClockEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Runner that advances the application one event/tick at a time
pub struct Runner<E: ClockEventSource, T: Ticker> {
    event_source: E,
    ticker: T,
}

impl<E: ClockEventSource, T: Ticker> Runner<E, T> {
    pub fn new(event_source: E, ticker: T) -> Self {
        Self {
            event_source,
            ticker,
        }
    }

    /// Blocks up to tick interval and returns the next event, Tick on timeout,
    /// or Closed once the source has hung up
    pub fn step(&self) -> ClockEvent {
        match self.event_source.recv_timeout(self.ticker.interval()) {
            Ok(ev) => ev,
            Err(RecvTimeoutError::Timeout) => ClockEvent::Tick,
            Err(RecvTimeoutError::Disconnected) => ClockEvent::Closed,
        }
    }
}

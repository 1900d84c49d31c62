use rand::seq::SliceRandom;

use crate::runtime::TICK_RATE_MS;

const WORDS: [&str; 6] = [
    "PERFECT!",
    "WELL DONE!",
    "SPOT ON!",
    "GREAT!",
    "BRILLIANT!",
    "YOU GOT IT!",
];

/// Short-lived success banner shown when a clock gets solved
#[derive(Debug, Clone)]
pub struct Celebration {
    pub word: &'static str,
    pub ticks_remaining: u32,
    pub duration_ticks: u32,
}

impl Celebration {
    pub fn new() -> Self {
        Self {
            word: WORDS[0],
            ticks_remaining: 0,
            // about two seconds
            duration_ticks: (2000 / TICK_RATE_MS) as u32,
        }
    }

    pub fn start(&mut self) {
        let mut rng = rand::thread_rng();
        self.word = WORDS.choose(&mut rng).copied().unwrap_or(WORDS[0]);
        self.ticks_remaining = self.duration_ticks;
    }

    pub fn is_active(&self) -> bool {
        self.ticks_remaining > 0
    }

    /// Alternates every couple of ticks so the banner blinks while active
    pub fn is_highlighted(&self) -> bool {
        self.is_active() && (self.ticks_remaining / 2) % 2 == 0
    }

    pub fn update(&mut self) {
        self.ticks_remaining = self.ticks_remaining.saturating_sub(1);
    }
}

impl Default for Celebration {
    fn default() -> Self {
        Self::new()
    }
}

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TargetTimeError {
    #[error("hour must be between 0 and 23, got {0}")]
    Hour(u8),
    #[error("minute must be a multiple of 5 between 0 and 55, got {0}")]
    Minute(u8),
    #[error("expected a time like HH:MM, got {0:?}")]
    Format(String),
}

/// The time the learner has to set on the clock face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetTime {
    hour: u8,
    minute: u8,
}

impl TargetTime {
    pub fn new(hour: u8, minute: u8) -> Result<Self, TargetTimeError> {
        if hour > 23 {
            return Err(TargetTimeError::Hour(hour));
        }
        if minute > 55 || minute % 5 != 0 {
            return Err(TargetTimeError::Minute(minute));
        }
        Ok(Self { hour, minute })
    }

    /// Draw a practice time: any hour of the day, minutes on a five-minute mark.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            hour: rng.gen_range(0..=23),
            minute: rng.gen_range(0..=11) * 5,
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Where a real hour hand points, including the drift from the minutes
    /// (at 03:55 the hand is nearly on the 4).
    pub fn ideal_hour_angle(&self) -> f64 {
        f64::from(self.hour % 12) * 30.0 + f64::from(self.minute) * 0.5
    }

    pub fn ideal_minute_angle(&self) -> f64 {
        f64::from(self.minute) * 6.0
    }
}

impl fmt::Display for TargetTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TargetTime {
    type Err = TargetTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_err = || TargetTimeError::Format(s.to_string());
        let (h, m) = s.trim().split_once(':').ok_or_else(format_err)?;
        let hour = h.parse::<u8>().map_err(|_| format_err())?;
        let minute = m.parse::<u8>().map_err(|_| format_err())?;
        Self::new(hour, minute)
    }
}

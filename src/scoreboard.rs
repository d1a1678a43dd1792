//! Score bookkeeping
//!
//! Session-only: the current score only grows, and the highest score is
//! the running maximum of it. Nothing is persisted.

/// Receives display text whenever a score changes
pub trait ScoreSink {
    /// Show `Score: <n>`
    fn set_current(&mut self, text: &str);
    /// Show `Highest: <n>`
    fn set_highest(&mut self, text: &str);
}

/// Display text produced by a scoring event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreUpdate {
    pub current_text: String,
    /// Only present when the highest score moved
    pub highest_text: Option<String>,
}

impl ScoreUpdate {
    /// Push the text to the display
    pub fn publish(&self, sink: &mut impl ScoreSink) {
        sink.set_current(&self.current_text);
        if let Some(highest) = &self.highest_text {
            sink.set_highest(highest);
        }
    }
}

/// Current and highest score for the session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    current: u64,
    highest: u64,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn highest(&self) -> u64 {
        self.highest
    }

    /// Add points and return the text to display
    pub fn award(&mut self, points: u32) -> ScoreUpdate {
        self.current += u64::from(points);
        let highest_text = if self.current > self.highest {
            self.highest = self.current;
            Some(format_highest(self.highest))
        } else {
            None
        };
        ScoreUpdate {
            current_text: format_current(self.current),
            highest_text,
        }
    }
}

pub fn format_current(score: u64) -> String {
    format!("Score: {}", score)
}

pub fn format_highest(score: u64) -> String {
    format!("Highest: {}", score)
}

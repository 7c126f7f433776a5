use super::layout::RingLayout;
use super::{MAX_TICK_MS, MIN_TICK_MS, TICK_MS};
use serde::Serialize;
use serde_with::DeserializeFromStr;
use std::time::Duration;
use strum::{Display as StrumDisplay, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    #[strum(to_string = "Clockwise", serialize = "cw")]
    Clockwise,
    #[strum(to_string = "Counterclockwise", serialize = "ccw")]
    CounterClockwise,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }

    fn step(self) -> isize {
        match self {
            Self::Clockwise => 1,
            Self::CounterClockwise => -1,
        }
    }
}

/// Result of one advance: the dot to reveal and the dot to hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub previous: usize,
    pub current: usize,
}

#[derive(Debug, Clone)]
pub struct ChaseState {
    dot_count: usize,
    hidden_index: usize,
    direction: Direction,
    tick_ms: u64,
    running: bool,
}

impl ChaseState {
    pub fn new(layout: &RingLayout) -> Self {
        Self {
            dot_count: layout.dot_count(),
            hidden_index: 0,
            direction: Direction::default(),
            tick_ms: TICK_MS,
            running: true,
        }
    }

    pub fn advance(&mut self) -> Step {
        let previous = self.hidden_index;
        let next = (previous as isize + self.direction.step()).rem_euclid(self.dot_count as isize);
        self.hidden_index = next as usize;

        Step {
            previous,
            current: self.hidden_index,
        }
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn resume(&mut self) {
        self.running = true;
    }

    pub fn toggle_direction(&mut self) -> Direction {
        self.direction = self.direction.flipped();
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Out-of-range values are clamped, never rejected.
    pub fn set_tick_interval(&mut self, ms: u64) -> u64 {
        self.tick_ms = ms.clamp(MIN_TICK_MS, MAX_TICK_MS);
        self.tick_ms
    }

    pub fn dot_count(&self) -> usize {
        self.dot_count
    }

    pub fn hidden_index(&self) -> usize {
        self.hidden_index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn tick_ms(&self) -> u64 {
        self.tick_ms
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

use derive_more::Deref;

/// Count-up clock for the whole workout. Advanced by one second per tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ElapsedTimer {
    state: ElapsedState,
    seconds: u32,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ElapsedState {
    #[default]
    Stopped,
    Running,
}

impl ElapsedTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    #[must_use]
    pub fn state(&self) -> ElapsedState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == ElapsedState::Running
    }

    pub fn toggle(&mut self) {
        self.state = match self.state {
            ElapsedState::Stopped => ElapsedState::Running,
            ElapsedState::Running => ElapsedState::Stopped,
        };
    }

    pub fn stop(&mut self) {
        self.state = ElapsedState::Stopped;
    }

    /// Does not change whether the timer is running.
    pub fn reset(&mut self) {
        self.seconds = 0;
    }

    pub fn tick(&mut self) {
        if self.is_running() {
            self.seconds = self.seconds.saturating_add(1);
        }
    }
}

#[derive(Deref, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestPeriod(u32);

impl RestPeriod {
    pub const DEFAULT: RestPeriod = RestPeriod(60);

    pub fn new(seconds: u32) -> Result<Self, RestPeriodError> {
        if seconds == 0 {
            return Err(RestPeriodError::Zero);
        }
        Ok(Self(seconds))
    }
}

impl Default for RestPeriod {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RestPeriodError {
    #[error("Rest period must be at least one second")]
    Zero,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RestState {
    #[default]
    Hidden,
    Counting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestEvent {
    Finished,
}

/// Countdown started after each recorded set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestTimer {
    period: RestPeriod,
    state: RestState,
    remaining: u32,
}

impl RestTimer {
    #[must_use]
    pub fn new(period: RestPeriod) -> Self {
        Self {
            period,
            state: RestState::Hidden,
            remaining: *period,
        }
    }

    #[must_use]
    pub fn period(&self) -> RestPeriod {
        self.period
    }

    #[must_use]
    pub fn state(&self) -> RestState {
        self.state
    }

    #[must_use]
    pub fn is_counting(&self) -> bool {
        self.state == RestState::Counting
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Remaining time as a percentage of the period.
    #[must_use]
    pub fn progress(&self) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let progress = self.remaining as f32 / *self.period as f32 * 100.;
        progress.min(100.)
    }

    /// Start the countdown from the full period, also if it is already running.
    pub fn trigger(&mut self) {
        self.state = RestState::Counting;
        self.remaining = *self.period;
    }

    /// A running countdown keeps its current remaining time.
    pub fn set_period(&mut self, period: RestPeriod) {
        self.period = period;
        if self.state == RestState::Hidden {
            self.remaining = *period;
        }
    }

    pub fn hide(&mut self) {
        self.state = RestState::Hidden;
        self.remaining = *self.period;
    }

    pub fn tick(&mut self) -> Option<RestEvent> {
        if self.state != RestState::Counting {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.hide();
            return Some(RestEvent::Finished);
        }
        None
    }
}

impl Default for RestTimer {
    fn default() -> Self {
        Self::new(RestPeriod::default())
    }
}

/// Format seconds as `MM:SS`.
#[must_use]
pub fn format_time(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

//! Countdown timer state machine.

/// Outcome of a single one-second tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Timer is paused or already at zero; nothing changed.
    Idle,
    /// One second elapsed, time remains.
    Running,
    /// The countdown just reached zero and the alarm went off.
    Finished,
}

/// Countdown timer widget state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimerState {
    initial: u64,
    seconds_left: u64,
    running: bool,
    alarm: bool,
}

impl TimerState {
    /// Create a stopped timer seeded with `initial` seconds.
    pub fn new(initial: u64) -> Self {
        Self {
            initial,
            seconds_left: initial,
            running: false,
            alarm: false,
        }
    }

    pub fn initial(&self) -> u64 {
        self.initial
    }

    pub fn seconds_left(&self) -> u64 {
        self.seconds_left
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the "time's up" alarm is sounding.
    pub fn is_alarm(&self) -> bool {
        self.alarm
    }

    /// Start or pause. A finished timer cannot be started until reset.
    pub fn toggle(&mut self) -> bool {
        if self.seconds_left == 0 {
            return false;
        }
        self.running = !self.running;
        true
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) -> Tick {
        if !self.running || self.seconds_left == 0 {
            return Tick::Idle;
        }

        if self.seconds_left <= 1 {
            self.seconds_left = 0;
            self.running = false;
            self.alarm = true;
            return Tick::Finished;
        }

        self.seconds_left -= 1;
        Tick::Running
    }

    /// Back to the initial duration, stopped, alarm silenced.
    pub fn reset(&mut self) {
        self.seconds_left = self.initial;
        self.running = false;
        self.alarm = false;
    }

    /// Replace the initial duration (a new query arrived) and reset.
    pub fn reseed(&mut self, initial: u64) {
        self.initial = initial;
        self.reset();
    }

    /// `HH:MM:SS` display of the remaining time.
    pub fn display(&self) -> String {
        super::format_clock(self.seconds_left)
    }
}

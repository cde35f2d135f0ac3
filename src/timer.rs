//! The urge delay timer: a countdown with rotating prompts.
//!
//! The timer is a plain state machine advanced one second per [`UrgeTimer::tick`].
//! Whoever drives it owns the clock; nothing here sleeps or spawns.

/// Default countdown length: five minutes.
pub const DEFAULT_SECONDS: u32 = 300;

/// Seconds between prompt changes.
pub const PROMPT_INTERVAL: u32 = 30;

pub const PROMPTS: &[&str] = &[
    "Observe the sensation without engaging with it.",
    "Breathe: 4 counts in, hold 4, 4 counts out.",
    "Cravings diminish on their own within minutes.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running { remaining: u32, prompt: usize },
    Complete,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Nothing is running.
    Stopped,
    /// Still counting down.
    Counting,
    /// The prompt just changed.
    Prompted(usize),
    /// The countdown just reached zero.
    Finished,
}

#[derive(Debug, Clone)]
pub struct UrgeTimer {
    duration: u32,
    state: TimerState,
}

impl UrgeTimer {
    /// A timer counting down from `duration` seconds. A zero duration is
    /// treated as one second.
    pub fn new(duration: u32) -> Self {
        Self {
            duration: duration.max(1),
            state: TimerState::Idle,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Starts from the full duration. Also restarts a running or finished timer.
    pub fn start(&mut self) {
        self.state = TimerState::Running {
            remaining: self.duration,
            prompt: 0,
        };
    }

    /// Advances one second.
    pub fn tick(&mut self) -> Tick {
        let TimerState::Running { remaining, prompt } = self.state else {
            return Tick::Stopped;
        };

        if remaining <= 1 {
            self.state = TimerState::Complete;
            return Tick::Finished;
        }

        let remaining = remaining - 1;
        let elapsed = self.duration - remaining;
        let (prompt, tick) = if elapsed % PROMPT_INTERVAL == 0 {
            let next = (prompt + 1) % PROMPTS.len();
            (next, Tick::Prompted(next))
        } else {
            (prompt, Tick::Counting)
        };
        self.state = TimerState::Running { remaining, prompt };
        tick
    }

    pub fn remaining(&self) -> u32 {
        match self.state {
            TimerState::Idle => self.duration,
            TimerState::Running { remaining, .. } => remaining,
            TimerState::Complete => 0,
        }
    }

    /// The current prompt, while running.
    pub fn prompt(&self) -> Option<&'static str> {
        match self.state {
            TimerState::Running { prompt, .. } => PROMPTS.get(prompt).copied(),
            _ => None,
        }
    }

    /// Fraction of the countdown elapsed, 0 to 1.
    pub fn progress(&self) -> f64 {
        1.0 - f64::from(self.remaining()) / f64::from(self.duration)
    }

    /// Remaining time as `mm:ss`.
    pub fn display(&self) -> String {
        let remaining = self.remaining();
        format!("{:02}:{:02}", remaining / 60, remaining % 60)
    }
}

impl Default for UrgeTimer {
    fn default() -> Self {
        Self::new(DEFAULT_SECONDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_timer_does_not_tick() {
        let mut timer = UrgeTimer::default();

        assert_eq!(timer.tick(), Tick::Stopped);
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.display(), "05:00");
        assert_eq!(timer.prompt(), None);
    }

    #[test]
    fn counts_down_to_complete() {
        let mut timer = UrgeTimer::new(3);
        timer.start();

        assert_eq!(timer.tick(), Tick::Counting);
        assert_eq!(timer.tick(), Tick::Counting);
        assert_eq!(timer.remaining(), 1);
        assert_eq!(timer.tick(), Tick::Finished);
        assert_eq!(timer.state(), TimerState::Complete);
        assert_eq!(timer.display(), "00:00");
        assert!((timer.progress() - 1.0).abs() < f64::EPSILON);

        // Ticking a finished timer changes nothing.
        assert_eq!(timer.tick(), Tick::Stopped);
    }

    #[test]
    fn prompts_rotate_every_thirty_seconds() {
        let mut timer = UrgeTimer::default();
        timer.start();
        assert_eq!(timer.prompt(), Some(PROMPTS[0]));

        let mut changes = Vec::new();
        for _ in 0..120 {
            if let Tick::Prompted(i) = timer.tick() {
                changes.push(i);
            }
        }

        assert_eq!(changes, vec![1, 2, 0, 1]);
        assert_eq!(timer.display(), "03:00");
    }

    #[test]
    fn restart_resets_countdown_and_prompt() {
        let mut timer = UrgeTimer::new(60);
        timer.start();
        for _ in 0..45 {
            timer.tick();
        }
        assert_eq!(timer.prompt(), Some(PROMPTS[1]));

        timer.start();

        assert_eq!(
            timer.state(),
            TimerState::Running {
                remaining: 60,
                prompt: 0
            }
        );
        assert!(timer.progress().abs() < f64::EPSILON);
    }
}

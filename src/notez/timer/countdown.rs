use std::fmt;

pub const FOCUS_SECS: u32 = 25 * 60;
pub const SHORT_BREAK_SECS: u32 = 5 * 60;
pub const LONG_BREAK_SECS: u32 = 15 * 60;
pub const SESSIONS_BEFORE_LONG_BREAK: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Focus,
    ShortBreak,
    LongBreak,
}

impl Phase {
    /// Full length of the phase in seconds.
    pub fn duration(self) -> u32 {
        match self {
            Phase::Focus => FOCUS_SECS,
            Phase::ShortBreak => SHORT_BREAK_SECS,
            Phase::LongBreak => LONG_BREAK_SECS,
        }
    }

    pub fn is_break(self) -> bool {
        !matches!(self, Phase::Focus)
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::Focus => "Focus Time",
            Phase::ShortBreak => "Short Break",
            Phase::LongBreak => "Long Break",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A phase change, either from running out or from a skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Phase,
    pub to: Phase,
    pub sessions: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused; nothing changed.
    Idle,
    /// One second elapsed.
    Ticked,
    /// One second elapsed and the remaining time is a whole number of minutes.
    MinuteMark,
    /// The phase ran out and the countdown moved on, paused.
    Completed(Transition),
}

/// Pomodoro countdown: focus periods alternating with short and long breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    phase: Phase,
    remaining: u32,
    running: bool,
    sessions: u32,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Countdown {
    pub fn new() -> Self {
        Self {
            phase: Phase::Focus,
            remaining: Phase::Focus.duration(),
            running: false,
            sessions: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Completed focus periods.
    pub fn sessions(&self) -> u32 {
        self.sessions
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            return TickOutcome::Completed(self.advance());
        }
        if self.remaining % 60 == 0 {
            TickOutcome::MinuteMark
        } else {
            TickOutcome::Ticked
        }
    }

    /// Ends the current phase now.
    pub fn skip(&mut self) -> Transition {
        self.advance()
    }

    /// Back to the full duration of the current phase, paused.
    pub fn reset(&mut self) {
        self.remaining = self.phase.duration();
        self.running = false;
    }

    /// Elapsed fraction of the current phase, `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        let full = f64::from(self.phase.duration());
        (full - f64::from(self.remaining)) / full
    }

    /// Remaining time as `MM:SS`.
    pub fn clock(&self) -> String {
        format!("{:02}:{:02}", self.remaining / 60, self.remaining % 60)
    }

    /// Total focused minutes across completed sessions.
    pub fn focus_minutes(&self) -> u32 {
        self.sessions * FOCUS_SECS / 60
    }

    fn advance(&mut self) -> Transition {
        let from = self.phase;
        let to = match from {
            Phase::Focus => {
                self.sessions += 1;
                if self.sessions % SESSIONS_BEFORE_LONG_BREAK == 0 {
                    Phase::LongBreak
                } else {
                    Phase::ShortBreak
                }
            }
            Phase::ShortBreak | Phase::LongBreak => Phase::Focus,
        };

        self.phase = to;
        self.remaining = to.duration();
        self.running = false;
        Transition {
            from,
            to,
            sessions: self.sessions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_out(countdown: &mut Countdown) -> Transition {
        countdown.start();
        loop {
            if let TickOutcome::Completed(t) = countdown.tick() {
                return t;
            }
        }
    }

    #[test]
    fn starts_paused_in_focus() {
        let c = Countdown::new();
        assert_eq!(c.phase(), Phase::Focus);
        assert_eq!(c.remaining(), 1500);
        assert!(!c.is_running());
        assert_eq!(c.sessions(), 0);
        assert_eq!(c.clock(), "25:00");
    }

    #[test]
    fn paused_ticks_change_nothing() {
        let mut c = Countdown::new();
        assert_eq!(c.tick(), TickOutcome::Idle);
        assert_eq!(c.remaining(), 1500);
    }

    #[test]
    fn focus_runs_out_into_short_break_after_1500_ticks() {
        let mut c = Countdown::new();
        c.start();
        for _ in 0..1499 {
            assert!(!matches!(c.tick(), TickOutcome::Completed(_)));
        }
        assert_eq!(c.remaining(), 1);

        let outcome = c.tick();
        assert_eq!(
            outcome,
            TickOutcome::Completed(Transition {
                from: Phase::Focus,
                to: Phase::ShortBreak,
                sessions: 1
            })
        );
        assert_eq!(c.phase(), Phase::ShortBreak);
        assert_eq!(c.remaining(), 300);
        assert_eq!(c.sessions(), 1);
        assert!(!c.is_running());
    }

    #[test]
    fn fourth_focus_period_earns_a_long_break() {
        let mut c = Countdown::new();
        for round in 1..=4 {
            let into_break = run_out(&mut c);
            assert_eq!(into_break.sessions, round);
            if round < 4 {
                assert_eq!(into_break.to, Phase::ShortBreak);
                run_out(&mut c);
            } else {
                assert_eq!(into_break.to, Phase::LongBreak);
            }
        }
        assert_eq!(c.phase(), Phase::LongBreak);
        assert_eq!(c.remaining(), 900);
    }

    #[test]
    fn break_back_to_focus_keeps_sessions() {
        let mut c = Countdown::new();
        c.skip();
        let back = c.skip();
        assert_eq!(back.to, Phase::Focus);
        assert_eq!(c.sessions(), 1);
        assert_eq!(c.remaining(), 1500);
    }

    #[test]
    fn skip_matches_running_out() {
        let mut skipped = Countdown::new();
        skipped.start();
        skipped.tick();
        let t = skipped.skip();

        let mut ran = Countdown::new();
        assert_eq!(run_out(&mut ran), t);
        assert_eq!(skipped, ran);
    }

    #[test]
    fn reset_restores_phase_duration_only() {
        let mut c = Countdown::new();
        c.skip();
        c.start();
        for _ in 0..10 {
            c.tick();
        }
        c.reset();
        assert_eq!(c.phase(), Phase::ShortBreak);
        assert_eq!(c.remaining(), 300);
        assert_eq!(c.sessions(), 1);
        assert!(!c.is_running());
    }

    #[test]
    fn progress_tracks_elapsed_fraction() {
        let mut c = Countdown::new();
        assert_eq!(c.progress(), 0.0);
        c.start();
        for _ in 0..750 {
            c.tick();
        }
        assert!((c.progress() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn minute_marks_on_whole_minutes() {
        let mut c = Countdown::new();
        c.start();
        let mut marks = 0;
        for _ in 0..120 {
            if c.tick() == TickOutcome::MinuteMark {
                marks += 1;
            }
        }
        assert_eq!(marks, 2);
        assert_eq!(c.clock(), "23:00");
    }

    #[test]
    fn focus_minutes_counts_sessions() {
        let mut c = Countdown::new();
        c.skip();
        c.skip();
        c.skip();
        assert_eq!(c.focus_minutes(), 50);
    }
}

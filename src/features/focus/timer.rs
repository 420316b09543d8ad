//! Focus timer engine.
//!
//! A single timer with two modes (countdown and stopwatch) and two phases
//! (focus and break). The caller drives it with one `tick()` per elapsed
//! second; completions come back as values, and phase transitions are always
//! an explicit caller action.

use serde::{Deserialize, Serialize};

use crate::error::SmarttimeError;

/// How the timer counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerMode {
    /// Count down from the configured phase duration
    Countdown,
    /// Count up without a limit
    Stopwatch,
}

impl TimerMode {
    /// Get display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Countdown => "Countdown",
            Self::Stopwatch => "Stopwatch",
        }
    }
}

impl std::fmt::Display for TimerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Which kind of interval is being timed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Working time
    Focus,
    /// Rest time
    Break,
}

impl Phase {
    /// Get the other phase.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Focus => Self::Break,
            Self::Break => Self::Focus,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Focus => "Focus",
            Self::Break => "Break",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A finished interval reported by the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// Phase that finished
    pub phase: Phase,
    /// Whole minutes to credit
    pub minutes: u32,
}

/// The focus timer.
///
/// `counter` holds remaining seconds in countdown mode and elapsed seconds in
/// stopwatch mode. Duration clamping happens at the configuration boundary,
/// not here.
#[derive(Debug, Clone)]
pub struct FocusTimer {
    mode: TimerMode,
    phase: Phase,
    running: bool,
    counter: u32,
    focus_minutes: u32,
    break_minutes: u32,
}

impl FocusTimer {
    /// Create a paused countdown timer in the focus phase.
    #[must_use]
    pub const fn new(focus_minutes: u32, break_minutes: u32) -> Self {
        Self {
            mode: TimerMode::Countdown,
            phase: Phase::Focus,
            running: false,
            counter: focus_minutes * 60,
            focus_minutes,
            break_minutes,
        }
    }

    /// Configured seconds for the current phase.
    #[must_use]
    pub const fn phase_seconds(&self) -> u32 {
        match self.phase {
            Phase::Focus => self.focus_minutes * 60,
            Phase::Break => self.break_minutes * 60,
        }
    }

    const fn phase_minutes(&self) -> u32 {
        match self.phase {
            Phase::Focus => self.focus_minutes,
            Phase::Break => self.break_minutes,
        }
    }

    /// Start or resume. No-op when already running.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Pause without losing the counter.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Flip between running and paused.
    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Reseed the counter for the current mode and phase, forcing a pause.
    pub fn reset(&mut self) {
        self.running = false;
        self.counter = match self.mode {
            TimerMode::Countdown => self.phase_seconds(),
            TimerMode::Stopwatch => 0,
        };
    }

    /// Switch to the given phase, pausing and reseeding the counter.
    pub fn switch_phase(&mut self, phase: Phase) {
        self.phase = phase;
        self.reset();
    }

    /// Switch counting mode, pausing and reseeding the counter.
    pub fn switch_mode(&mut self, mode: TimerMode) {
        self.mode = mode;
        self.reset();
    }

    /// Advance the timer by one second.
    ///
    /// In countdown mode, reaching zero pauses the timer and returns the
    /// completed interval once; further ticks are no-ops until the caller
    /// acts. Stopwatch mode counts up and never completes on its own. Ticks
    /// while paused do nothing.
    pub fn tick(&mut self) -> Option<Completion> {
        if !self.running {
            return None;
        }

        match self.mode {
            TimerMode::Countdown => {
                self.counter = self.counter.saturating_sub(1);
                if self.counter == 0 {
                    self.running = false;
                    Some(Completion {
                        phase: self.phase,
                        minutes: self.phase_minutes(),
                    })
                } else {
                    None
                }
            }
            TimerMode::Stopwatch => {
                self.counter = self.counter.saturating_add(1);
                None
            }
        }
    }

    /// End a stopwatch run, crediting elapsed time rounded to the nearest
    /// minute with a one-minute floor. Resets to zero and pauses.
    ///
    /// Stopwatch time always counts as focus time, whatever phase the timer
    /// happens to be in.
    ///
    /// # Errors
    /// `InvalidOperation` in countdown mode.
    pub fn finish_stopwatch(&mut self) -> Result<Completion, SmarttimeError> {
        if self.mode != TimerMode::Stopwatch {
            return Err(SmarttimeError::InvalidOperation(
                "finish is only available in stopwatch mode".to_string(),
            ));
        }

        let minutes = ((self.counter + 30) / 60).max(1);
        self.counter = 0;
        self.running = false;
        Ok(Completion {
            phase: Phase::Focus,
            minutes,
        })
    }

    /// Set the focus duration in minutes.
    ///
    /// While paused in countdown mode the current phase counter reseeds
    /// immediately; a running countdown is never changed retroactively.
    pub fn set_focus_minutes(&mut self, minutes: u32) {
        self.focus_minutes = minutes;
        self.reseed_if_paused();
    }

    /// Set the break duration in minutes. Same reseed rule as focus.
    pub fn set_break_minutes(&mut self, minutes: u32) {
        self.break_minutes = minutes;
        self.reseed_if_paused();
    }

    fn reseed_if_paused(&mut self) {
        if !self.running && self.mode == TimerMode::Countdown {
            self.counter = self.phase_seconds();
        }
    }

    /// Current counting mode.
    #[must_use]
    pub const fn mode(&self) -> TimerMode {
        self.mode
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if the timer is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Raw counter: remaining seconds (countdown) or elapsed (stopwatch).
    #[must_use]
    pub const fn seconds(&self) -> u32 {
        self.counter
    }

    /// Configured focus duration in minutes.
    #[must_use]
    pub const fn focus_minutes(&self) -> u32 {
        self.focus_minutes
    }

    /// Configured break duration in minutes.
    #[must_use]
    pub const fn break_minutes(&self) -> u32 {
        self.break_minutes
    }

    /// Countdown progress as 0.0 - 1.0. Always 0.0 in stopwatch mode.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.mode != TimerMode::Countdown {
            return 0.0;
        }
        let total = self.phase_seconds();
        if total == 0 {
            return 1.0;
        }
        1.0 - (self.counter as f64 / total as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_paused_in_focus() {
        let timer = FocusTimer::new(25, 5);
        assert_eq!(timer.mode(), TimerMode::Countdown);
        assert_eq!(timer.phase(), Phase::Focus);
        assert!(!timer.is_running());
        assert_eq!(timer.seconds(), 25 * 60);
    }

    #[test]
    fn test_tick_while_paused_is_noop() {
        let mut timer = FocusTimer::new(25, 5);
        assert!(timer.tick().is_none());
        assert_eq!(timer.seconds(), 25 * 60);
    }

    #[test]
    fn test_countdown_completes_exactly_once() {
        let mut timer = FocusTimer::new(25, 5);
        // Pin the counter to 3 seconds by ticking down from a short run.
        timer.set_focus_minutes(1);
        timer.start();
        for _ in 0..57 {
            assert!(timer.tick().is_none());
        }
        // counter is now 3
        assert_eq!(timer.seconds(), 3);
        assert!(timer.tick().is_none());
        assert!(timer.tick().is_none());
        let done = timer.tick();
        assert_eq!(
            done,
            Some(Completion {
                phase: Phase::Focus,
                minutes: 1
            })
        );
        assert!(!timer.is_running());
        // Fourth tick after zero is a no-op.
        assert!(timer.tick().is_none());
        assert_eq!(timer.seconds(), 0);
    }

    #[test]
    fn test_break_completion_reports_break_phase() {
        let mut timer = FocusTimer::new(25, 1);
        timer.switch_phase(Phase::Break);
        timer.start();
        let mut completion = None;
        for _ in 0..60 {
            completion = timer.tick();
        }
        assert_eq!(
            completion,
            Some(Completion {
                phase: Phase::Break,
                minutes: 1
            })
        );
    }

    #[test]
    fn test_stopwatch_counts_up_and_never_completes() {
        let mut timer = FocusTimer::new(25, 5);
        timer.switch_mode(TimerMode::Stopwatch);
        timer.start();
        for _ in 0..3600 {
            assert!(timer.tick().is_none());
        }
        assert_eq!(timer.seconds(), 3600);
        assert!(timer.is_running());
    }

    #[test]
    fn test_finish_stopwatch_rounds_half_up_with_floor() {
        let mut timer = FocusTimer::new(25, 5);
        timer.switch_mode(TimerMode::Stopwatch);
        timer.start();
        for _ in 0..29 {
            timer.tick();
        }
        let done = timer.finish_stopwatch().ok();
        assert_eq!(done.map(|c| c.minutes), Some(1));
        assert_eq!(timer.seconds(), 0);
        assert!(!timer.is_running());

        timer.start();
        for _ in 0..90 {
            timer.tick();
        }
        let done = timer.finish_stopwatch().ok();
        assert_eq!(done.map(|c| c.minutes), Some(2));
    }

    #[test]
    fn test_finish_stopwatch_in_break_phase_is_still_focus() {
        let mut timer = FocusTimer::new(25, 5);
        timer.switch_mode(TimerMode::Stopwatch);
        timer.switch_phase(Phase::Break);
        timer.start();
        for _ in 0..90 {
            timer.tick();
        }
        let done = timer.finish_stopwatch().ok();
        assert_eq!(
            done,
            Some(Completion {
                phase: Phase::Focus,
                minutes: 2
            })
        );
    }

    #[test]
    fn test_finish_stopwatch_rejected_in_countdown() {
        let mut timer = FocusTimer::new(25, 5);
        assert!(matches!(
            timer.finish_stopwatch(),
            Err(SmarttimeError::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_switch_phase_reseeds_and_pauses() {
        let mut timer = FocusTimer::new(25, 5);
        timer.start();
        timer.tick();
        timer.switch_phase(Phase::Break);
        assert!(!timer.is_running());
        assert_eq!(timer.seconds(), 5 * 60);
        timer.switch_phase(Phase::Focus);
        assert_eq!(timer.seconds(), 25 * 60);
    }

    #[test]
    fn test_set_duration_reseeds_only_while_paused() {
        let mut timer = FocusTimer::new(25, 5);
        for minutes in [1, 50, 120] {
            timer.set_focus_minutes(minutes);
            assert_eq!(timer.seconds(), minutes * 60);
        }

        timer.set_focus_minutes(25);
        timer.start();
        timer.tick();
        let before = timer.seconds();
        timer.set_focus_minutes(60);
        assert_eq!(timer.seconds(), before);
    }

    #[test]
    fn test_set_duration_never_reseeds_stopwatch() {
        let mut timer = FocusTimer::new(25, 5);
        timer.switch_mode(TimerMode::Stopwatch);
        timer.start();
        for _ in 0..10 {
            timer.tick();
        }
        timer.pause();
        timer.set_focus_minutes(60);
        assert_eq!(timer.seconds(), 10);
    }

    #[test]
    fn test_reset_reseeds_current_phase() {
        let mut timer = FocusTimer::new(25, 5);
        timer.start();
        for _ in 0..100 {
            timer.tick();
        }
        timer.reset();
        assert!(!timer.is_running());
        assert_eq!(timer.seconds(), 25 * 60);
    }

    #[test]
    fn test_progress() {
        let mut timer = FocusTimer::new(1, 5);
        timer.start();
        for _ in 0..30 {
            timer.tick();
        }
        assert!((timer.progress() - 0.5).abs() < 0.01);

        timer.switch_mode(TimerMode::Stopwatch);
        assert_eq!(timer.progress(), 0.0);
    }
}

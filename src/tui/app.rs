//! Application state for the focus timer TUI.

use std::io::Write;

use chrono::Utc;

use crate::config::{clamp_break_minutes, clamp_focus_minutes, Config};
use crate::error::SmarttimeError;
use crate::features::focus::{Completion, FocusTimer, Phase, SessionStore, TimerMode};
use crate::features::tasks::{Task, TaskStore};
use crate::storage::DataStore;

/// A yes/no question shown after a countdown completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// A focus interval finished; offer to start the break.
    StartBreak,
    /// A break finished; offer to start the next focus interval.
    StartFocus,
}

impl Prompt {
    /// The question text shown in the status bar.
    #[must_use]
    pub const fn question(self) -> &'static str {
        match self {
            Self::StartBreak => "Focus complete! Start break? (y/n)",
            Self::StartFocus => "Break over! Start focus? (y/n)",
        }
    }

    /// The phase the prompt offers to start.
    #[must_use]
    pub const fn next_phase(self) -> Phase {
        match self {
            Self::StartBreak => Phase::Break,
            Self::StartFocus => Phase::Focus,
        }
    }
}

/// Application state.
pub struct App<'a> {
    /// Reference to the data store.
    store: &'a DataStore,
    /// The timer being driven.
    pub timer: FocusTimer,
    /// Current task list.
    pub tasks: TaskStore,
    /// Recorded focus sessions.
    pub sessions: SessionStore,
    /// Selected index into the open-task list.
    pub selected: usize,
    /// Pending question after a countdown completed.
    pub prompt: Option<Prompt>,
    /// Status message to display.
    pub status: Option<String>,
    /// Ring the terminal bell on completion.
    sound: bool,
}

impl<'a> App<'a> {
    /// Create a new app instance.
    ///
    /// # Errors
    ///
    /// Returns an error if loading tasks or sessions fails.
    pub fn new(store: &'a DataStore, config: &Config) -> Result<Self, SmarttimeError> {
        let tasks = store.load_tasks()?;
        let sessions = store.load_sessions()?;
        let timer = FocusTimer::new(
            config.focus.clamped_focus_minutes(),
            config.focus.clamped_break_minutes(),
        );

        Ok(Self {
            store,
            timer,
            tasks,
            sessions,
            selected: 0,
            prompt: None,
            status: Some("Press space to start".to_string()),
            sound: config.focus.sound,
        })
    }

    /// Open tasks available for association with a session.
    #[must_use]
    pub fn open_tasks(&self) -> Vec<&Task> {
        self.tasks.open_tasks()
    }

    /// The task the next session will be attributed to.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.open_tasks().get(self.selected).copied()
    }

    /// Move selection up.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        let count = self.open_tasks().len();
        if count > 0 && self.selected < count - 1 {
            self.selected += 1;
        }
    }

    /// Advance the timer by one second.
    ///
    /// # Errors
    ///
    /// Returns an error if recording a completed session fails.
    pub fn on_tick(&mut self) -> Result<(), SmarttimeError> {
        if let Some(completion) = self.timer.tick() {
            self.handle_completion(completion)?;
        }
        Ok(())
    }

    /// Start or pause the timer.
    pub fn toggle_timer(&mut self) {
        self.timer.toggle();
        self.status = Some(
            if self.timer.is_running() {
                format!("{} started", self.timer.phase())
            } else {
                "Paused".to_string()
            },
        );
    }

    /// Reset the counter for the current mode and phase.
    pub fn reset_timer(&mut self) {
        self.timer.reset();
        self.prompt = None;
        self.status = Some("Reset".to_string());
    }

    /// Flip between countdown and stopwatch.
    pub fn switch_mode(&mut self) {
        let mode = match self.timer.mode() {
            TimerMode::Countdown => TimerMode::Stopwatch,
            TimerMode::Stopwatch => TimerMode::Countdown,
        };
        self.timer.switch_mode(mode);
        self.prompt = None;
        self.status = Some(format!("{mode} mode"));
    }

    /// Flip between focus and break.
    pub fn switch_phase(&mut self) {
        let phase = self.timer.phase().other();
        self.timer.switch_phase(phase);
        self.prompt = None;
        self.status = Some(format!("{phase} phase"));
    }

    /// End a stopwatch run and record it.
    ///
    /// # Errors
    ///
    /// Returns an error if saving the session fails.
    pub fn finish_stopwatch(&mut self) -> Result<(), SmarttimeError> {
        match self.timer.finish_stopwatch() {
            Ok(completion) => self.handle_completion(completion),
            Err(e) => {
                self.status = Some(e.to_string());
                Ok(())
            }
        }
    }

    /// Adjust the focus duration by `delta` minutes, clamped.
    pub fn adjust_focus_minutes(&mut self, delta: i32) {
        let minutes = clamp_focus_minutes(shifted(self.timer.focus_minutes(), delta));
        self.timer.set_focus_minutes(minutes);
        self.status = Some(format!("Focus: {minutes} min"));
    }

    /// Adjust the break duration by `delta` minutes, clamped.
    pub fn adjust_break_minutes(&mut self, delta: i32) {
        let minutes = clamp_break_minutes(shifted(self.timer.break_minutes(), delta));
        self.timer.set_break_minutes(minutes);
        self.status = Some(format!("Break: {minutes} min"));
    }

    /// Answer the pending completion prompt.
    ///
    /// Yes switches to the offered phase and starts it; no leaves the timer
    /// paused and reseeded for the phase that just finished.
    pub fn answer_prompt(&mut self, yes: bool) {
        let Some(prompt) = self.prompt.take() else {
            return;
        };
        if yes {
            self.timer.switch_phase(prompt.next_phase());
            self.timer.start();
            self.status = Some(format!("{} started", prompt.next_phase()));
        } else {
            self.timer.reset();
            self.status = None;
        }
    }

    fn handle_completion(&mut self, completion: Completion) -> Result<(), SmarttimeError> {
        if self.sound {
            ring_bell();
        }

        // Only focus time counts toward the session history.
        if completion.phase == Phase::Focus {
            let task = self
                .selected_task()
                .map(|t| (t.id.clone(), t.title.clone()));
            self.sessions.record(
                completion.minutes,
                Utc::now(),
                task.as_ref().map(|(id, title)| (id.as_str(), title.as_str())),
            );
            self.store.save_sessions(&self.sessions)?;
        }

        self.prompt = Some(match completion.phase {
            Phase::Focus => Prompt::StartBreak,
            Phase::Break => Prompt::StartFocus,
        });
        self.status = self.prompt.map(|p| p.question().to_string());
        Ok(())
    }
}

fn ring_bell() {
    let mut stdout = std::io::stdout();
    write!(stdout, "\x07").ok();
    stdout.flush().ok();
}

#[allow(clippy::cast_sign_loss)]
fn shifted(minutes: u32, delta: i32) -> u32 {
    let value = i64::from(minutes) + i64::from(delta);
    value.clamp(0, i64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::tasks::Priority;
    use tempfile::TempDir;

    fn app_with_store(store: &DataStore) -> App<'_> {
        App::new(store, &Config::default()).unwrap()
    }

    #[test]
    fn test_completed_focus_countdown_records_a_session() {
        let dir = TempDir::new().unwrap();
        let store = DataStore::with_dir(dir.path());
        store.save_tasks(&TaskStore::default()).unwrap();

        let mut app = app_with_store(&store);
        app.timer.set_focus_minutes(1);
        app.timer.start();
        for _ in 0..60 {
            app.on_tick().unwrap();
        }

        assert_eq!(app.sessions.len(), 1);
        assert_eq!(app.sessions.sessions()[0].duration_minutes, 1);
        assert_eq!(app.prompt, Some(Prompt::StartBreak));
        // Persisted, not just in memory.
        assert_eq!(store.load_sessions().unwrap().len(), 1);
    }

    #[test]
    fn test_completed_break_is_not_recorded() {
        let dir = TempDir::new().unwrap();
        let store = DataStore::with_dir(dir.path());
        store.save_tasks(&TaskStore::default()).unwrap();

        let mut app = app_with_store(&store);
        app.timer.switch_phase(Phase::Break);
        app.timer.set_break_minutes(1);
        app.timer.start();
        for _ in 0..60 {
            app.on_tick().unwrap();
        }

        assert!(app.sessions.is_empty());
        assert_eq!(app.prompt, Some(Prompt::StartFocus));
    }

    #[test]
    fn test_session_snapshots_selected_task() {
        let dir = TempDir::new().unwrap();
        let store = DataStore::with_dir(dir.path());
        let mut tasks = TaskStore::default();
        tasks.add_front(Task::new("Deep work", Priority::High, 25, None));
        store.save_tasks(&tasks).unwrap();

        let mut app = app_with_store(&store);
        app.timer.set_focus_minutes(1);
        app.timer.start();
        for _ in 0..60 {
            app.on_tick().unwrap();
        }

        let session = &app.sessions.sessions()[0];
        assert_eq!(session.task_title.as_deref(), Some("Deep work"));
        assert!(session.task_id.is_some());
    }

    #[test]
    fn test_answer_prompt_yes_starts_next_phase() {
        let dir = TempDir::new().unwrap();
        let store = DataStore::with_dir(dir.path());
        store.save_tasks(&TaskStore::default()).unwrap();

        let mut app = app_with_store(&store);
        app.prompt = Some(Prompt::StartBreak);
        app.answer_prompt(true);
        assert_eq!(app.timer.phase(), Phase::Break);
        assert!(app.timer.is_running());
        assert!(app.prompt.is_none());
    }

    #[test]
    fn test_answer_prompt_no_reseeds_and_pauses() {
        let dir = TempDir::new().unwrap();
        let store = DataStore::with_dir(dir.path());
        store.save_tasks(&TaskStore::default()).unwrap();

        let mut app = app_with_store(&store);
        app.prompt = Some(Prompt::StartBreak);
        app.answer_prompt(false);
        assert_eq!(app.timer.phase(), Phase::Focus);
        assert!(!app.timer.is_running());
        assert_eq!(app.timer.seconds(), app.timer.focus_minutes() * 60);
    }

    #[test]
    fn test_duration_adjustments_are_clamped() {
        let dir = TempDir::new().unwrap();
        let store = DataStore::with_dir(dir.path());
        store.save_tasks(&TaskStore::default()).unwrap();

        let mut app = app_with_store(&store);
        for _ in 0..100 {
            app.adjust_focus_minutes(5);
        }
        assert_eq!(app.timer.focus_minutes(), 120);
        for _ in 0..200 {
            app.adjust_focus_minutes(-5);
        }
        assert_eq!(app.timer.focus_minutes(), 1);
        for _ in 0..100 {
            app.adjust_break_minutes(1);
        }
        assert_eq!(app.timer.break_minutes(), 30);
    }

    #[test]
    fn test_stopwatch_finished_during_break_is_recorded() {
        let dir = TempDir::new().unwrap();
        let store = DataStore::with_dir(dir.path());
        store.save_tasks(&TaskStore::default()).unwrap();

        let mut app = app_with_store(&store);
        app.switch_mode();
        app.switch_phase();
        app.timer.start();
        for _ in 0..90 {
            app.on_tick().unwrap();
        }
        app.finish_stopwatch().unwrap();

        assert_eq!(app.sessions.len(), 1);
        assert_eq!(app.sessions.sessions()[0].duration_minutes, 2);
        assert_eq!(store.load_sessions().unwrap().len(), 1);
    }

    #[test]
    fn test_finish_stopwatch_in_countdown_sets_status_only() {
        let dir = TempDir::new().unwrap();
        let store = DataStore::with_dir(dir.path());
        store.save_tasks(&TaskStore::default()).unwrap();

        let mut app = app_with_store(&store);
        app.finish_stopwatch().unwrap();
        assert!(app.status.as_deref().unwrap_or_default().contains("stopwatch"));
        assert!(app.sessions.is_empty());
    }
}

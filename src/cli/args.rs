use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "smarttime")]
#[command(about = "A personal productivity CLI: tasks, calendar, focus timer, and analytics")]
#[command(long_about = "smarttime - tasks, focus sessions, and analytics in one place

Manage a to-do list, see it on a month calendar, run Pomodoro or stopwatch
focus sessions in a terminal UI, and review bucketed focus analytics.
Goals can be decomposed into subtasks with AI assistance.

QUICK START:
  smarttime task list               Show all tasks
  smarttime task add \"Buy milk\"     Add a task
  smarttime focus                   Open the focus timer
  smarttime stats --view weekly     This week's dashboard
  smarttime breakdown \"learn Rust\"  AI goal decomposition

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  smarttime <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage tasks
    ///
    /// Full CRUD over the task list. New tasks land at the front of the
    /// list. Task IDs may be given as any unique prefix.
    ///
    /// # Examples
    ///
    ///   smarttime task list
    ///   smarttime task add "Write report" --priority high --estimate 45
    ///   smarttime task toggle 3f2a
    ///   smarttime task delete 3f2a --force
    #[command(alias = "t")]
    Task(TaskArgs),

    /// Break a goal into subtasks with AI
    ///
    /// Sends the goal to the Gemini API and inserts 3-6 proposed subtasks
    /// at the front of the task list. Requires GEMINI_API_KEY. On any
    /// service failure no tasks are created.
    ///
    /// # Examples
    ///
    ///   smarttime breakdown "learn to play guitar"
    ///   smarttime breakdown "ship v1.0" --due 2025-06-01
    #[command(alias = "bd")]
    Breakdown(BreakdownArgs),

    /// Show a month calendar of tasks by due date
    ///
    /// Days with open tasks due are highlighted; days where everything due
    /// is completed are marked done. Tasks due on the selected day are
    /// listed below the grid.
    ///
    /// # Examples
    ///
    ///   smarttime calendar
    ///   smarttime calendar --month 2025-06
    ///   smarttime calendar --date 2025-06-15
    #[command(alias = "cal")]
    Calendar(CalendarArgs),

    /// Run the interactive focus timer
    ///
    /// Opens a terminal UI with a Pomodoro countdown (focus and break
    /// phases) and a stopwatch mode. Completed focus intervals are recorded
    /// to the session history. `focus history` lists recorded sessions.
    ///
    /// # Keys
    ///
    ///   space       start/pause        m  switch countdown/stopwatch
    ///   b           switch focus/break r  reset
    ///   f           finish stopwatch   j/k  pick a task
    ///   +/- [/]     adjust durations   q  quit
    #[command(alias = "f")]
    Focus(FocusArgs),

    /// Show the analytics dashboard
    ///
    /// Buckets recorded focus time by day (weekly, monthly) or month
    /// (yearly) and shows totals, session counts, and the task completion
    /// rate.
    ///
    /// # Examples
    ///
    ///   smarttime stats
    ///   smarttime stats --view yearly
    ///   smarttime stats --view monthly --offset -1    Last month
    #[command(alias = "st")]
    Stats(StatsArgs),

    /// Generate shell completions
    ///
    /// Supported shells: bash, zsh, fish, powershell, elvish.
    ///
    /// # Examples
    ///
    ///   smarttime completions zsh > ~/.zsh/completions/_smarttime
    Completions {
        /// Shell to generate completions for
        shell: String,
    },
}

#[derive(Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    pub command: TaskCommands,
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// List tasks
    #[command(alias = "ls")]
    List {
        /// Filter by status: all, todo, or done
        #[arg(long, default_value = "all")]
        status: String,
    },

    /// Show a single task
    Show {
        /// Task ID (or unique prefix)
        id: String,
    },

    /// Add a task
    #[command(alias = "a")]
    Add(AddTaskArgs),

    /// Edit a task's fields
    Edit(EditTaskArgs),

    /// Toggle a task between open and completed
    Toggle {
        /// Task ID (or unique prefix)
        id: String,
    },

    /// Delete a task permanently
    ///
    /// Recorded focus sessions keep their task title snapshot.
    Delete {
        /// Task ID (or unique prefix)
        id: String,
        /// Skip the confirmation guard
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args)]
pub struct AddTaskArgs {
    /// Task title
    pub title: String,

    /// Priority: high, medium, or low
    #[arg(short, long, default_value = "medium")]
    pub priority: String,

    /// Estimated minutes (clamped to 1-480)
    #[arg(short, long, default_value_t = 30)]
    pub estimate: u32,

    /// Due date: today, tomorrow, YYYY-MM-DD, or YYYY-MM-DDTHH:MM
    #[arg(short, long)]
    pub due: Option<String>,
}

#[derive(Args)]
pub struct EditTaskArgs {
    /// Task ID (or unique prefix)
    pub id: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New priority: high, medium, or low
    #[arg(long)]
    pub priority: Option<String>,

    /// New estimate in minutes (clamped to 1-480)
    #[arg(long)]
    pub estimate: Option<u32>,

    /// New due date: today, tomorrow, YYYY-MM-DD, or YYYY-MM-DDTHH:MM
    #[arg(long, conflicts_with = "clear_due")]
    pub due: Option<String>,

    /// Remove the due date
    #[arg(long)]
    pub clear_due: bool,
}

#[derive(Args)]
pub struct BreakdownArgs {
    /// The goal to decompose
    pub goal: String,

    /// Due date applied to every subtask
    #[arg(short, long)]
    pub due: Option<String>,

    /// Gemini API key (usually set via the environment)
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

#[derive(Args)]
pub struct CalendarArgs {
    /// Month to show as YYYY-MM (defaults to the current month)
    #[arg(short, long)]
    pub month: Option<String>,

    /// Day to select as YYYY-MM-DD (defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,
}

#[derive(Args)]
pub struct FocusArgs {
    #[command(subcommand)]
    pub command: Option<FocusCommands>,
}

#[derive(Subcommand)]
pub enum FocusCommands {
    /// List recorded focus sessions, most recent first
    History {
        /// Maximum number of sessions to show
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },
}

#[derive(Args)]
pub struct StatsArgs {
    /// Aggregation view: weekly, monthly, or yearly
    #[arg(short, long, default_value = "weekly")]
    pub view: String,

    /// Periods to shift from the current one (negative = past)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i32,
}

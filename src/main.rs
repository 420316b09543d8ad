use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use smarttime::cli::args::{Cli, Commands};
use smarttime::cli::commands;
use smarttime::config::Config;
use smarttime::error::SmarttimeError;
use smarttime::features::breakdown::GeminiPlanner;
use smarttime::storage::DataStore;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), SmarttimeError> {
    let cli = Cli::parse();
    let format = cli.output;

    if let Commands::Completions { shell } = &cli.command {
        println!("{}", commands::completions(shell)?);
        return Ok(());
    }

    let config = Config::load()?;
    let store = DataStore::open()?;

    let output = match cli.command {
        Commands::Task(args) => commands::task(&store, args.command, format)?,
        Commands::Breakdown(args) => {
            let api_key = args.api_key.ok_or_else(|| {
                SmarttimeError::Config(
                    "GEMINI_API_KEY is not set; export it or pass --api-key".to_string(),
                )
            })?;
            let planner = GeminiPlanner::new(api_key, config.ai.model.clone());
            commands::breakdown(&store, &planner, &args.goal, args.due.as_deref(), format)?
        }
        Commands::Calendar(args) => commands::calendar(&store, &args, format)?,
        Commands::Focus(args) => commands::focus(&store, &config, args.command, format)?,
        Commands::Stats(args) => commands::stats(&store, &args, format)?,
        Commands::Completions { .. } => unreachable!("handled above"),
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

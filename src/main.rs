use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use respira::cli::args::{Cli, Commands};
use respira::cli::commands;
use respira::config::{ColorSetting, Config};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let format = cli.output;

    match config.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {}
    }

    let output = match cli.command {
        Commands::List => commands::list(&config, format)?,
        Commands::Show { technique } => commands::show(&config, &technique, format)?,
        Commands::Start { technique, pattern, cycles, name } => commands::start(
            &config,
            technique.as_deref(),
            pattern.as_deref(),
            cycles,
            &name,
            format,
        )?,
        Commands::Completions { shell } => commands::completions(&shell)?,
        Commands::Tui => {
            respira::tui::run(&config)?;
            String::new()
        }
    };

    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

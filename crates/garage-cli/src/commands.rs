//! Command handlers

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use garage_app::config::Config;
use garage_types::{Error, ExportFormat, OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::console::Console;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load_or_default();
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => cmd_shell(config, output_format),

        Commands::Run { script, fail_fast } => {
            cmd_run(config, output_format, script, fail_fast)
        }

        Commands::Config {
            show,
            set_export_format,
            set_export_dir,
            set_output,
            reset,
        } => cmd_config(show, set_export_format, set_export_dir, set_output, reset),
    }
}

fn cmd_shell(config: Config, output_format: OutputFormat) -> Result<()> {
    println!("Garage Tracker - type 'help' for commands, 'quit' to exit");
    let stdin = io::stdin();
    let mut console = Console::new(config, output_format, io::stdout());
    console.run(stdin.lock(), true, false)
}

fn cmd_run(
    config: Config,
    output_format: OutputFormat,
    script: PathBuf,
    fail_fast: bool,
) -> Result<()> {
    let file = File::open(&script).map_err(|e| {
        Error::Io(io::Error::new(
            e.kind(),
            format!("{}: {}", script.display(), e),
        ))
    })?;
    log::info!("Running script {}", script.display());

    let mut console = Console::new(config, output_format, io::stdout());
    console.run(BufReader::new(file), false, fail_fast)
}

fn cmd_config(
    show: bool,
    set_export_format: Option<ExportFormat>,
    set_export_dir: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(format) = set_export_format {
        config.export_format = format;
        modified = true;
    }

    if let Some(dir) = set_export_dir {
        config.export_dir = Some(dir);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration saved");
    }

    if show || !modified {
        println!("\n{}", config);
    }

    Ok(())
}

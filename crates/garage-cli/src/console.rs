//! Line-oriented console over a garage

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use garage_app::app::export_records;
use garage_app::config::Config;
use garage_domain::Garage;
use garage_types::{Error, OutputFormat, Result, VehicleKind};

#[derive(Parser, Debug)]
#[command(name = "garage", no_binary_name = true, disable_version_flag = true)]
struct ConsoleLine {
    #[command(subcommand)]
    command: ConsoleCommand,
}

#[derive(Subcommand, Debug)]
enum ConsoleCommand {
    /// Register a vehicle: register <Car|Bike|Truck> <name> <license> <owner>
    #[command(alias = "add")]
    Register {
        kind: String,
        name: String,
        license: String,
        owner: String,
    },

    /// Show the service queue
    #[command(alias = "list")]
    Vehicles,

    /// Start service for a vehicle
    Start { id: String },

    /// Check fuel efficiency of the vehicle in service
    #[command(alias = "check")]
    Sample,

    /// Complete the current service
    #[command(alias = "complete")]
    Stop,

    /// Show service records, including the session in progress
    Records,

    /// Export service records (.xlsx or .csv)
    Export { path: Option<PathBuf> },

    /// Leave the console
    #[command(alias = "exit")]
    Quit,
}

/// Whether the console keeps reading after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Console<W: Write> {
    garage: Garage,
    config: Config,
    output_format: OutputFormat,
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(config: Config, output_format: OutputFormat, out: W) -> Self {
        Self {
            garage: Garage::new(),
            config,
            output_format,
            out,
        }
    }

    #[cfg(test)]
    pub fn garage(&self) -> &Garage {
        &self.garage
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    /// Read lines until EOF or `quit`.
    ///
    /// Command failures are reported and reading continues, unless
    /// `fail_fast` is set, in which case the first failure is returned.
    pub fn run<R: BufRead>(&mut self, input: R, prompt: bool, fail_fast: bool) -> Result<()> {
        if prompt {
            self.prompt()?;
        }
        for line in input.lines() {
            let line = line?;
            match self.execute_line(&line) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) if fail_fast => return Err(e),
                Err(e) => writeln!(self.out, "Error: {}", e)?,
            }
            if prompt {
                self.prompt()?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn prompt(&mut self) -> Result<()> {
        write!(self.out, "garage> ")?;
        self.out.flush()?;
        Ok(())
    }

    /// Parse and apply one console line. Blank lines and `#` comments are
    /// ignored.
    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(Flow::Continue);
        }

        let words = shell_words::split(trimmed)
            .map_err(|e| Error::Validation(format!("could not parse '{}': {}", trimmed, e)))?;

        let parsed = match ConsoleLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(e) => {
                use clap::error::ErrorKind;
                return match e.kind() {
                    ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                        write!(self.out, "{}", e)?;
                        Ok(Flow::Continue)
                    }
                    _ => Err(Error::Validation(e.to_string().trim_end().to_string())),
                };
            }
        };

        self.apply(parsed.command)
    }

    fn apply(&mut self, command: ConsoleCommand) -> Result<Flow> {
        match command {
            ConsoleCommand::Register {
                kind,
                name,
                license,
                owner,
            } => {
                let kind: VehicleKind = kind.parse()?;
                let vehicle = self
                    .garage
                    .register_vehicle(kind, &name, &license, &owner)?;
                writeln!(self.out, "Vehicle {} added.", vehicle.id)?;
            }

            ConsoleCommand::Vehicles => {
                crate::output::output_vehicles(
                    &mut self.out,
                    self.output_format,
                    self.garage.vehicles(),
                )?;
            }

            ConsoleCommand::Start { id } => {
                let session = self.garage.start_service(&id)?;
                writeln!(self.out, "{}", session.vehicle.start_message())?;
                writeln!(
                    self.out,
                    "Service started for {} ({})",
                    session.vehicle.name, session.id
                )?;
            }

            ConsoleCommand::Sample => {
                let reading = self.garage.sample_fuel_efficiency()?;
                writeln!(self.out, "Fuel efficiency: {}", reading)?;
            }

            ConsoleCommand::Stop => {
                let session = self.garage.stop_service()?;
                writeln!(self.out, "{}", session.vehicle.stop_message())?;
                writeln!(
                    self.out,
                    "Service completed. Duration {}",
                    session.duration_label().unwrap_or_default()
                )?;
            }

            ConsoleCommand::Records => {
                let rows = self.garage.record_rows();
                crate::output::output_records(&mut self.out, self.output_format, &rows)?;
            }

            ConsoleCommand::Export { path } => {
                let written = export_records(&self.garage, path.as_deref(), &self.config)?;
                writeln!(self.out, "Exported successfully! ({})", written.display())?;
            }

            ConsoleCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garage_types::{ExportError, ExportFormat, VehicleStatus};
    use tempfile::tempdir;

    fn console() -> Console<Vec<u8>> {
        Console::new(Config::default(), OutputFormat::Table, Vec::new())
    }

    fn output(console: Console<Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_register_with_quoted_name() {
        let mut c = console();
        c.execute_line(r#"register car "Mustang GT" XYZ123 Dom"#)
            .unwrap();

        let vehicle = c.garage().vehicle("V001").unwrap();
        assert_eq!(vehicle.name, "Mustang GT");
        assert_eq!(vehicle.kind, VehicleKind::Car);
        assert!(output(c).contains("Vehicle V001 added."));
    }

    #[test]
    fn test_register_unknown_kind() {
        let mut c = console();
        let result = c.execute_line("register boat Nautilus N-1 Nemo");
        assert!(matches!(result, Err(Error::Validation(_))));
        assert!(c.garage().vehicles().is_empty());
    }

    #[test]
    fn test_register_blank_field() {
        let mut c = console();
        let result = c.execute_line(r#"register car "  " XYZ123 Dom"#);
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_service_cycle_messages() {
        let mut c = console();
        for line in [
            "register Car Mustang XYZ123 Dom",
            "start V001",
            "check",
            "records",
            "stop",
        ] {
            assert_eq!(c.execute_line(line).unwrap(), Flow::Continue);
        }
        assert_eq!(
            c.garage().vehicle("V001").unwrap().status,
            VehicleStatus::Waiting
        );
        assert_eq!(c.garage().records().count(), 1);

        let text = output(c);
        assert!(text.contains("Mustang (Car) started."));
        assert!(text.contains("Service started for Mustang (S001)"));
        assert!(text.contains("Fuel efficiency: "));
        assert!(text.contains("In Progress"));
        assert!(text.contains("Mustang (Car) stopped."));
        assert!(text.contains("Service completed. Duration 0:00:0"));
    }

    #[test]
    fn test_errors_surface_as_typed_failures() {
        let mut c = console();
        assert!(matches!(c.execute_line("stop"), Err(Error::NoActiveSession)));
        assert!(matches!(c.execute_line("sample"), Err(Error::NoActiveSession)));
        assert!(matches!(c.execute_line("start V001"), Err(Error::NotFound(_))));
        assert!(matches!(
            c.execute_line("export"),
            Err(Error::Export(ExportError::EmptyStore))
        ));
        assert!(matches!(c.execute_line("fly"), Err(Error::Validation(_))));
    }

    #[test]
    fn test_comments_blank_lines_and_quit() {
        let mut c = console();
        assert_eq!(c.execute_line("").unwrap(), Flow::Continue);
        assert_eq!(c.execute_line("  # note").unwrap(), Flow::Continue);
        assert_eq!(c.execute_line("quit").unwrap(), Flow::Quit);
        assert_eq!(c.execute_line("exit").unwrap(), Flow::Quit);
    }

    #[test]
    fn test_run_script_continues_after_errors() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("records.csv");
        let script = format!(
            "register Truck Hauler TR-9 Hobbs\n\
             stop\n\
             start V001\n\
             stop\n\
             export \"{}\"\n\
             quit\n\
             register Car Ignored X Y\n",
            target.display()
        );

        let mut c = console();
        c.run(script.as_bytes(), false, false).unwrap();

        assert_eq!(c.garage().vehicles().len(), 1);
        assert!(target.exists());
        let text = output(c);
        assert!(text.contains("Error: No vehicle in service"));
        assert!(text.contains("Exported successfully!"));
    }

    #[test]
    fn test_run_fail_fast() {
        let mut c = console();
        let script = "register Car Mustang XYZ123 Dom\nstop\nstart V001\n";
        let result = c.run(script.as_bytes(), false, true);
        assert!(matches!(result, Err(Error::NoActiveSession)));
        assert!(c.garage().current_session().is_none());
    }

    #[test]
    fn test_json_vehicle_listing() {
        let mut c = Console::new(Config::default(), OutputFormat::Json, Vec::new());
        c.execute_line("register Bike Ducati BK-77 Letty").unwrap();
        c.execute_line("vehicles").unwrap();

        let text = output(c);
        let json_start = text.find('[').unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text[json_start..]).unwrap();
        assert_eq!(parsed[0]["id"], "V001");
        assert_eq!(parsed[0]["kind"], "Bike");
        assert_eq!(parsed[0]["status"], "Waiting");
    }

    #[test]
    fn test_export_without_extension_uses_config_format() {
        let dir = tempdir().unwrap();
        let config = Config {
            export_format: ExportFormat::Csv,
            export_dir: Some(dir.path().to_path_buf()),
            ..Config::default()
        };
        let mut c = Console::new(config, OutputFormat::Table, Vec::new());
        c.execute_line("register Car Mustang XYZ123 Dom").unwrap();
        c.execute_line("start V001").unwrap();
        c.execute_line("stop").unwrap();

        let base = dir.path().join("garage_export");
        c.execute_line(&format!("export \"{}\"", base.display()))
            .unwrap();
        assert!(base.with_extension("csv").exists());
    }
}

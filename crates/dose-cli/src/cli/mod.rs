mod commands;

use clap::Parser;
use dose_core::DoseError;

pub fn run_from_env() -> i32 {
    let args: Vec<String> = std::env::args().collect();

    match parse_and_dispatch(args) {
        Ok(code) => code,
        Err(error) => {
            let dose_error = error.as_dose_error();
            eprintln!("{}", dose_error.diagnostic_line());
            dose_error.exit_code()
        }
    }
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => dispatch_parsed(cli.command),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = "effective-dose",
    version,
    about = "Effective dose from ICRP 116 fluence-to-dose conversion coefficients"
)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Look up one conversion coefficient
    Coefficient(commands::CoefficientArgs),
    /// Print the tabulated coefficients of one particle family
    Table(commands::TableArgs),
    /// List the tabulated particle families
    Families,
}

impl CliCommand {
    fn name(&self) -> &'static str {
        match self {
            Self::Coefficient(_) => "coefficient",
            Self::Table(_) => "table",
            Self::Families => "families",
        }
    }
}

fn dispatch_parsed(command: CliCommand) -> Result<i32, CliError> {
    tracing::debug!(command = command.name(), "dispatching subcommand");
    match command {
        CliCommand::Coefficient(args) => commands::run_coefficient_command(args),
        CliCommand::Table(args) => commands::run_table_command(args),
        CliCommand::Families => commands::run_families_command(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(DoseError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<DoseError> for CliError {
    fn from(error: DoseError) -> Self {
        Self::Compute(error)
    }
}

impl CliError {
    fn as_dose_error(&self) -> DoseError {
        match self {
            Self::Usage(message) => {
                DoseError::input_validation("INPUT.CLI_USAGE", message.trim_end().to_string())
            }
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => DoseError::io_system("IO.CLI", format!("{error:#}")),
        }
    }
}

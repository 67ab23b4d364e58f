use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tutor_payouts::application::engine::PayoutEngine;
use tutor_payouts::config::FeeSchedule;
use tutor_payouts::domain::ports::RosterSourceBox;
use tutor_payouts::infrastructure::file_roster::FileRoster;
use tutor_payouts::interfaces::report::ReportWriter;
use tutor_payouts::logging;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Client plan table CSV (client,plan,biweekly,split)
    plans: PathBuf,

    /// Roster CSV (worker,client,cycles[,management])
    roster: PathBuf,

    /// TOML fee schedule; defaults apply to any key it leaves out
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log each pipeline stage to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let schedule = match cli.config {
        Some(path) => FeeSchedule::from_file(path).into_diagnostic()?,
        None => FeeSchedule::default(),
    };

    let source: RosterSourceBox = Box::new(FileRoster::new(cli.plans, cli.roster));
    let engine = PayoutEngine::new(source, schedule);

    // No partial report: any failure prints a single line instead.
    let report = match engine.run().await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock());
    match cli.format {
        Format::Text => writer.write_text(&report).into_diagnostic()?,
        Format::Json => writer.write_json(&report).into_diagnostic()?,
    }

    Ok(ExitCode::SUCCESS)
}

use clap::{Parser, Subcommand};
use joblist_export::cli;
use joblist_export::error::JoblistResult;
use joblist_export::excel::DOWNLOAD_FILE_NAME;
use joblist_export::pipeline::DEFAULT_PREVIEW_ROWS;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "joblist")]
#[command(about = "Turn a collision-repair job_list CSV export into a sorted, styled Excel sheet")]
#[command(long_about = "joblist - job listing processor

Reads the job_list CSV export, keeps genuine job rows (Job Number present,
first column letter+digit, Key Tag present), keeps 13 columns, sorts by
Key Tag then Due On Site Date/Time and writes a banded Excel sheet.

COMMANDS:
  process  - CSV export to processed_data.xlsx
  preview  - Show the first processed rows without writing anything

EXAMPLES:
  joblist process job_list_2024.csv
  joblist process job_list_2024.csv -o keytags.xlsx -n 10
  joblist preview job_list_2024.csv")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a job listing export into an Excel workbook
    Process {
        /// Path to the job_list CSV export
        input: PathBuf,

        /// Output .xlsx path
        #[arg(short, long, default_value = DOWNLOAD_FILE_NAME)]
        output: PathBuf,

        /// Number of processed rows to preview
        #[arg(short = 'n', long, default_value_t = DEFAULT_PREVIEW_ROWS)]
        preview: usize,

        /// Show verbose progress and debug logs
        #[arg(short, long)]
        verbose: bool,
    },

    /// Preview the processed rows without writing a workbook
    Preview {
        /// Path to the job_list CSV export
        input: PathBuf,

        /// Number of rows to show
        #[arg(short = 'n', long, default_value_t = DEFAULT_PREVIEW_ROWS)]
        rows: usize,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "joblist_export=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> JoblistResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Process {
            input,
            output,
            preview,
            verbose,
        } => {
            if verbose {
                init_tracing();
            }
            cli::process(input, output, preview, verbose)
        }

        Commands::Preview { input, rows } => cli::preview(input, rows),
    }
}

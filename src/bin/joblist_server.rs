//! Job listing server binary
//!
//! Browser and HTTP front end for the job listing processor.

use clap::Parser;
use joblist_export::api::{run_api_server, server::DEFAULT_MAX_UPLOAD_BYTES, ApiConfig};

#[derive(Parser, Debug)]
#[command(name = "joblist-server")]
#[command(version)]
#[command(about = "Job listing server - upload a job_list CSV, download the processed Excel sheet")]
#[command(long_about = r#"
Job listing server

Endpoints:
  - GET  /                  - Upload form
  - POST /api/v1/preview    - Multipart `file` upload, JSON preview of the processed rows
  - POST /api/v1/process    - Multipart `file` upload, processed_data.xlsx download
  - GET  /health            - Health check
  - GET  /version           - Server version info

Example usage:
  joblist-server                           # Start on localhost:8080
  joblist-server --host 0.0.0.0 --port 3000

  curl -F file=@job_list.csv http://localhost:8080/api/v1/process -o processed_data.xlsx
"#)]
struct Args {
    /// Host address to bind to (use 0.0.0.0 for all interfaces)
    #[arg(short = 'H', long, default_value = "127.0.0.1", env = "JOBLIST_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "JOBLIST_PORT")]
    port: u16,

    /// Largest accepted request body, in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_BYTES, env = "JOBLIST_MAX_UPLOAD_BYTES")]
    max_upload_bytes: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = ApiConfig {
        host: args.host,
        port: args.port,
        max_upload_bytes: args.max_upload_bytes,
    };

    run_api_server(config).await
}

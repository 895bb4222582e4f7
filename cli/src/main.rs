use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use marks_canvas::doc::{Shape, ShapeList};
use marks_canvas::export::{ExportError, export};
use marks_canvas::submit::{DEFAULT_BASE_URL, MarksClient, SubmitError};
use marks_wire::MarksRequest;


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("invalid shapes file: {0}")]
    InvalidShapes(serde_json::Error),
    #[error("{0}")]
    Export(#[from] ExportError),
    #[error("{0}")]
    Submit(#[from] SubmitError),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("health check failed: HTTP {0}")]
    Unhealthy(u16),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "marks", about = "Export and submit image marks")]
struct Cli {
    #[arg(long, env = "MARKS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the coordinate payload for a shapes file.
    Export {
        #[arg(help = "JSON array of shapes, or - for stdin")]
        shapes: PathBuf,
    },
    /// Post the coordinate payload for a shapes file to the marks service.
    Submit {
        #[arg(help = "JSON array of shapes, or - for stdin")]
        shapes: PathBuf,
    },
    /// Check that the marks service is up.
    Ping,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    match cli.command {
        Command::Export { shapes } => {
            let request = build_request(&read_input(&shapes)?)?;
            print_json(&request)
        }
        Command::Submit { shapes } => {
            let request = build_request(&read_input(&shapes)?)?;
            let ack = MarksClient::new(&cli.base_url).submit(&request).await?;
            print_json(&ack)
        }
        Command::Ping => run_ping(&cli.base_url).await,
    }
}

fn read_input(path: &Path) -> Result<String, CliError> {
    let display = path.display().to_string();
    if display == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| CliError::Read { path: display, source })?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).map_err(|source| CliError::Read { path: display, source })
}

/// Parse a shapes file and derive the submission payload.
///
/// Ids in the file are ignored; shapes are renumbered in file order.
fn build_request(raw: &str) -> Result<MarksRequest, CliError> {
    let shapes: Vec<Shape> = serde_json::from_str(raw).map_err(CliError::InvalidShapes)?;
    let mut list = ShapeList::new();
    list.load(shapes);
    let coordinates = export(list.as_slice())?;
    Ok(MarksRequest { coordinates })
}

async fn run_ping(base_url: &str) -> Result<(), CliError> {
    let url = format!("{}/healthz", base_url.trim_end_matches('/'));
    let status = reqwest::Client::new().get(url).send().await?.status();
    if !status.is_success() {
        return Err(CliError::Unhealthy(status.as_u16()));
    }
    println!("ok");
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

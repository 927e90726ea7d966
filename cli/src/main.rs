mod report;

use std::fs;
use std::io::{self, Read};

use clap::{Args, Parser, Subcommand};
use scene::config::ViewerConfig;
use scene::request::{BaseDimensions, InputError, build_request};
use scene::ruler::{RulerParams, build_ruler};
use scene::wire::{CALCULATE_PACKING_PATH, Container, PackingRequest, PackingResponse, ServiceError};

use report::{endpoint, parse_box_arg, placement_report, ruler_report};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("invalid --box value {0:?}; expected NAME:LxWxH:WEIGHT[:QUANTITY][:fragile]")]
    InvalidBoxArg(String),
    #[error("health check failed with status {0}")]
    Unhealthy(u16),
}

#[derive(Parser, Debug)]
#[command(name = "packing-cli", about = "Bin-packing service client and ruler inspector")]
struct Cli {
    #[arg(long, env = "PACKING_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the service is up.
    Ping,
    /// Send a packing request and print the placements.
    Pack(PackArgs),
    /// Print the measurement ruler for a container without contacting the service.
    Ruler(RulerArgs),
}

#[derive(Args, Debug, Clone, Copy)]
struct ContainerArgs {
    #[arg(long)]
    width: Option<f64>,
    #[arg(long)]
    length: Option<f64>,
    #[arg(long)]
    height: Option<f64>,
}

impl ContainerArgs {
    fn base(self) -> BaseDimensions {
        BaseDimensions { width: self.width, length: self.length, height: self.height }
    }
}

#[derive(Args, Debug)]
struct PackArgs {
    #[command(flatten)]
    container: ContainerArgs,

    #[arg(long = "box", value_name = "NAME:LxWxH:WEIGHT[:QUANTITY][:fragile]")]
    boxes: Vec<String>,

    #[arg(long, help = "Request JSON file, or - for stdin; used when no --box is given")]
    input: Option<String>,

    #[arg(long, default_value_t = false, help = "Print the raw response JSON")]
    json: bool,
}

#[derive(Args, Debug)]
struct RulerArgs {
    #[command(flatten)]
    container: ContainerArgs,

    #[arg(long, env = "PACKING_RULER_DIVISIONS")]
    divisions: Option<u32>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Ping => run_ping(&cli.base_url).await,
        Command::Pack(args) => run_pack(&cli.base_url, args).await,
        Command::Ruler(args) => run_ruler(&args),
    }
}

async fn run_ping(base_url: &str) -> Result<(), CliError> {
    let response = reqwest::Client::new()
        .get(endpoint(base_url, "/healthz"))
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Unhealthy(status.as_u16()));
    }
    println!("ok");
    Ok(())
}

async fn run_pack(base_url: &str, args: PackArgs) -> Result<(), CliError> {
    let (container, request) = if args.boxes.is_empty() {
        let request: PackingRequest = serde_json::from_str(&read_input(args.input.as_deref().unwrap_or("-"))?)?;
        (request.container(), request)
    } else {
        let specs = args
            .boxes
            .iter()
            .map(|raw| parse_box_arg(raw))
            .collect::<Result<Vec<_>, _>>()?;
        build_request(&args.container.base(), &specs)?
    };

    let response = post_packing(base_url, &request).await?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        for line in placement_report(container, &response) {
            println!("{line}");
        }
    }
    Ok(())
}

fn run_ruler(args: &RulerArgs) -> Result<(), CliError> {
    let container: Container = args.container.base().container()?;
    let mut config = ViewerConfig::default();
    if let Some(divisions) = args.divisions {
        config.divisions = divisions;
    }
    let ruler = build_ruler(container.extents(), RulerParams::from_config(&config));
    for line in ruler_report(&ruler) {
        println!("{line}");
    }
    Ok(())
}

async fn post_packing(base_url: &str, request: &PackingRequest) -> Result<PackingResponse, CliError> {
    let response = reqwest::Client::new()
        .post(endpoint(base_url, CALCULATE_PACKING_PATH))
        .json(request)
        .send()
        .await?;
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(ServiceError::from_response(status.as_u16(), &body).into());
    }
    serde_json::from_str(&body).map_err(|e| ServiceError::Decode(e.to_string()).into())
}

fn read_input(path: &str) -> Result<String, CliError> {
    if path == "-" {
        let mut raw = String::new();
        io::stdin().read_to_string(&mut raw)?;
        return Ok(raw);
    }
    Ok(fs::read_to_string(path)?)
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;

//! nsight-proxy -- republishes the N-sight XML API as JSON over a local
//! port.
//!
//! One query-parameterized endpoint (`GET /api`) accepts `service`,
//! `apikey`, and service-specific parameters; the key is translated into
//! a per-request upstream client, so the proxy itself holds no
//! credentials -- only the dashboard server address.

mod routes;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// nsight-proxy -- JSON gateway for the N-sight dashboard API
#[derive(Debug, Parser)]
#[command(name = "nsight-proxy", version, about)]
struct Args {
    /// Listen address
    #[arg(long, env = "NSIGHT_PROXY_ADDR", default_value = "0.0.0.0:8080")]
    listen: String,

    /// Dashboard profile to use
    #[arg(long, short = 'p', env = "NSIGHT_PROFILE")]
    profile: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(err) = run(args).await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    // Only the server address is needed at startup; API keys arrive with
    // each request.
    let server = nsight_config::resolve_server_only(args.profile.as_deref())?;
    info!(server, "starting N-sight JSON proxy");

    let router = routes::build_router(routes::AppState::new(server));

    let listener = tokio::net::TcpListener::bind(&args.listen).await?;
    info!(listen = %args.listen, "listening");
    axum::serve(listener, router).await?;
    Ok(())
}

//! WebServer entry point

use clap::Parser;
use std::net::SocketAddr;

use dedupe::{CrmConfig, MergeEngine, RealRecordStore};
use webserver::{WebServer, WebServerError, WebServerResult};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "HTTP front end for the CRM duplicate merge engine")]
struct Args {
    /// Port for HTTP server (browser connections)
    #[arg(long, default_value = "3000")]
    port: u16,

    /// Static files directory (the browser form UI)
    #[arg(long, default_value = "./webserver/static")]
    static_dir: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> WebServerResult<()> {
    // `.env` is optional; real environments set the variables directly.
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level);

    let config = CrmConfig::from_env()?;
    tracing::info!("🚀 Starting duplicate merge webserver for {}", config.domain);

    let engine = MergeEngine::new(RealRecordStore::new(config));
    let server = WebServer::new(engine, args.static_dir);

    let addr: SocketAddr = format!("127.0.0.1:{}", args.port)
        .parse()
        .map_err(|e| WebServerError::ConfigError {
            message: format!("Invalid port: {e}"),
        })?;

    server.run(addr).await?;

    tracing::info!("✅ WebServer stopped gracefully");
    Ok(())
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = format!("webserver={log_level},dedupe={log_level},tower_http=warn,reqwest=warn");
    fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

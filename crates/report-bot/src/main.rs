use std::process;

use clap::Parser;
use report_bot::{AppState, Config, ConfigError, serve};
use tokio::net::TcpListener;
use tokio::runtime::Builder;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "report-bot")]
#[command(about = "LINE webhook that checks election unit reports", long_about = None)]
struct Cli {
    /// Bind address, overrides HOST.
    #[arg(long)]
    host: Option<String>,
    /// Bind port, overrides PORT.
    #[arg(long)]
    port: Option<u16>,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(err) => {
            error!(error = %err, "report-bot stopped");
            err.exit_code()
        }
    };
    process::exit(exit_code);
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = Config::from_env()?;
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    info!(?config, "configuration loaded");

    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;
    runtime.block_on(async move {
        let bind_addr = config.bind_addr();
        let listener = TcpListener::bind(&bind_addr)
            .await
            .map_err(|err| CliError::Bind(bind_addr.clone(), err))?;
        info!(addr = %bind_addr, "listening for LINE webhooks on /callback");
        serve(listener, AppState::from_config(&config))
            .await
            .map_err(CliError::Serve)
    })
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,report_bot=debug,line_messaging=debug,tower_http=info")
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to start runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("failed to bind {0}: {1}")]
    Bind(String, #[source] std::io::Error),
    #[error("server failure: {0}")]
    Serve(#[source] std::io::Error),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) => 2,
            CliError::Runtime(_) => 3,
            CliError::Bind(_, _) => 7,
            CliError::Serve(_) => 7,
        }
    }
}

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pagebar::config::Config;
use pagebar::jump::{self, LinePrompt};
use pagebar::state::AppState;
use pagebar::{PageWindowBuilder, PaginationRequest, QueryStringUrls};

#[derive(Parser)]
#[command(name = "pagebar", version, about = "Pagination bar page windows")]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the page window and navigation for one position as JSON
    Window(PositionArgs),
    /// Ask for a page number and print its URL
    Jump(PositionArgs),
    /// Serve page windows over HTTP
    Serve,
}

#[derive(Args)]
struct PositionArgs {
    /// URL the page parameter is set on
    #[arg(long)]
    base_url: String,

    /// Page currently shown (1-based)
    #[arg(long)]
    current_page: u32,

    /// Number of pages
    #[arg(long)]
    total_pages: u32,

    /// Maximum page buttons before gaps are introduced
    #[arg(long)]
    max_page_buttons: Option<u32>,

    /// Query parameter carrying the page number
    #[arg(long)]
    page_url_key: Option<String>,
}

impl PositionArgs {
    fn into_request(self, config: &Config) -> PaginationRequest {
        PaginationRequest::new(self.base_url, self.current_page, self.total_pages)
            .with_max_page_buttons(
                self.max_page_buttons
                    .unwrap_or(config.pagination.max_page_buttons),
            )
            .with_page_url_key(
                self.page_url_key
                    .unwrap_or_else(|| config.pagination.page_url_key.clone()),
            )
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load configuration; only an explicitly named file has to exist
    let loaded = match &cli.config {
        Some(path) => Config::load(path),
        None => Config::load_or_default(&PathBuf::from("pagebar.toml")),
    };
    let config = loaded.unwrap_or_else(|e| {
        eprintln!("Error loading config: {e}");
        std::process::exit(1);
    });

    // Setup tracing/logging; stdout carries command output
    let filter =
        EnvFilter::try_new(&config.server.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Window(args) => {
            let request = args.into_request(&config);
            let view = PageWindowBuilder::new(&request, &QueryStringUrls).view();
            match serde_json::to_string_pretty(&view) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    tracing::error!("Failed to serialize page window: {e}");
                    std::process::exit(1);
                }
            }
        }
        Command::Jump(args) => {
            let request = args.into_request(&config);
            let stdin = std::io::stdin();
            let mut prompt = LinePrompt::new(stdin.lock(), std::io::stderr());
            if jump::jump_to_page(&request, &mut prompt, &QueryStringUrls).is_none() {
                tracing::info!("Jump cancelled");
            }
        }
        Command::Serve => serve(config).await,
    }
}

async fn serve(config: Config) {
    let addr = SocketAddr::new(
        config.server.host.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid host '{}', falling back to 127.0.0.1",
                config.server.host
            );
            std::net::Ipv4Addr::LOCALHOST.into()
        }),
        config.server.port,
    );

    tracing::info!("pagebar v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Defaults: max_page_buttons={}, page_url_key={}",
        config.pagination.max_page_buttons,
        config.pagination.page_url_key
    );
    tracing::info!("Listening on {addr}");

    let app = pagebar::build_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to bind to {addr}: {e}");
            std::process::exit(1);
        });

    axum::serve(listener, app).await.unwrap_or_else(|e| {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    });
}

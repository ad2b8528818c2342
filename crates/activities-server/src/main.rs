//! Mergington High School activities — signup API and frontend server.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use activities_core::ServerConfig;
use activities_directory::Directory;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod routes;
mod state;

use state::AppState;

fn default_static_dir() -> PathBuf {
    let bundled = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/static"));
    if bundled.is_dir() {
        bundled.to_path_buf()
    } else {
        PathBuf::from("static")
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--help" | "-h" | "help" => {
                println!("Mergington High School activities server");
                println!();
                println!("Usage: activities [command]");
                println!();
                println!("Commands:");
                println!("  (none)    Start the server");
                println!("  help      Show this help message");
                println!();
                println!("Environment:");
                println!("  HOST                    Bind address (default 0.0.0.0)");
                println!("  PORT                    Listen port (default 8000)");
                println!("  ACTIVITIES_STATIC_DIR   Frontend directory served under /static");
                println!("  RUST_LOG                Log filter (default info)");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'activities help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    let config = ServerConfig::from_env(default_static_dir());
    let addr = config.bind_addr()?;

    if config.static_dir.is_dir() {
        info!("Serving frontend from {}", config.static_dir.display());
    } else {
        warn!(
            "Static directory {} does not exist; frontend will return 404",
            config.static_dir.display()
        );
    }

    let directory = Directory::seeded()?;
    info!("Loaded {} activities", directory.len());

    let state = Arc::new(AppState::new(config, directory));
    let app = routes::build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Activities server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

use std::process::exit;

use dialdex::cli;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    if let Err(e) = cli::run_app().await {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

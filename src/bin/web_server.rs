use heap_dijkstra::web::server::{start_server_with_config, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let port = match args.get(1) {
        Some(arg) => arg.parse().unwrap_or_else(|_| {
            log::warn!("Invalid port {:?}, falling back to 3005", arg);
            3005
        }),
        None => 3005,
    };

    let config = ServerConfig {
        port,
        ..Default::default()
    };

    println!("🔧 Starting Heap Dijkstra Web Server...");
    println!("⚙️  Configuration:");
    println!("   📡 Port: {}", config.port);
    println!("   🌐 CORS enabled: {}", config.enable_cors);
    println!("   👥 Max sessions: {}", config.max_sessions);
    println!();

    start_server_with_config(config).await?;

    Ok(())
}

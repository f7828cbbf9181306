mod app;
mod cli;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        eprintln!("\n--- Ledge crashed ---");
        eprintln!("Please report this issue at: https://github.com/titidatiti/ledge/issues");
        eprintln!("---------------------\n");
        default_hook(info);
    }));
}

fn main() {
    install_panic_hook();

    let args = cli::parse();

    let log_directive = args.log_level.as_deref().unwrap_or("ledge=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "ledge=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Ledge v{} starting...", env!("CARGO_PKG_VERSION"));

    let (config, first_run) = match &args.config {
        Some(path) => {
            tracing::info!("Using config override: {path}");
            match ledge_config::load_from_path(std::path::Path::new(path)) {
                Ok(config) => (config, false),
                Err(e) => {
                    tracing::warn!("Config load failed, using defaults: {e}");
                    (ledge_config::DockConfig::default(), false)
                }
            }
        }
        None => ledge_config::load_config().unwrap_or_else(|e| {
            tracing::warn!("Config load failed, using defaults: {e}");
            (ledge_config::DockConfig::default(), false)
        }),
    };
    tracing::info!(
        pages = config.pages.len(),
        display = %config.display_id,
        "Config loaded"
    );

    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app::DockApp::new(config, first_run);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}

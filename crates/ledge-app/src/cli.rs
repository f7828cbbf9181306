use clap::Parser;

/// Ledge — an edge-triggered dock for embedded web pages.
#[derive(Parser, Debug)]
#[command(name = "ledge", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (e.g. "ledge=debug").
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

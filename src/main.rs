use std::io;

use anyhow::Result;
use clap::Parser;
use font_previewer::cli::{self, Cli};

fn main() -> Result<()> {
    // Parse arguments and read the config before logging init so the config
    // file's log_level can take part in level resolution.
    let cli = Cli::parse();
    let config = match cli::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("font-previewer: error: {e:#}");
            std::process::exit(2);
        }
    };

    // CLI --log-level takes highest precedence, then RUST_LOG, then config.
    font_previewer::debug::init_log_bridge(cli.log_level, config.log_level);
    log::info!("Starting font-previewer");

    let command = cli.command.unwrap_or_default();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = cli::execute(command, &config, &mut out);
    log::logger().flush();

    if let Err(e) = result {
        eprintln!("font-previewer: error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

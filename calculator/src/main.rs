use std::io::{stdin, stdout};

use console::{init_tracing, Config};

fn main() {
    let config = Config::load_or_default();
    init_tracing(&config.logging.level);

    tracing::info!(max_attempts = ?config.input.attempt_limit(), "starting calculator");

    let stdin = stdin();
    let stdout = stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    match calculator::run(&config, &mut input, &mut output) {
        Ok(report) => tracing::info!(?report, "done"),
        Err(e) => {
            tracing::error!("calculator failed: {}", e);
            eprintln!("\nError: {}", e);
            std::process::exit(1);
        }
    }
}

use std::io::{stdin, stdout};

use console::{init_tracing, Config};

fn main() {
    let config = Config::load_or_default();
    init_tracing(&config.logging.level);

    tracing::info!("starting loop drills");

    let stdin = stdin();
    let stdout = stdout();
    if let Err(e) = loops::run(&mut stdin.lock(), &mut stdout.lock()) {
        tracing::error!("loop drills failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

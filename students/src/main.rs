use std::io::stdout;

use console::{init_tracing, Config};

fn main() {
    let config = Config::load_or_default();
    init_tracing(&config.logging.level);

    let records = students::roster();
    tracing::info!("displaying {} student records", records.len());

    let stdout = stdout();
    if let Err(e) = students::show_all(&records, &mut stdout.lock()) {
        tracing::error!("failed to display students: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

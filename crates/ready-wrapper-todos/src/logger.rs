//! Logging setup
//!
//! `RUST_LOG` may come from the environment or a `.env` file in the working
//! directory; without it, `info` and above are shown.

use env_logger::Env;

pub fn init() {
    // Load .env before the logger reads RUST_LOG
    let env_file = dotenvy::dotenv().ok();

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    match env_file {
        Some(path) => log::debug!("Loaded .env file from: {:?}", path),
        None => log::debug!(".env file not found, relying on environment variables"),
    }
}

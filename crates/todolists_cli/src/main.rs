//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `todolists_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use todolists_core::StoreConfig;

fn main() {
    println!("todolists_core version={}", todolists_core::core_version());

    match StoreConfig::from_env() {
        Ok(config) => println!("todolists_core backend={}", config.backend_name()),
        Err(message) => {
            eprintln!("invalid backend configuration: {message}");
            std::process::exit(1);
        }
    }
}

//! Decrypts the local signer keystore and prints its private key.
//!
//! Reads `KEYSTORE_PASSWORD` (required) and `KEYSTORE_PATH` (defaults to
//! `config/keys/local-signer.json`), from the environment or a `.env` file.
//! Exits with status 1 on any error.
//!
//! ```bash
//! cargo run --example keystore_decrypt
//! ```

use std::{env, process};

use eyre::{Result, WrapErr};
use relayer_sdk_tests::{config::KeystoreConfig, services::decrypt_keystore};

fn run() -> Result<()> {
    let cwd = env::current_dir().wrap_err("Failed to read working directory")?;
    println!("Current working directory: {}", cwd.display());

    let config = KeystoreConfig::from_env()?;
    let key = decrypt_keystore(&config.path, &config.password)
        .wrap_err_with(|| format!("Failed to decrypt {}", config.path.display()))?;

    println!("Address: {}", key.address);
    println!("Private Key: {}", key.private_key.as_str());
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        process::exit(1);
    }
}

/// Keystore read by the decrypt helper when `KEYSTORE_PATH` is not set.
pub const DEFAULT_KEYSTORE_PATH: &str = "config/keys/local-signer.json";

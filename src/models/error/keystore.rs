use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeystoreError {
    #[error("Keystore password is empty")]
    MissingPassword,

    #[error("Keystore file not found at path: {0}")]
    NotFound(String),

    #[error("Failed to decrypt keystore: {0}")]
    Decryption(String),
}

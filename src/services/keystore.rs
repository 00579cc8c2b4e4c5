//! Decryption of local Ethereum V3 keystore files.

use std::path::Path;

use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use log::debug;
use zeroize::Zeroizing;

use crate::models::KeystoreError;

/// Key material recovered from a keystore file.
pub struct DecryptedKey {
    pub address: Address,
    /// `0x`-prefixed, 64 hex characters.
    pub private_key: Zeroizing<String>,
}

impl std::fmt::Debug for DecryptedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecryptedKey")
            .field("address", &self.address)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Decrypts the keystore at `path` with `password`.
///
/// The password is checked before the file is touched.
pub fn decrypt_keystore(
    path: impl AsRef<Path>,
    password: &str,
) -> Result<DecryptedKey, KeystoreError> {
    if password.is_empty() {
        return Err(KeystoreError::MissingPassword);
    }

    let path = path.as_ref();
    if !path.is_file() {
        return Err(KeystoreError::NotFound(path.display().to_string()));
    }

    let signer = PrivateKeySigner::decrypt_keystore(path, password)
        .map_err(|e| KeystoreError::Decryption(e.to_string()))?;

    debug!("Decrypted keystore for address {}", signer.address());

    let key_bytes = Zeroizing::new(signer.credential().to_bytes().to_vec());
    Ok(DecryptedKey {
        address: signer.address(),
        private_key: Zeroizing::new(format!("0x{}", hex::encode(key_bytes.as_slice()))),
    })
}

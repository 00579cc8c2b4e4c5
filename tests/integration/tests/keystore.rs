//! Local keystore decryption.

use relayer_sdk_tests::config::KeystoreConfig;
use relayer_sdk_tests::services::decrypt_keystore;
use serial_test::serial;
use tracing::info;

#[test]
#[serial]
#[ignore = "Requires KEYSTORE_PASSWORD and a local keystore"]
fn test_decrypt_configured_keystore() {
    let config = KeystoreConfig::from_env().expect("KEYSTORE_PASSWORD must be set");

    let key = decrypt_keystore(&config.path, &config.password).expect("Failed to decrypt keystore");

    assert!(key.private_key.starts_with("0x"));
    assert_eq!(key.private_key.len(), 66);
    info!(address = %key.address, "Decrypted keystore");
}

#[test]
fn test_decrypt_fixture_with_wrong_password_fails() {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/keystore/local-signer.json"
    );

    assert!(decrypt_keystore(path, "not the password").is_err());
}

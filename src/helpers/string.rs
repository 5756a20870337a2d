//! String manipulation and cryptography utilities.
//!
//! This module provides utility functions for:
//! - AES-256-GCM encryption and decryption for the stored backend API token
//! - Base64 encoding/decoding for storage and transport
//! - Filename normalization used by the client-side library search filter

use crate::error::Error;
use aes_gcm::{
    Aes256Gcm,
    aead::{Aead, AeadCore, KeyInit, Nonce, OsRng},
};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

type Result<T, E = Error> = std::result::Result<T, E>;

/// Master encryption key for AES-256-GCM cipher.
///
/// WARNING: In production, this should be stored securely (e.g., keychain, env var)
/// rather than hardcoded in the binary.
const MASTER_KEY: &[u8; 32] = b"TchGuiTokenKey2026CyenxToolsTeam";

/// Encrypts a plaintext string using AES-256-GCM encryption.
///
/// The encrypted data is encoded as Base64 for easy storage and transport.
/// Each encryption uses a randomly generated nonce.
///
/// # Storage Format
/// The output Base64 string contains: `[nonce (12 bytes)][ciphertext (variable)]`
pub fn encrypt(plain_text: &str) -> Result<String> {
    let cipher = Aes256Gcm::new(MASTER_KEY.into());

    // Random 96-bit nonce, generated per encryption
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plain_text.as_bytes())
        .map_err(|e| Error::Crypto {
            message: format!("Encryption failed: {e}"),
        })?;

    // Combine nonce and ciphertext for storage
    let mut combined = nonce.to_vec();
    combined.extend_from_slice(&ciphertext);

    Ok(BASE64.encode(combined))
}

/// Decrypts a Base64-encoded ciphertext encrypted with AES-256-GCM.
///
/// Expects the input to be in the format produced by `encrypt()`:
/// `[nonce (12 bytes)][ciphertext (variable)]` encoded as Base64.
pub fn decrypt(cipher_text: &str) -> Result<String> {
    let data = BASE64.decode(cipher_text).map_err(|e| Error::Crypto {
        message: format!("Base64 decode failed: {e}"),
    })?;

    // Nonce is 12 bytes
    if data.len() < 12 {
        return Err(Error::Crypto {
            message: "Ciphertext too short".to_string(),
        });
    }

    let cipher = Aes256Gcm::new(MASTER_KEY.into());

    let nonce_bytes = &data[0..12];
    let nonce = Nonce::<Aes256Gcm>::from_slice(nonce_bytes);
    let ciphertext = &data[12..];

    let plaintext_bytes = cipher.decrypt(nonce, ciphertext).map_err(|e| Error::Crypto {
        message: format!("Decryption failed: {e}"),
    })?;

    String::from_utf8(plaintext_bytes).map_err(|e| Error::Crypto {
        message: format!("UTF-8 decode failed: {e}"),
    })
}

/// Fold a filename or series name for search comparison.
///
/// Lowercases, maps German umlauts to their ASCII digraphs and replaces
/// underscores with spaces so that "Die_Schule" matches "die schule" and
/// "Hörspiel" matches "hoerspiel".
pub fn fold_for_search(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            'ä' | 'Ä' => out.push_str("ae"),
            'ö' | 'Ö' => out.push_str("oe"),
            'ü' | 'Ü' => out.push_str("ue"),
            'ß' => out.push_str("ss"),
            '_' => out.push(' '),
            _ => {
                for lower in ch.to_lowercase() {
                    out.push(lower);
                }
            }
        }
    }
    out
}

/// Check whether `haystack` contains `needle` after search folding.
pub fn matches_search(haystack: &str, needle: &str) -> bool {
    if needle.trim().is_empty() {
        return true;
    }
    fold_for_search(haystack).contains(&fold_for_search(needle.trim()))
}

/// Format a byte size for table display (e.g. "12.3 MB")
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let bytes = bytes as f64;
    if bytes >= GB {
        format!("{:.1} GB", bytes / GB)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes / MB)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes / KB)
    } else {
        format!("{bytes:.0} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_decrypt() {
        let original = "my_backend_token";
        let encrypted = encrypt(original).expect("Encryption failed");
        let decrypted = decrypt(&encrypted).expect("Decryption failed");
        assert_eq!(original, decrypted);
    }

    #[test]
    fn test_encrypt_produces_different_ciphertext() {
        let original = "test";
        let encrypted1 = encrypt(original).expect("Encryption failed");
        let encrypted2 = encrypt(original).expect("Encryption failed");
        // Due to random nonce, ciphertexts should be different
        assert_ne!(encrypted1, encrypted2);
    }

    #[test]
    fn test_decrypt_invalid_base64() {
        let result = decrypt("not_valid_base64!!!");
        assert!(result.is_err());
    }

    #[test]
    fn test_decrypt_too_short() {
        let result = decrypt("AQIDBA=="); // Only 4 bytes
        assert!(result.is_err());
    }

    #[test]
    fn test_fold_umlauts_and_underscores() {
        assert_eq!(fold_for_search("Hörspiel"), "hoerspiel");
        assert_eq!(fold_for_search("Die_Schule"), "die schule");
    }

    #[test]
    fn test_matches_search() {
        assert!(matches_search(
            "Die_Schule_der_magischen_Tiere_-_Folge_01.taf",
            "schule der magischen"
        ));
        assert!(matches_search("Bibi_und_Tina.taf", "BIBI"));
        assert!(!matches_search("Bibi_und_Tina.taf", "benjamin"));
        // Empty needle matches everything
        assert!(matches_search("anything.taf", "  "));
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
    }
}

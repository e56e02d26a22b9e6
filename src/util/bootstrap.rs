use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::errors::{decode_error, ConfigError};

/// Formats the bootstrap options handed to the Jenkins launcher: the admin
/// password plus the fixed admin role grant. The single space between the
/// two flags is part of the contract.
pub fn options_string(password: &str) -> String {
    format!(
        "--argumentsRealm.passwd.jenkins={} --argumentsRealm.roles.jenkins=admin",
        password
    )
}

/// Standard padded base64 of the options string, exactly as it appears in
/// the secret's `data.options`.
pub fn encode_options(password: &str) -> String {
    STANDARD.encode(options_string(password))
}

/// Decodes a `data.options` value back into the options string.
pub fn decode_options(encoded: &str) -> Result<String, ConfigError> {
    let bytes = STANDARD.decode(encoded).map_err(decode_error)?;
    String::from_utf8(bytes).map_err(decode_error)
}

/* ---------------- Tests ---------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_string_format() {
        assert_eq!(
            options_string("pw1"),
            "--argumentsRealm.passwd.jenkins=pw1 --argumentsRealm.roles.jenkins=admin"
        );
    }

    #[test]
    fn test_options_string_allows_empty_password() {
        // Presence is checked at the boundary; emptiness is the caller's call.
        assert_eq!(
            options_string(""),
            "--argumentsRealm.passwd.jenkins= --argumentsRealm.roles.jenkins=admin"
        );
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let encoded = encode_options("s3cr3t");
        let decoded = decode_options(&encoded).unwrap();
        assert_eq!(decoded, options_string("s3cr3t"));
    }

    #[test]
    fn test_encoded_options_known_value() {
        // base64("--argumentsRealm.passwd.jenkins=pw1 --argumentsRealm.roles.jenkins=admin")
        assert_eq!(
            encode_options("pw1"),
            "LS1hcmd1bWVudHNSZWFsbS5wYXNzd2QuamVua2lucz1wdzEgLS1hcmd1bWVudHNSZWFsbS5yb2xlcy5qZW5raW5zPWFkbWlu"
        );
    }

    #[test]
    fn test_decode_rejects_invalid_base64() {
        let result = decode_options("not-valid-base64!!!");
        assert!(matches!(result, Err(ConfigError::Decode(_))));
    }
}

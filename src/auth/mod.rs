//! Login credential check.
//!
//! Compares submitted credentials against the configured fixed pair using
//! constant-time comparison. This gates only the UI login screen; it is not
//! a security mechanism, and no data endpoint consults it.

use subtle::ConstantTimeEq;

use crate::config::Config;

/// Check a submitted username/password pair against the configured one.
pub fn verify_credentials(config: &Config, username: &str, password: &str) -> bool {
    let username_ok = constant_time_compare(username, &config.admin_username);
    let password_ok = constant_time_compare(password, &config.admin_password);

    // Bitwise AND so the password comparison always runs.
    username_ok & password_ok
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    // Constant-time comparison
    a_bytes.ct_eq(b_bytes).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            log_level: "warn".to_string(),
            admin_username: "admin".to_string(),
            admin_password: "password".to_string(),
            seed_demo_data: false,
        }
    }

    #[test]
    fn test_constant_time_compare_equal() {
        assert!(constant_time_compare("password", "password"));
    }

    #[test]
    fn test_constant_time_compare_not_equal() {
        assert!(!constant_time_compare("password", "passw0rd"));
    }

    #[test]
    fn test_constant_time_compare_different_lengths() {
        assert!(!constant_time_compare("short", "much-longer-secret"));
    }

    #[test]
    fn test_constant_time_compare_empty() {
        assert!(constant_time_compare("", ""));
        assert!(!constant_time_compare("", "not-empty"));
    }

    #[test]
    fn test_verify_credentials_accepts_configured_pair() {
        assert!(verify_credentials(&test_config(), "admin", "password"));
    }

    #[test]
    fn test_verify_credentials_rejects_wrong_password() {
        assert!(!verify_credentials(&test_config(), "admin", "wrong"));
    }

    #[test]
    fn test_verify_credentials_rejects_wrong_username() {
        assert!(!verify_credentials(&test_config(), "root", "password"));
    }

    #[test]
    fn test_verify_credentials_rejects_swapped_pair() {
        assert!(!verify_credentials(&test_config(), "password", "admin"));
    }
}

//! Configuration module for the student records backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Username accepted by the login check
    pub admin_username: String,
    /// Password accepted by the login check
    pub admin_password: String,
    /// Whether to load the demonstration dataset at startup
    pub seed_demo_data: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let bind_addr = env::var("STUDENTS_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid STUDENTS_BIND_ADDR format");

        let log_level = env::var("STUDENTS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let admin_username =
            env::var("STUDENTS_ADMIN_USER").unwrap_or_else(|_| "admin".to_string());
        let admin_password =
            env::var("STUDENTS_ADMIN_PASSWORD").unwrap_or_else(|_| "password".to_string());

        let seed_demo_data = env::var("STUDENTS_SEED_DEMO")
            .map(|value| seed_flag_enabled(&value))
            .unwrap_or(true);

        Self {
            bind_addr,
            log_level,
            admin_username,
            admin_password,
            seed_demo_data,
        }
    }
}

/// Interpret the seed flag: any value other than `"0"` or a case-insensitive
/// `"false"` enables seeding.
fn seed_flag_enabled(value: &str) -> bool {
    value != "0" && !value.eq_ignore_ascii_case("false")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("STUDENTS_BIND_ADDR");
        env::remove_var("STUDENTS_LOG_LEVEL");
        env::remove_var("STUDENTS_ADMIN_USER");
        env::remove_var("STUDENTS_ADMIN_PASSWORD");
        env::remove_var("STUDENTS_SEED_DEMO");

        let config = Config::from_env();

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.admin_username, "admin");
        assert_eq!(config.admin_password, "password");
        assert!(config.seed_demo_data);

        // Disabled seed flag through the env path. All env mutation stays in
        // this one test; tests in this binary run in parallel.
        env::set_var("STUDENTS_SEED_DEMO", "0");
        let config = Config::from_env();
        assert!(!config.seed_demo_data);
        env::remove_var("STUDENTS_SEED_DEMO");
    }

    #[test]
    fn test_seed_flag_values() {
        assert!(!seed_flag_enabled("0"));
        assert!(!seed_flag_enabled("false"));
        assert!(!seed_flag_enabled("FALSE"));
        assert!(!seed_flag_enabled("False"));
        assert!(seed_flag_enabled("true"));
        assert!(seed_flag_enabled("1"));
        assert!(seed_flag_enabled("yes"));
    }
}

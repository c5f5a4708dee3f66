//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default backend base URL
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Environment variable that overrides the configured base URL
pub const API_URL_ENV: &str = "ADMISSIONS_API_URL";

/// Endpoint returning an application with its results and documents
pub const REVIEW_APPLICATION_PATH: &str = "/api/admissions/review_application";

/// Account registration endpoint
pub const REGISTER_PATH: &str = "/api/accounts/register";

/// Default login endpoint used by the HTTP auth service
pub const DEFAULT_LOGIN_PATH: &str = "/api/accounts/login";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default log file name
pub const DEFAULT_LOG_FILE: &str = "admissions.log";

/// Name given to a subject that arrived as a bare id
pub const UNKNOWN_SUBJECT_NAME: &str = "???";

/// Minimum accepted password length at registration
pub const MIN_PASSWORD_LEN: usize = 8;

/// Terminal width under which nav links collapse into the drawer
pub const NARROW_WIDTH: u16 = 80;

/// Application name
pub const APP_NAME: &str = "Admissions";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

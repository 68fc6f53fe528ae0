//! Centralized string constants for the recotem CLI

// HTTP Headers
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_X_API_KEY: &str = "X-API-Key";
pub const HEADER_BEARER: &str = "Bearer";
pub const HEADER_TOKEN: &str = "Token";

// Config
pub const CONFIG_DIR_NAME: &str = ".recotem";
pub const CONFIG_FILE_NAME: &str = "config.yaml";
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";
pub const ENV_CONFIG_DIR: &str = "RECOTEM_CONFIG_DIR";

// REST
pub const API_PREFIX: &str = "/api/v1/";
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Assumed lifetime of a freshly issued access token.
pub const ACCESS_TOKEN_LIFETIME_SECS: i64 = 5 * 60;

/// Tokens closer than this to expiry are treated as already expired.
pub const TOKEN_EXPIRY_GRACE_SECS: i64 = 30;

/// Placeholder for absent values in text output.
pub const NO_VALUE: &str = "<NA>";

// Error hints
pub const ERR_FILE_NOT_FOUND: &str = "Check that the file path is correct and the file exists.";
pub const ERR_PERMISSION: &str = "Check file permissions or run with appropriate privileges.";
pub const ERR_CONNECTION: &str =
    "Check that the recotem server is running and that the url in config.yaml is correct.";
pub const ERR_TIMEOUT: &str = "The server may be slow or unresponsive. Try again later.";
pub const ERR_API_CREDENTIALS: &str = "Run 'recotem login' or pass a valid --api-key.";
pub const ERR_PERMISSION_DENIED: &str =
    "Your credentials may be valid but lack permission for this operation.";
pub const ERR_RESOURCE_NOT_FOUND: &str = "Check that the resource id is correct.";
pub const ERR_RATE_LIMITED: &str = "You're making requests too quickly. Wait before trying again.";
pub const ERR_SERVER_ERROR: &str = "The server is experiencing issues. Try again later.";
pub const ERR_YAML_SYNTAX: &str = "Check that config.yaml is valid YAML syntax.";
pub const ERR_JSON_SYNTAX: &str = "Check that your input file or the response contains valid JSON.";
pub const ERR_LOGIN_AGAIN: &str = "Run 'recotem login' to obtain new credentials.";
pub const ERR_HOME_DIR: &str = "Set RECOTEM_CONFIG_DIR to choose a configuration directory.";

//! Build-time configuration.
//!
//! Values can be overridden by setting the variables of the same name when
//! building the wasm bundle, e.g. `API_URL=https://example.com/api/v1 trunk build`.

use tracing::Level;

/// Base url of the REST API, without trailing slash.
pub const API_URL: &str = match option_env!("API_URL") {
    Some(url) => url,
    None => "http://localhost:8000/api/v1",
};

/// Origin that serves uploaded files. Upload responses are relative to it.
pub const API_ORIGIN: &str = match option_env!("API_ORIGIN") {
    Some(origin) => origin,
    None => "http://localhost:8000",
};

/// Browser storage key holding the admin bearer token.
pub const TOKEN_STORAGE_KEY: &str = "admin_token";

pub const LOG_LEVEL: Level = if cfg!(debug_assertions) {
    Level::DEBUG
} else {
    Level::INFO
};

//! HTTP server configuration.

/// Environment variable overriding the bind address.
pub const BIND_ADDR_ENV: &str = "WHACK_BIND_ADDR";

/// Address used when the environment does not provide one.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Resolve the address the HTTP server binds to.
pub fn bind_address() -> String {
    std::env::var(BIND_ADDR_ENV)
        .ok()
        .filter(|addr| !addr.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
}

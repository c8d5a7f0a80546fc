//! Names shared between the `OpenAPI` document, routers and configuration.

/// `OpenAPI` tag for operational endpoints.
pub const SYSTEM_TAG: &str = "System";
/// `OpenAPI` tag for the pricing catalog endpoints.
pub const PRICING_TAG: &str = "Pricing";

/// Prefix for environment variable overrides (`DH__SERVER__PORT`).
pub const ENV_PREFIX: &str = "DH";
/// Base configuration file looked up when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "server";

/// Path where the `OpenAPI` reference UI is mounted.
pub const API_DOCS_PATH: &str = "/api";

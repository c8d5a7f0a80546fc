//! Kernel utilities shared across slices.
//! Keep this crate lightweight: configuration loading plus the server plumbing
//! (state registry, error responses, health route) every feature builds on.
//!
//! ## Config loading
//! ```rust,no_run
//! use dh_kernel::config::load_config;
//! use dh_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(Some("server")).unwrap();
//! ```
pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

pub use dh_domain as domain;

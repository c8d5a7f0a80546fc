//! Facade crate for the Digital Helper service.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it composes other crates and implements no business logic.
//!
//! ## Usage
//! - Add `dh` with the `server` feature.
//! - Call [`init`] to build every feature slice, then mount [`server::router::api_router`].

pub use dh_domain as domain;
pub use dh_kernel as kernel;

use dh_kernel::domain::registry::InitializedSlice;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        use dh_kernel::server::ApiState;
        pub use dh_kernel::server::router::system_router;
        use utoipa_axum::router::OpenApiRouter;

        /// Every feature's documented routes, merged.
        pub fn api_router() -> OpenApiRouter<ApiState> {
            OpenApiRouter::new().merge(system_router()).merge(crate::features::pricing::router())
        }
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use dh_pricing as pricing;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        "pricing",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all feature slices.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init() -> Result<Vec<InitializedSlice>, Box<dyn std::error::Error + Send + Sync>> {
    let slices = vec![features::pricing::init()?];

    Ok(slices)
}

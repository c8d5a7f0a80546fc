//! Pricing feature slice.
//!
//! Serves the agency's package catalog. The catalog is built from static tier definitions
//! by [`resolve`], which copies the tiers and decides which one is highlighted from an
//! optional theme selector:
//!
//! * `"purple"` keeps each tier's static highlight flag;
//! * anything else, including no theme, highlights `professional` only.
//!
//! With the `server` feature the slice also exposes `GET`/`POST /api/pricing`.

mod catalog;
mod error;
#[cfg(feature = "server")]
mod handlers;

pub use crate::catalog::{
    CURRENCY, DISCLAIMER, PricingCatalog, PricingTier, RECOMMENDED_TIER, TIERS, Theme,
    TierDefinition, resolve, resolve_from,
};
pub use crate::error::PricingError;
#[cfg(feature = "server")]
pub use crate::handlers::{PricingRequest, router};

use crate::error::PricingErrorExt;
use dh_kernel::domain::registry::InitializedSlice;

/// Pricing feature state: the tier table the resolver reads from.
#[dh_derive::dh_slice]
pub struct Pricing {
    pub tiers: &'static [TierDefinition],
}

impl Pricing {
    /// Resolves this slice's tier table for a theme selector.
    #[must_use]
    pub fn resolve(&self, theme: Option<&str>) -> PricingCatalog {
        resolve_from(self.tiers, Theme::from_selector(theme))
    }
}

/// Initialize the pricing feature with the built-in tiers.
///
/// # Errors
/// Returns [`PricingError::InvalidTiers`] if the built-in table breaks a catalog invariant.
pub fn init() -> Result<InitializedSlice, PricingError> {
    init_with(&TIERS)
}

/// Initialize the pricing feature with a custom tier table.
///
/// # Errors
/// Returns [`PricingError::InvalidTiers`] if two tiers share an id or the
/// recommended tier is missing.
pub fn init_with(tiers: &'static [TierDefinition]) -> Result<InitializedSlice, PricingError> {
    validate_tiers(tiers).context("Validating tier table")?;

    tracing::info!(tiers = tiers.len(), "Pricing slice initialized");

    Ok(InitializedSlice::new(Pricing::new(PricingInner { tiers })))
}

fn validate_tiers(tiers: &[TierDefinition]) -> Result<(), PricingError> {
    for (i, tier) in tiers.iter().enumerate() {
        if tiers[..i].iter().any(|seen| seen.id == tier.id) {
            return Err(PricingError::InvalidTiers {
                message: format!("duplicate tier id '{}'", tier.id).into(),
                context: None,
            });
        }
    }

    if !tiers.iter().any(|tier| tier.id == RECOMMENDED_TIER) {
        return Err(PricingError::InvalidTiers {
            message: format!("recommended tier '{RECOMMENDED_TIER}' is missing").into(),
            context: None,
        });
    }

    Ok(())
}

//! Pricing catalog model and the theme-aware resolver.
//!
//! Tier definitions are compile-time constants. Every call to [`resolve`] copies them into
//! a new owned [`PricingCatalog`], so callers may mutate the result freely.

use dh_derive::api_model;

/// ISO 4217 code every price is expressed in.
pub const CURRENCY: &str = "USD";

/// Note shown under the tiers.
pub const DISCLAIMER: &str = "All prices are subject to change. Custom packages available.";

/// Tier highlighted by default, whatever its static flag says.
pub const RECOMMENDED_TIER: &str = "professional";

/// Static description of one package, as shipped with the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub price: u32,
    pub period: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    /// Absent in the source data means `false`.
    pub highlighted: bool,
}

impl TierDefinition {
    fn tier_with(&self, highlighted: bool) -> PricingTier {
        PricingTier {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            price: self.price,
            period: self.period.to_owned(),
            features: self.features.iter().map(|f| (*f).to_owned()).collect(),
            cta: self.cta.to_owned(),
            highlighted,
        }
    }
}

/// Display order of the catalog.
pub static TIERS: [TierDefinition; 3] = [
    TierDefinition {
        id: "starter",
        name: "Web Design",
        price: 1999,
        period: "one-time",
        features: &[
            "5-page responsive website",
            "Mobile-first design",
            "Basic SEO optimization",
            "Contact form integration",
            "30 days support",
        ],
        cta: "Get Started",
        highlighted: false,
    },
    TierDefinition {
        id: "professional",
        name: "Growth Package",
        price: 3999,
        period: "one-time",
        features: &[
            "Up to 10 pages",
            "Custom design & branding",
            "Advanced SEO optimization",
            "Google Business integration",
            "AI chatbot integration",
            "Analytics dashboard",
            "90 days support",
        ],
        cta: "Most Popular",
        highlighted: true,
    },
    TierDefinition {
        id: "enterprise",
        name: "AI Systems",
        price: 997,
        period: "month",
        features: &[
            "24/7 AI Sales Agent",
            "Automated Lead Gen",
            "CRM Integration",
            "Review Management",
            "Missed Call Text Back",
            "Weekly Performance Reports",
            "Dedicated Account Manager",
        ],
        cta: "Automate Now",
        highlighted: false,
    },
];

/// How a theme selector affects highlighting.
///
/// Only the literal `"purple"` differs from the default; no other theme has its own behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Highlight [`RECOMMENDED_TIER`] and nothing else.
    #[default]
    Default,
    /// Keep each tier's static highlight flag.
    Purple,
}

impl Theme {
    #[must_use]
    pub fn from_selector(selector: Option<&str>) -> Self {
        match selector {
            Some("purple") => Self::Purple,
            _ => Self::Default,
        }
    }

    fn highlight(self, tier: &TierDefinition) -> bool {
        match self {
            Self::Purple => tier.highlighted,
            Self::Default => tier.id == RECOMMENDED_TIER,
        }
    }
}

#[api_model]
/// One priced package
#[derive(Clone, PartialEq, Eq)]
pub struct PricingTier {
    /// Unique key within the catalog
    pub id: String,
    /// Display name
    pub name: String,
    /// Price in whole currency units
    pub price: u32,
    /// Billing period label, e.g. `one-time` or `month`
    pub period: String,
    /// Feature bullet points, in display order
    pub features: Vec<String>,
    /// Call-to-action label
    pub cta: String,
    /// Whether the tier is visually emphasized as the recommended choice
    pub highlighted: bool,
}

#[api_model]
/// Pricing catalog
#[derive(Clone, PartialEq, Eq)]
pub struct PricingCatalog {
    /// Tiers in display order
    pub tiers: Vec<PricingTier>,
    /// Currency code
    pub currency: String,
    /// Disclaimer shown under the tiers
    pub disclaimer: String,
}

impl PricingCatalog {
    #[must_use]
    pub fn tier(&self, id: &str) -> Option<&PricingTier> {
        self.tiers.iter().find(|tier| tier.id == id)
    }

    pub fn highlighted(&self) -> impl Iterator<Item = &PricingTier> {
        self.tiers.iter().filter(|tier| tier.highlighted)
    }
}

/// Builds the catalog for a theme selector. Total and side-effect free.
///
/// ```rust
/// use dh_pricing::resolve;
///
/// let catalog = resolve(None);
/// assert_eq!(catalog.currency, "USD");
/// assert!(catalog.tier("professional").is_some_and(|t| t.highlighted));
/// ```
#[must_use]
pub fn resolve(theme: Option<&str>) -> PricingCatalog {
    resolve_from(&TIERS, Theme::from_selector(theme))
}

/// Builds a catalog from arbitrary tier definitions.
#[must_use]
pub fn resolve_from(definitions: &[TierDefinition], theme: Theme) -> PricingCatalog {
    PricingCatalog {
        tiers: definitions.iter().map(|def| def.tier_with(theme.highlight(def))).collect(),
        currency: CURRENCY.to_owned(),
        disclaimer: DISCLAIMER.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_maps_only_purple() {
        assert_eq!(Theme::from_selector(None), Theme::Default);
        assert_eq!(Theme::from_selector(Some("purple")), Theme::Purple);
        assert_eq!(Theme::from_selector(Some("Purple")), Theme::Default);
        assert_eq!(Theme::from_selector(Some(" purple")), Theme::Default);
        assert_eq!(Theme::from_selector(Some("")), Theme::Default);
    }

    #[test]
    fn static_table_is_valid() {
        assert!(crate::init().is_ok());
    }

    #[test]
    fn default_theme_ignores_static_flags() {
        let defs = [
            TierDefinition { highlighted: true, ..TIERS[0] },
            TierDefinition { highlighted: false, ..TIERS[1] },
        ];

        let catalog = resolve_from(&defs, Theme::Default);
        assert!(!catalog.tiers[0].highlighted);
        assert!(catalog.tiers[1].highlighted);
    }

    #[test]
    fn purple_theme_keeps_static_flags() {
        let defs = [
            TierDefinition { highlighted: true, ..TIERS[0] },
            TierDefinition { highlighted: false, ..TIERS[1] },
        ];

        let catalog = resolve_from(&defs, Theme::Purple);
        assert!(catalog.tiers[0].highlighted);
        assert!(!catalog.tiers[1].highlighted);
    }
}

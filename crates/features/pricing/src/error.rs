use std::borrow::Cow;

/// Pricing slice error type.
#[dh_derive::dh_error]
pub enum PricingError {
    /// The tier table violates a catalog invariant (duplicate ids, missing recommended tier).
    #[error("Invalid tier table{}: {message}", format_context(.context))]
    InvalidTiers { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

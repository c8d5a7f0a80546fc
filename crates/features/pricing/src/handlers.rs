use crate::{Pricing, PricingCatalog};
use axum::Json;
use axum::extract::State;
use dh_derive::{api_handler, api_model};
use dh_domain::constants::PRICING_TAG;
use dh_kernel::server::{ApiError, ApiState, ErrorResponse, ValidJson};
use tracing::debug;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

#[api_model(deny_unknown_fields = false)]
/// Catalog request
pub struct PricingRequest {
    /// Theme selector. Only `purple` changes which tiers are highlighted.
    #[serde(default)]
    pub theme: Option<String>,
}

fn pricing(state: &ApiState) -> Result<&Pricing, ApiError> {
    state.try_get_slice::<Pricing>().map_err(|e| ApiError::from(e.to_string()))
}

#[api_handler(
    get,
    path = "/api/pricing",
    responses((status = OK, description = "Catalog for the default theme", body = PricingCatalog)),
    tag = PRICING_TAG,
)]
pub(crate) async fn get_pricing(
    State(state): State<ApiState>,
) -> Result<Json<PricingCatalog>, ApiError> {
    Ok(Json(pricing(&state)?.resolve(None)))
}

#[api_handler(
    post,
    path = "/api/pricing",
    request_body = PricingRequest,
    responses(
        (status = OK, description = "Catalog for the requested theme", body = PricingCatalog),
        (status = BAD_REQUEST, description = "Malformed request body", body = ErrorResponse),
    ),
    tag = PRICING_TAG,
)]
pub(crate) async fn post_pricing(
    State(state): State<ApiState>,
    ValidJson(request): ValidJson<PricingRequest>,
) -> Result<Json<PricingCatalog>, ApiError> {
    debug!(theme = ?request.theme, "Resolving pricing catalog");
    Ok(Json(pricing(&state)?.resolve(request.theme.as_deref())))
}

/// Routes for `/api/pricing`.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(get_pricing, post_pricing))
}

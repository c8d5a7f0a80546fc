#![cfg(feature = "server")]

use dh_kernel::domain::config::ApiConfig;
use dh_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use dh_kernel::server::{ApiState, ApiStateError};
use std::any::Any;

#[derive(Debug)]
struct Catalog {
    label: &'static str,
}

impl FeatureSlice for Catalog {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug)]
struct Unregistered;

impl FeatureSlice for Unregistered {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn build_requires_config() {
    let err = ApiState::builder().build().expect_err("config is mandatory");
    assert!(matches!(err, ApiStateError::Validation { .. }));
}

#[test]
fn registered_slices_are_retrievable() {
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .register_slices([InitializedSlice::new(Catalog { label: "pricing" })])
        .build()
        .expect("state");

    assert_eq!(state.get_slice::<Catalog>().map(|c| c.label), Some("pricing"));
    assert_eq!(state.slice_names().count(), 1);
}

#[test]
fn missing_slice_is_reported_by_type_name() {
    let state = ApiState::builder().config(ApiConfig::default()).build().expect("state");

    let err = state.try_get_slice::<Unregistered>().expect_err("not registered");
    assert!(err.to_string().contains("Unregistered"));
}

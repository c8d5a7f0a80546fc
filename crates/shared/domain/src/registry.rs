//! Type-erased registry entries for feature slices.
//!
//! Feature crates build their state once at startup and hand it to the server as an
//! [`InitializedSlice`]; handlers later recover the concrete type by downcasting.

use std::any::{Any, TypeId, type_name};
use std::fmt::Debug;

/// Shared, thread-safe state owned by one feature crate.
pub trait FeatureSlice: Any + Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

/// A feature slice ready to be registered, keyed by its concrete type.
#[derive(Debug)]
pub struct InitializedSlice {
    pub id: TypeId,
    pub name: &'static str,
    pub state: Box<dyn FeatureSlice>,
}

impl InitializedSlice {
    pub fn new<T: FeatureSlice>(state: T) -> Self {
        Self { id: TypeId::of::<T>(), name: type_name::<T>(), state: Box::new(state) }
    }

    /// Returns the state as `T` when this entry was created from a `T`.
    #[must_use]
    pub fn downcast_ref<T: FeatureSlice>(&self) -> Option<&T> {
        self.state.as_any().downcast_ref::<T>()
    }
}

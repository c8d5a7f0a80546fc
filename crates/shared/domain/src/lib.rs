//! # Domain Models
//!
//! Plain data shared by every crate: configuration shapes, API constants and the
//! feature slice registry. Depends on `serde` only; no I/O or business logic lives here.

pub mod config;
pub mod constants;
pub mod registry;

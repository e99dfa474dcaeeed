//! Spec layer: deserialized OpenAPI document + lookup facade.
//!
//! Reference resolution happens upstream; this layer loads an already
//! dereferenced document and serves (path, method) lookups.

pub mod openapi;

pub use openapi::{OperationDescriptor, ResolvedSpec, SpecInfo};

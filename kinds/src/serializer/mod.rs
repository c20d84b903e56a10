//! JSON support for registries and values.
//!
//! - [`json::registry_to_json`] dumps the descriptors of a registry as a
//!   catalog document.
//! - [`json::value_from_json`] decodes a JSON document into a [`crate::Value`],
//!   instantiating registered types named by an `@type` key.

pub mod json;

//! Typed boundary to the external numerics engine.
//!
//! The selection core never touches the engine's transport; it only sees
//! the structured values defined here. This crate provides:
//! - [`NumericsEngine`] - the four-call engine contract
//! - [`PropertyMap`] - structured material payloads (no text parsing)
//! - [`CatalogEngine`] - a local reference implementation backed by a
//!   [`matsel_core::MaterialCatalog`]

pub mod catalog_engine;
pub mod client;
pub mod properties;

pub use catalog_engine::CatalogEngine;
pub use client::{DropResult, EngineError, Identification, NumericsEngine};
pub use properties::{record_from_properties, PropertyMap, PropertyValue};

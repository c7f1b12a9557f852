//! Foundation types for the veneer theme engine.
//!
//! This crate contains the platform-agnostic core types shared by all veneer
//! crates: entity identifiers, asset classes, user-facing display settings,
//! and error types.

pub mod entity;
pub mod error;
pub mod settings;

pub use entity::{AssetClass, EntityId};
pub use error::{Result, VeneerError};
pub use settings::{
    AspectRatio, ColorScheme, Distribution, MediaType, MetadataSource, RawSettings,
};

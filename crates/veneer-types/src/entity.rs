//! Entity identifiers and asset classes.
//!
//! An entity is a system (e.g. `snes`) or a collection (e.g. `favorites`)
//! displayable by the launcher. Its id doubles as the stable file stem for
//! every asset the theme ships for it.

use std::fmt;

use serde::Deserialize;

/// Opaque identifier for a system or collection.
///
/// The id is the theme id: asset files are named `{id}.{ext}` (plus an
/// optional locale suffix for logos). Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// The kind of asset being requested. Fixed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetClass {
    /// Full-screen background art.
    Background,
    /// Transparent decoration layered above the background.
    Overlay,
    /// System/collection wordmark.
    Logo,
}

impl AssetClass {
    /// Directory under a storage root holding this class of asset.
    pub fn subdir(self) -> &'static str {
        match self {
            AssetClass::Background => "backgrounds",
            AssetClass::Overlay => "overlays",
            AssetClass::Logo => "logos",
        }
    }

    /// File extensions to probe, in precedence order.
    ///
    /// Backgrounds and overlays prefer the newer raster format; logos prefer
    /// the vector wordmark and fall back to the legacy raster one.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            AssetClass::Background | AssetClass::Overlay => &["webp", "png"],
            AssetClass::Logo => &["svg", "webp"],
        }
    }

    /// Whether locale-specific file variants exist for this class.
    ///
    /// Only logos carry translated variants; backgrounds and overlays are
    /// locale-agnostic.
    pub fn localized(self) -> bool {
        matches!(self, AssetClass::Logo)
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AssetClass::Background => "background",
            AssetClass::Overlay => "overlay",
            AssetClass::Logo => "logo",
        };
        f.write_str(name)
    }
}

//! Layered asset and configuration resolution for the veneer theme.
//!
//! Given a target entity (a system or collection), the active locale, and
//! the user's display options, the engine deterministically picks which
//! concrete asset file or metadata value to render. It walks a fixed
//! precedence chain: user customization layer before the builtin theme
//! layer, locale-specific variants before locale-agnostic ones (logos
//! only), and newer/vector formats before legacy rasters.
//!
//! Rendering, decoding, and layout belong to the host application; this
//! crate only decides *which* path or value wins.

pub mod cache;
pub mod candidates;
pub mod engine;
pub mod locale;
pub mod metadata;
pub mod profile;
pub mod resolver;
pub mod strings;

pub use cache::{CacheKey, ResolutionCache};
pub use candidates::{
    AssetRequest, Candidate, Candidates, OVERLAY_PLACEHOLDER, RootKind, StorageRoot, StorageRoots,
    candidates,
};
pub use engine::{DEFAULT_CACHE_CAPACITY, ThemeEngine};
pub use locale::{LocaleChain, LocaleTag};
pub use metadata::{EntityMetadata, MetadataField, merge_field};
pub use profile::{DisplayProfile, RejectedSetting};
pub use resolver::{DEFAULT_LOGO_FONT, Resolution, ResolvedFile, TextLogo, resolve};
pub use strings::StringCatalog;

//! Candidate path enumeration.
//!
//! For one asset request this module produces the ordered, finite list of
//! file paths worth probing, without touching storage. Ordering is fixed:
//! storage roots by precedence rank (customization before builtin), then the
//! locale chain from most to least specific (logos only), then file
//! extensions (vector/newer format before legacy). Decoupling enumeration
//! from existence probing keeps both independently testable.

use veneer_types::entity::{AssetClass, EntityId};
use veneer_types::settings::Distribution;

use crate::locale::{LocaleChain, LocaleTag};

/// Terminal overlay candidate: a fully transparent placeholder shipped with
/// the builtin set. The leading underscore marks theme-internal files.
pub const OVERLAY_PLACEHOLDER: &str = "overlays/_blank.png";

/// Which storage layer a path belongs to. Rank is fixed and total:
/// customization always outranks builtin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootKind {
    /// User-writable customization layer (rank 0).
    Customization,
    /// Theme-shipped builtin layer (rank 1), guaranteed complete.
    Builtin,
}

impl RootKind {
    pub fn rank(self) -> u8 {
        match self {
            RootKind::Customization => 0,
            RootKind::Builtin => 1,
        }
    }
}

/// One configured storage root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageRoot {
    pub kind: RootKind,
    pub path: String,
}

/// The two-layer storage configuration. Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageRoots {
    customization: Option<StorageRoot>,
    builtin: StorageRoot,
}

impl StorageRoots {
    /// Derive roots from the builtin path and the active distribution's
    /// customization path convention.
    pub fn new(builtin: impl Into<String>, distribution: Distribution) -> Self {
        let customization = distribution.customization_root().map(|path| StorageRoot {
            kind: RootKind::Customization,
            path: path.to_string(),
        });
        if customization.is_none() {
            log::debug!("no customization root for {distribution:?}; builtin only");
        }
        Self {
            customization,
            builtin: StorageRoot {
                kind: RootKind::Builtin,
                path: builtin.into(),
            },
        }
    }

    /// Explicit customization root, bypassing the distribution table.
    pub fn with_customization(builtin: impl Into<String>, customization: impl Into<String>) -> Self {
        Self {
            customization: Some(StorageRoot {
                kind: RootKind::Customization,
                path: customization.into(),
            }),
            builtin: StorageRoot {
                kind: RootKind::Builtin,
                path: builtin.into(),
            },
        }
    }

    pub fn builtin(&self) -> &StorageRoot {
        &self.builtin
    }

    pub fn customization(&self) -> Option<&StorageRoot> {
        self.customization.as_ref()
    }

    /// Roots in precedence order.
    pub fn iter(&self) -> impl Iterator<Item = &StorageRoot> {
        self.customization.iter().chain(std::iter::once(&self.builtin))
    }
}

/// One asset lookup. Value object, constructed per lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetRequest {
    pub entity: EntityId,
    pub class: AssetClass,
    /// Display name used only for the synthesized text-logo fallback.
    pub label: Option<String>,
    /// Per-request locale override; `None` uses the session chain.
    pub locale: Option<LocaleTag>,
}

impl AssetRequest {
    pub fn new(entity: impl Into<EntityId>, class: AssetClass) -> Self {
        Self {
            entity: entity.into(),
            class,
            label: None,
            locale: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_locale(mut self, locale: LocaleTag) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Label to render when a logo falls back to synthesized text.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or_else(|| self.entity.as_str())
    }
}

/// A single path worth probing, tagged with the layer it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub root: RootKind,
    pub path: String,
}

/// Lazy, finite, restartable candidate sequence for one request.
///
/// Nothing is probed here; each `next()` only builds a path string, so a
/// consumer that stops at the first storage hit never pays for the
/// lower-precedence candidates. Re-create (or clone) the iterator to
/// restart.
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    request: &'a AssetRequest,
    roots: Vec<&'a StorageRoot>,
    /// Locale file-name suffixes, most specific first, ending with `""`.
    /// A single empty suffix for locale-agnostic classes.
    suffixes: Vec<String>,
    extensions: &'static [&'static str],
    root_idx: usize,
    suffix_idx: usize,
    ext_idx: usize,
    placeholder_done: bool,
}

/// Enumerate candidates for `request` against `roots`, using `chain` for
/// locale-qualified variants (logos). The per-request locale override, when
/// present, replaces the session chain.
pub fn candidates<'a>(
    request: &'a AssetRequest,
    roots: &'a StorageRoots,
    chain: &LocaleChain,
) -> Candidates<'a> {
    let suffixes = if request.class.localized() {
        match &request.locale {
            Some(tag) => LocaleChain::from_tag(tag.clone()).suffixes().collect(),
            None => chain.suffixes().collect(),
        }
    } else {
        // Backgrounds and overlays skip locale entirely.
        vec![String::new()]
    };
    Candidates {
        request,
        roots: roots.iter().collect(),
        suffixes,
        extensions: request.class.extensions(),
        root_idx: 0,
        suffix_idx: 0,
        ext_idx: 0,
        placeholder_done: false,
    }
}

impl Iterator for Candidates<'_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        if self.root_idx >= self.roots.len() {
            // Overlays terminate in the builtin transparent placeholder.
            if self.request.class == AssetClass::Overlay && !self.placeholder_done {
                self.placeholder_done = true;
                let builtin = self.roots.last()?;
                return Some(Candidate {
                    root: builtin.kind,
                    path: format!("{}/{}", builtin.path, OVERLAY_PLACEHOLDER),
                });
            }
            return None;
        }

        let root = self.roots[self.root_idx];
        let suffix = &self.suffixes[self.suffix_idx];
        let ext = self.extensions[self.ext_idx];
        let candidate = Candidate {
            root: root.kind,
            path: format!(
                "{}/{}/{}{}.{}",
                root.path,
                self.request.class.subdir(),
                self.request.entity,
                suffix,
                ext
            ),
        };

        // Advance: extension innermost, then locale step, then root.
        self.ext_idx += 1;
        if self.ext_idx >= self.extensions.len() {
            self.ext_idx = 0;
            self.suffix_idx += 1;
            if self.suffix_idx >= self.suffixes.len() {
                self.suffix_idx = 0;
                self.root_idx += 1;
            }
        }

        Some(candidate)
    }
}

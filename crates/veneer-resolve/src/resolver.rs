//! First-match asset resolution.
//!
//! Consumes the candidate sequence strictly in order, probing one existence
//! check per candidate, and stops at the first hit. Exhaustion is fatal for
//! backgrounds and overlays (the builtin set guarantees coverage, so running
//! out means the installation is corrupt) and terminal-normal for logos,
//! which fall back to a synthesized text wordmark.

use veneer_types::entity::AssetClass;
use veneer_types::error::{Result, VeneerError};
use veneer_vfs::Vfs;

use crate::candidates::{AssetRequest, RootKind, StorageRoots, candidates};
use crate::locale::LocaleChain;

/// Font used for the synthesized text logo, relative to the builtin root.
/// Shipped with the theme, guaranteed present.
pub const DEFAULT_LOGO_FONT: &str = "fonts/Exo2-SemiBold.otf";

/// A resolved asset file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    /// Path of the winning candidate.
    pub path: String,
    /// Layer the file was found in.
    pub root: RootKind,
    /// `true` when no user override existed and the builtin layer supplied
    /// the file.
    pub used_fallback: bool,
}

/// Terminal logo fallback: render `label` as text in the theme's default
/// font. Always available, never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLogo {
    pub label: String,
    /// Font path relative to the builtin root.
    pub font: String,
}

/// Outcome of one asset resolution. Never partially populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    File(ResolvedFile),
    TextLogo(TextLogo),
}

impl Resolution {
    /// The winning file path, when resolution produced a file.
    pub fn path(&self) -> Option<&str> {
        match self {
            Resolution::File(file) => Some(&file.path),
            Resolution::TextLogo(_) => None,
        }
    }
}

/// Resolve one asset request against storage.
///
/// Pure given (request, chain, roots, storage existence): identical inputs
/// and unchanged storage always yield an identical resolution.
pub fn resolve<V: Vfs>(
    vfs: &V,
    request: &AssetRequest,
    roots: &StorageRoots,
    chain: &LocaleChain,
) -> Result<Resolution> {
    for candidate in candidates(request, roots, chain) {
        if vfs.exists(&candidate.path) {
            log::debug!(
                "{} '{}' resolved to {} ({:?})",
                request.class,
                request.entity,
                candidate.path,
                candidate.root
            );
            return Ok(Resolution::File(ResolvedFile {
                path: candidate.path,
                used_fallback: candidate.root == RootKind::Builtin,
                root: candidate.root,
            }));
        }
    }

    match request.class {
        // Logo absence is terminal-normal: the caller renders the entity's
        // display name in the default font instead of an image.
        AssetClass::Logo => {
            log::debug!(
                "logo '{}' has no file in any root; using text fallback",
                request.entity
            );
            Ok(Resolution::TextLogo(TextLogo {
                label: request.display_label().to_string(),
                font: DEFAULT_LOGO_FONT.to_string(),
            }))
        },
        // Builtin coverage is guaranteed for these classes, so exhaustion
        // means the installed asset set is corrupt or incomplete.
        AssetClass::Background | AssetClass::Overlay => {
            let message = format!(
                "builtin {} missing for '{}' (checked all roots)",
                request.class, request.entity
            );
            log::error!("{message}");
            Err(VeneerError::Config(message))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_vfs::MemoryVfs;

    fn roots() -> StorageRoots {
        StorageRoots::with_customization("/theme", "/custom")
    }

    #[test]
    fn customization_beats_builtin_for_same_candidate() {
        let mut vfs = MemoryVfs::new();
        vfs.touch("/custom/backgrounds/snes.webp");
        vfs.touch("/theme/backgrounds/snes.webp");

        let request = AssetRequest::new("snes", AssetClass::Background);
        let got = resolve(&vfs, &request, &roots(), &LocaleChain::agnostic()).unwrap();
        assert_eq!(
            got,
            Resolution::File(ResolvedFile {
                path: "/custom/backgrounds/snes.webp".into(),
                root: RootKind::Customization,
                used_fallback: false,
            })
        );
    }

    #[test]
    fn builtin_hit_is_flagged_as_fallback() {
        let mut vfs = MemoryVfs::new();
        vfs.touch("/theme/backgrounds/snes.webp");

        let request = AssetRequest::new("snes", AssetClass::Background);
        let got = resolve(&vfs, &request, &roots(), &LocaleChain::agnostic()).unwrap();
        let Resolution::File(file) = got else {
            panic!("expected a file");
        };
        assert!(file.used_fallback);
        assert_eq!(file.root, RootKind::Builtin);
    }

    #[test]
    fn webp_beats_png_for_backgrounds() {
        let mut vfs = MemoryVfs::new();
        vfs.touch("/theme/backgrounds/snes.webp");
        vfs.touch("/theme/backgrounds/snes.png");

        let request = AssetRequest::new("snes", AssetClass::Background);
        let got = resolve(&vfs, &request, &roots(), &LocaleChain::agnostic()).unwrap();
        assert_eq!(got.path(), Some("/theme/backgrounds/snes.webp"));
    }

    #[test]
    fn partial_locale_match_beats_base_logo() {
        // Only {id}-es exists: chosen over {id} for an es-MX session.
        let mut vfs = MemoryVfs::new();
        vfs.touch("/theme/logos/snes-es.svg");
        vfs.touch("/theme/logos/snes.svg");

        let request = AssetRequest::new("snes", AssetClass::Logo);
        let chain = LocaleChain::parse(Some("es-MX"));
        let got = resolve(&vfs, &request, &roots(), &chain).unwrap();
        assert_eq!(got.path(), Some("/theme/logos/snes-es.svg"));
    }

    #[test]
    fn missing_logo_synthesizes_text() {
        let vfs = MemoryVfs::new();
        let request = AssetRequest::new("snes", AssetClass::Logo).with_label("Super Nintendo");
        let got = resolve(&vfs, &request, &roots(), &LocaleChain::agnostic()).unwrap();
        assert_eq!(
            got,
            Resolution::TextLogo(TextLogo {
                label: "Super Nintendo".into(),
                font: DEFAULT_LOGO_FONT.into(),
            })
        );
    }

    #[test]
    fn missing_overlay_uses_transparent_placeholder() {
        let mut vfs = MemoryVfs::new();
        vfs.touch("/theme/overlays/_blank.png");

        let request = AssetRequest::new("virtualboy", AssetClass::Overlay);
        let got = resolve(&vfs, &request, &roots(), &LocaleChain::agnostic()).unwrap();
        assert_eq!(got.path(), Some("/theme/overlays/_blank.png"));
    }

    #[test]
    fn missing_background_is_config_error() {
        let vfs = MemoryVfs::new();
        let request = AssetRequest::new("snes", AssetClass::Background);
        let err = resolve(&vfs, &request, &roots(), &LocaleChain::agnostic()).unwrap_err();
        assert!(matches!(err, VeneerError::Config(_)));
        assert!(format!("{err}").contains("snes"));
    }

    #[test]
    fn missing_overlay_and_placeholder_is_config_error() {
        let vfs = MemoryVfs::new();
        let request = AssetRequest::new("snes", AssetClass::Overlay);
        assert!(matches!(
            resolve(&vfs, &request, &roots(), &LocaleChain::agnostic()),
            Err(VeneerError::Config(_))
        ));
    }

    #[test]
    fn resolution_is_idempotent() {
        let mut vfs = MemoryVfs::new();
        vfs.touch("/theme/logos/snes-es.svg");
        vfs.touch("/custom/logos/snes.webp");

        let request = AssetRequest::new("snes", AssetClass::Logo);
        let chain = LocaleChain::parse(Some("es"));
        let first = resolve(&vfs, &request, &roots(), &chain).unwrap();
        let second = resolve(&vfs, &request, &roots(), &chain).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn probing_stops_at_first_hit() {
        // The customization svg wins even though later candidates exist too.
        let mut vfs = MemoryVfs::new();
        vfs.touch("/custom/logos/snes.svg");
        vfs.touch("/custom/logos/snes.webp");
        vfs.touch("/theme/logos/snes.svg");

        let request = AssetRequest::new("snes", AssetClass::Logo);
        let got = resolve(&vfs, &request, &roots(), &LocaleChain::agnostic()).unwrap();
        assert_eq!(got.path(), Some("/custom/logos/snes.svg"));
    }
}

//! Engine facade.
//!
//! `ThemeEngine` owns the session state the resolvers need: the storage
//! roots, the locale chain, the current display profile, and the bounded
//! resolution cache. Profile and chain are copy-on-change snapshots; every
//! change bumps the epoch, which discards cached resolutions wholesale.

use veneer_types::error::Result;
use veneer_types::settings::RawSettings;
use veneer_vfs::Vfs;

use crate::cache::{CacheKey, ResolutionCache};
use crate::candidates::{AssetRequest, StorageRoots};
use crate::locale::LocaleChain;
use crate::metadata::merge_field;
use crate::profile::{DisplayProfile, RejectedSetting};
use crate::resolver::{Resolution, resolve};
use crate::strings::StringCatalog;

/// Default bound on cached resolutions.
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// The layered asset and configuration resolution engine.
///
/// Single-threaded and synchronous: every call returns a result or a defined
/// fallback without suspending. The engine never writes to storage.
pub struct ThemeEngine<V: Vfs> {
    vfs: V,
    builtin_root: String,
    roots: StorageRoots,
    chain: LocaleChain,
    profile: DisplayProfile,
    epoch: u64,
    cache: ResolutionCache,
    strings: Option<StringCatalog>,
}

impl<V: Vfs> ThemeEngine<V> {
    /// Build an engine for one rendering session.
    ///
    /// `builtin_root` is the theme-shipped asset directory; the customization
    /// root is derived from the resolved distribution setting. Out-of-domain
    /// settings are substituted with defaults (and logged) here; use
    /// [`apply_settings`](Self::apply_settings) when the rejections matter.
    pub fn new(
        vfs: V,
        builtin_root: impl Into<String>,
        settings: &RawSettings,
        raw_locale: Option<&str>,
    ) -> Self {
        let builtin_root = builtin_root.into();
        let (profile, _) = DisplayProfile::from_raw(settings);
        let roots = StorageRoots::new(builtin_root.clone(), profile.distribution);
        Self {
            vfs,
            builtin_root,
            roots,
            chain: LocaleChain::parse(raw_locale),
            profile,
            epoch: 0,
            cache: ResolutionCache::new(DEFAULT_CACHE_CAPACITY),
            strings: None,
        }
    }

    /// Attach a localized string catalog.
    pub fn with_strings(mut self, strings: StringCatalog) -> Self {
        self.strings = Some(strings);
        self
    }

    /// Current immutable profile snapshot.
    pub fn profile(&self) -> &DisplayProfile {
        &self.profile
    }

    /// Session locale chain.
    pub fn locale_chain(&self) -> &LocaleChain {
        &self.chain
    }

    /// Storage roots in effect (derived from the distribution setting).
    pub fn roots(&self) -> &StorageRoots {
        &self.roots
    }

    /// Resolve one asset request, consulting the cache first.
    pub fn resolve_asset(&mut self, request: &AssetRequest) -> Result<Resolution> {
        let key = CacheKey::for_request(request);
        if let Some(hit) = self.cache.get(&key, self.epoch) {
            // The key does not cover the display label, so a cached text
            // fallback carries whichever label the first request had.
            // Re-attach this request's label before handing it back.
            return Ok(match hit {
                Resolution::TextLogo(mut text) => {
                    text.label = request.display_label().to_string();
                    Resolution::TextLogo(text)
                },
                file => file,
            });
        }
        let resolution = resolve(&self.vfs, request, &self.roots, &self.chain)?;
        self.cache.insert(key, self.epoch, resolution.clone());
        Ok(resolution)
    }

    /// Pick one metadata value per the active metadata-source setting.
    pub fn resolve_metadata_field(
        &self,
        key: &str,
        theme_value: Option<&str>,
        host_value: Option<&str>,
    ) -> Option<String> {
        let picked = merge_field(theme_value, host_value, self.profile.metadata_source);
        if picked.is_none() {
            log::debug!("metadata field '{key}' absent on both sides");
        }
        picked.map(str::to_string)
    }

    /// Look up a localized UI string via the session chain.
    pub fn lookup_string(&self, key: &str) -> Option<&str> {
        self.strings.as_ref()?.lookup(key, &self.chain)
    }

    /// Replace the profile snapshot from new raw settings.
    ///
    /// Atomically from the consumer's point of view: the old snapshot stays
    /// valid until this returns, and the cache is discarded because a
    /// distribution change can alter the candidate set. Returns the
    /// rejected (defaulted) values for diagnostics.
    pub fn apply_settings(&mut self, settings: &RawSettings) -> Vec<RejectedSetting> {
        let (profile, rejected) = DisplayProfile::from_raw(settings);
        self.roots = StorageRoots::new(self.builtin_root.clone(), profile.distribution);
        self.profile = profile;
        self.epoch += 1;
        rejected
    }

    /// Replace the session locale chain.
    pub fn set_locale(&mut self, raw_locale: Option<&str>) {
        self.chain = LocaleChain::parse(raw_locale);
        self.epoch += 1;
    }

    /// Discard cached resolutions after an external change to a
    /// customization directory.
    pub fn invalidate_assets(&mut self) {
        self.cache.clear();
    }
}

//! Error types for the veneer theme engine.

use std::io;

/// Errors produced by the veneer crates.
///
/// Only `Config` errors are ever surfaced across the engine boundary during
/// asset resolution; every other anomaly (missing logo, out-of-domain setting)
/// is absorbed into a defined fallback.
#[derive(Debug, thiserror::Error)]
pub enum VeneerError {
    #[error("config error: {0}")]
    Config(String),

    #[error("VFS error: {0}")]
    Vfs(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, VeneerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let e = VeneerError::Config("builtin background missing for 'snes'".into());
        assert_eq!(
            format!("{e}"),
            "config error: builtin background missing for 'snes'"
        );
    }

    #[test]
    fn vfs_error_display() {
        let e = VeneerError::Vfs("no such file".into());
        assert_eq!(format!("{e}"), "VFS error: no such file");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: VeneerError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let bad_toml = "this is [[[not valid toml";
        let toml_err = toml::from_str::<toml::Value>(bad_toml).unwrap_err();
        let e: VeneerError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn error_is_debug() {
        let e = VeneerError::Config("test".into());
        assert!(format!("{e:?}").contains("Config"));
    }

    #[test]
    fn result_alias_roundtrip() {
        let ok: Result<i32> = Ok(7);
        assert_eq!(ok.unwrap(), 7);
        let err: Result<i32> = Err(VeneerError::Vfs("oops".into()));
        assert!(err.is_err());
    }
}

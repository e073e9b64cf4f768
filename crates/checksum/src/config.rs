//! Runtime configuration (environment overrides).
//!
//! This module centralizes the knobs that change how tables are shared:
//!
//! | Variable | Values | Default |
//! |----------|--------|---------|
//! | `CRCKIT_TABLE_CACHE` | `shared` / `on` / `cache`, `private` / `off` / `none` | `shared` |
//!
//! Overrides are read once per process and memoised. Unrecognised values are
//! ignored and the default applies.

/// Whether canonical-polynomial tables are shared through a registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TableCache {
  /// Canonical tables are built once and shared; other polynomials get private tables.
  #[default]
  Shared,
  /// Every request builds a private table, canonical or not.
  Private,
}

impl TableCache {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Shared => "shared",
      Self::Private => "private",
    }
  }

  /// Parse a configuration value, case-insensitively.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("shared") || value.eq_ignore_ascii_case("on") || value.eq_ignore_ascii_case("cache") {
      return Some(Self::Shared);
    }
    if value.eq_ignore_ascii_case("private") || value.eq_ignore_ascii_case("off") || value.eq_ignore_ascii_case("none")
    {
      return Some(Self::Private);
    }
    None
  }
}

/// Effective runtime configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CrcConfig {
  /// Table sharing mode for the process-wide registry.
  pub table_cache: TableCache,
}

/// Environment variable controlling [`CrcConfig::table_cache`].
pub const TABLE_CACHE_ENV: &str = "CRCKIT_TABLE_CACHE";

#[derive(Clone, Copy, Debug, Default)]
struct Overrides {
  table_cache: Option<TableCache>,
}

fn read_env_overrides() -> Overrides {
  fn parse_cache(name: &str) -> Option<TableCache> {
    let value = std::env::var(name).ok()?;
    let parsed = TableCache::parse(&value);
    if parsed.is_none() && !value.trim().is_empty() {
      log::warn!("ignoring unrecognised {name}={value:?}");
    }
    parsed
  }

  Overrides {
    table_cache: parse_cache(TABLE_CACHE_ENV),
  }
}

fn overrides() -> Overrides {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<Overrides> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

/// Get the effective configuration for this process.
#[inline]
#[must_use]
pub fn get() -> CrcConfig {
  let ov = overrides();
  CrcConfig {
    table_cache: ov.table_cache.unwrap_or_default(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_shared_aliases() {
    for v in ["shared", "SHARED", " on ", "Cache"] {
      assert_eq!(TableCache::parse(v), Some(TableCache::Shared), "{v:?}");
    }
  }

  #[test]
  fn test_parse_private_aliases() {
    for v in ["private", "off", "NONE", "\tprivate\n"] {
      assert_eq!(TableCache::parse(v), Some(TableCache::Private), "{v:?}");
    }
  }

  #[test]
  fn test_parse_rejects_unknown() {
    assert_eq!(TableCache::parse(""), None);
    assert_eq!(TableCache::parse("sometimes"), None);
  }

  #[test]
  fn test_as_str_round_trips() {
    for mode in [TableCache::Shared, TableCache::Private] {
      assert_eq!(TableCache::parse(mode.as_str()), Some(mode));
    }
  }

  #[test]
  fn test_get_is_stable() {
    assert_eq!(get(), get());
  }
}

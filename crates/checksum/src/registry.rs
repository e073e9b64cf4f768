//! Shared lookup-table registry.
//!
//! A [`TableRegistry`] owns one slot per width for the table of the canonical
//! polynomial (CRC-32/ZIP, CRC-64/ISO). The first request for a canonical
//! polynomial builds the table and publishes it; later requests reuse it.
//! Any other polynomial gets a freshly built private table every time.
//!
//! # Concurrency
//!
//! Building never happens under a lock. Threads that race on an empty slot
//! each build a table, then try to publish it; the first store wins and the
//! others adopt the published table and drop their own. Tables are a pure
//! function of the polynomial, so a duplicate build only wastes work.
//!
//! # Usage
//!
//! ```
//! use crckit::{Crc32, TableRegistry};
//!
//! let registry = TableRegistry::new();
//! let a = Crc32::with_registry(&registry, Crc32::DEFAULT_POLYNOMIAL, Crc32::DEFAULT_SEED);
//! let b = Crc32::with_registry(&registry, Crc32::DEFAULT_POLYNOMIAL, Crc32::DEFAULT_SEED);
//! assert_eq!(registry.stats().crc32_shared_builds, 1);
//! assert_eq!(a.table(), b.table());
//! ```

use core::fmt;
use std::sync::{
  Arc, OnceLock,
  atomic::{AtomicUsize, Ordering},
};

use crate::{
  common::tables::{CRC32_ZIP_POLY, CRC64_ISO_POLY, Table32, Table64, generate_crc32_table, generate_crc64_table},
  config::{self, TableCache},
};

/// Registry of shared lookup tables for the canonical polynomials.
pub struct TableRegistry {
  mode: TableCache,
  crc32: OnceLock<Arc<Table32>>,
  crc64: OnceLock<Arc<Table64>>,
  crc32_shared_builds: AtomicUsize,
  crc32_private_builds: AtomicUsize,
  crc64_shared_builds: AtomicUsize,
  crc64_private_builds: AtomicUsize,
}

/// Snapshot of a registry's build counters and slot state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegistryStats {
  /// CRC-32 canonical tables built with the intent to publish.
  pub crc32_shared_builds: usize,
  /// CRC-32 tables built for private use.
  pub crc32_private_builds: usize,
  /// CRC-64 canonical tables built with the intent to publish.
  pub crc64_shared_builds: usize,
  /// CRC-64 tables built for private use.
  pub crc64_private_builds: usize,
  /// Whether the CRC-32 canonical slot is populated.
  pub crc32_cached: bool,
  /// Whether the CRC-64 canonical slot is populated.
  pub crc64_cached: bool,
}

impl TableRegistry {
  /// Create an empty registry that shares canonical tables.
  #[must_use]
  pub const fn new() -> Self {
    Self::with_mode(TableCache::Shared)
  }

  /// Create an empty registry with an explicit sharing mode.
  #[must_use]
  pub const fn with_mode(mode: TableCache) -> Self {
    Self {
      mode,
      crc32: OnceLock::new(),
      crc64: OnceLock::new(),
      crc32_shared_builds: AtomicUsize::new(0),
      crc32_private_builds: AtomicUsize::new(0),
      crc64_shared_builds: AtomicUsize::new(0),
      crc64_private_builds: AtomicUsize::new(0),
    }
  }

  /// The process-wide registry used by default constructors and one-shot functions.
  ///
  /// Its mode comes from [`config::get`].
  #[must_use]
  pub fn global() -> &'static Self {
    static GLOBAL: OnceLock<TableRegistry> = OnceLock::new();
    GLOBAL.get_or_init(|| {
      let mode = config::get().table_cache;
      log::debug!("process table registry created (mode: {})", mode.as_str());
      Self::with_mode(mode)
    })
  }

  /// The sharing mode of this registry.
  #[inline]
  #[must_use]
  pub const fn mode(&self) -> TableCache {
    self.mode
  }

  /// Get the CRC-32 table for `poly`, shared if `poly` is canonical.
  #[must_use]
  pub fn crc32_table(&self, poly: u32) -> Arc<Table32> {
    if poly != CRC32_ZIP_POLY || self.mode == TableCache::Private {
      self.crc32_private_builds.fetch_add(1, Ordering::Relaxed);
      log::debug!("building private crc-32 table for polynomial {poly:#010x}");
      return Arc::new(generate_crc32_table(poly));
    }
    if let Some(table) = self.crc32.get() {
      return Arc::clone(table);
    }

    self.crc32_shared_builds.fetch_add(1, Ordering::Relaxed);
    log::debug!("building shared crc-32 table for polynomial {poly:#010x}");
    publish(&self.crc32, Arc::new(generate_crc32_table(poly)), "crc-32")
  }

  /// Get the CRC-64 table for `poly`, shared if `poly` is canonical.
  #[must_use]
  pub fn crc64_table(&self, poly: u64) -> Arc<Table64> {
    if poly != CRC64_ISO_POLY || self.mode == TableCache::Private {
      self.crc64_private_builds.fetch_add(1, Ordering::Relaxed);
      log::debug!("building private crc-64 table for polynomial {poly:#018x}");
      return Arc::new(generate_crc64_table(poly));
    }
    if let Some(table) = self.crc64.get() {
      return Arc::clone(table);
    }

    self.crc64_shared_builds.fetch_add(1, Ordering::Relaxed);
    log::debug!("building shared crc-64 table for polynomial {poly:#018x}");
    publish(&self.crc64, Arc::new(generate_crc64_table(poly)), "crc-64")
  }

  /// Snapshot the build counters and slot state.
  #[must_use]
  pub fn stats(&self) -> RegistryStats {
    RegistryStats {
      crc32_shared_builds: self.crc32_shared_builds.load(Ordering::Relaxed),
      crc32_private_builds: self.crc32_private_builds.load(Ordering::Relaxed),
      crc64_shared_builds: self.crc64_shared_builds.load(Ordering::Relaxed),
      crc64_private_builds: self.crc64_private_builds.load(Ordering::Relaxed),
      crc32_cached: self.crc32.get().is_some(),
      crc64_cached: self.crc64.get().is_some(),
    }
  }

  /// Drop both cached tables and zero the counters.
  ///
  /// Accumulators built earlier keep their own reference to the old tables.
  pub fn clear(&mut self) {
    self.crc32.take();
    self.crc64.take();
    *self.crc32_shared_builds.get_mut() = 0;
    *self.crc32_private_builds.get_mut() = 0;
    *self.crc64_shared_builds.get_mut() = 0;
    *self.crc64_private_builds.get_mut() = 0;
  }
}

/// Store `built` in `slot` unless another builder got there first, and
/// return whichever table ended up published.
fn publish<T>(slot: &OnceLock<Arc<T>>, built: Arc<T>, what: &str) -> Arc<T> {
  match slot.set(Arc::clone(&built)) {
    Ok(()) => built,
    Err(_) => {
      log::debug!("{what} table already published; discarding duplicate build");
      slot.get().map_or(built, Arc::clone)
    }
  }
}

impl Default for TableRegistry {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Debug for TableRegistry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TableRegistry")
      .field("mode", &self.mode)
      .field("stats", &self.stats())
      .finish()
  }
}

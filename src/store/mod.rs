//! Alert persistence with pluggable storage backends.
//!
//! The alert list is small and read/written wholesale: `load` returns the
//! entire collection (or `None` when nothing was ever saved, which the CLI
//! treats as "seed the samples"), and every mutation saves the full
//! collection back. No incremental updates, no transactions.

mod file;
mod memory;

pub use file::FileAlertStore;
pub use memory::MemoryAlertStore;

use crate::domain::PriceAlert;
use crate::error::Result;

/// Whole-collection persistence for the alert list.
pub trait AlertStore: Send + Sync {
    /// Load the saved collection. `None` means no collection was ever
    /// saved, which is distinct from an empty saved collection.
    fn load(&self) -> Result<Option<Vec<PriceAlert>>>;

    /// Replace the saved collection.
    fn save(&self, alerts: &[PriceAlert]) -> Result<()>;
}

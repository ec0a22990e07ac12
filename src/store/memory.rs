//! In-memory alert store for tests.

use parking_lot::RwLock;

use super::AlertStore;
use crate::domain::PriceAlert;
use crate::error::Result;

/// Alert store held entirely in memory. Used by tests and anywhere
/// persistence is not wanted.
#[derive(Debug, Default)]
pub struct MemoryAlertStore {
    alerts: RwLock<Option<Vec<PriceAlert>>>,
}

impl MemoryAlertStore {
    /// Create a store with nothing saved yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a saved collection.
    pub fn with_alerts(alerts: Vec<PriceAlert>) -> Self {
        Self {
            alerts: RwLock::new(Some(alerts)),
        }
    }
}

impl AlertStore for MemoryAlertStore {
    fn load(&self) -> Result<Option<Vec<PriceAlert>>> {
        Ok(self.alerts.read().clone())
    }

    fn save(&self, alerts: &[PriceAlert]) -> Result<()> {
        *self.alerts.write() = Some(alerts.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AlertDirection;
    use rust_decimal_macros::dec;

    #[test]
    fn starts_with_nothing_saved() {
        let store = MemoryAlertStore::new();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_replaces_the_collection() {
        let store = MemoryAlertStore::new();
        let alert = PriceAlert::new(
            "event_2",
            "LA Lakers vs Golden State Warriors",
            "Basketball",
            "LA Lakers Win",
            dec!(2.00),
            AlertDirection::AtLeast,
        );

        store.save(std::slice::from_ref(&alert)).unwrap();
        assert_eq!(store.load().unwrap(), Some(vec![alert]));

        store.save(&[]).unwrap();
        assert_eq!(store.load().unwrap(), Some(vec![]));
    }
}

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// One async mutex per bank, created on first use and dropped once nobody
/// holds or waits for it.
///
/// Holding the guard serializes every read-modify-write cycle on that bank's
/// document. Different banks never contend.
#[derive(Default)]
pub struct BankLocks {
    locks: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

pub struct BankGuard<'a> {
    locks: &'a BankLocks,
    bank_id: String,
    guard: Option<OwnedMutexGuard<()>>,
}

impl BankLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock(&self, bank_id: &str) -> BankGuard<'_> {
        let lock = self
            .locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(bank_id.to_string())
            .or_insert_with(|| Arc::new(AsyncMutex::new(())))
            .clone();
        BankGuard {
            locks: self,
            bank_id: bank_id.to_string(),
            guard: Some(lock.lock_owned().await),
        }
    }

    /// Number of banks with a live lock.
    pub fn tracked(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn release(&self, bank_id: &str) {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        // Only the map's own handle left: no holder, no waiter.
        if locks
            .get(bank_id)
            .is_some_and(|lock| Arc::strong_count(lock) == 1)
        {
            locks.remove(bank_id);
        }
    }
}

impl Drop for BankGuard<'_> {
    fn drop(&mut self) {
        self.guard.take();
        self.locks.release(&self.bank_id);
    }
}

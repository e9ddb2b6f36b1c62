//! Merchant collection store.
//!
//! Owns the ordered merchant list, writes a snapshot through its repository
//! after every change and then notifies subscribers.

use super::aggregate::{Merchant, MerchantId, MerchantPatch};
use super::seed::seed_merchants;
use crate::shared::observer::{Listeners, Observable};
use crate::shared::storage::Repository;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MerchantError {
    #[error("Merchant not found: {0}")]
    NotFound(MerchantId),
}

/// Persisted part of the store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MerchantsSnapshot {
    pub merchants: Vec<Merchant>,
}

pub struct MerchantStore<R> {
    merchants: Vec<Merchant>,
    loading: bool,
    seed: Vec<Merchant>,
    repository: R,
    listeners: Listeners,
}

impl<R: Repository<MerchantsSnapshot>> MerchantStore<R> {
    /// Store seeded from the embedded dataset
    pub fn new(repository: R) -> Self {
        Self::with_seed(repository, seed_merchants())
    }

    /// Restores the persisted collection (if any); `seed` is only used by
    /// [`MerchantStore::initialize`].
    pub fn with_seed(repository: R, seed: Vec<Merchant>) -> Self {
        let merchants = repository
            .load()
            .map(|snapshot| snapshot.merchants)
            .unwrap_or_default();
        log::debug!("merchant store restored {} merchants", merchants.len());

        Self {
            merchants,
            loading: false,
            seed,
            repository,
            listeners: Listeners::new(),
        }
    }

    pub fn merchants(&self) -> &[Merchant] {
        &self.merchants
    }

    pub fn len(&self) -> usize {
        self.merchants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.merchants.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        if self.loading != loading {
            self.loading = loading;
            self.listeners.notify();
        }
    }

    /// One-time bootstrap: fills an empty collection from the seed dataset.
    /// Existing data is never replaced.
    pub fn initialize(&mut self) {
        self.loading = false;
        if !self.merchants.is_empty() {
            log::debug!("merchant store already has data, skipping seed");
            self.listeners.notify();
            return;
        }
        self.merchants = self.seed.clone();
        log::debug!("merchant store seeded with {} merchants", self.merchants.len());
        self.commit();
    }

    /// Appends without validation; callers validate through the form model.
    pub fn add(&mut self, merchant: Merchant) {
        log::debug!("add merchant {}", merchant.id);
        self.merchants.push(merchant);
        self.commit();
    }

    /// Returns the removed merchant; unknown ids are a no-op.
    pub fn remove(&mut self, id: &MerchantId) -> Option<Merchant> {
        let index = self.merchants.iter().position(|m| &m.id == id)?;
        let removed = self.merchants.remove(index);
        log::debug!("removed merchant {}", id);
        self.commit();
        Some(removed)
    }

    /// Shallow-merges `patch`; unknown ids are a no-op.
    pub fn update(&mut self, id: &MerchantId, patch: &MerchantPatch) -> Option<&Merchant> {
        let index = self.merchants.iter().position(|m| &m.id == id)?;
        self.merchants[index].apply(patch);
        log::debug!("updated merchant {}", id);
        self.commit();
        self.merchants.get(index)
    }

    pub fn get_by_id(&self, id: &MerchantId) -> Result<&Merchant, MerchantError> {
        self.merchants
            .iter()
            .find(|m| &m.id == id)
            .ok_or_else(|| MerchantError::NotFound(id.clone()))
    }

    pub fn snapshot(&self) -> MerchantsSnapshot {
        MerchantsSnapshot {
            merchants: self.merchants.clone(),
        }
    }

    fn commit(&mut self) {
        if let Err(e) = self.repository.save(&self.snapshot()) {
            log::error!("failed to persist merchants: {}", e);
        }
        self.listeners.notify();
    }
}

impl<R> std::fmt::Debug for MerchantStore<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MerchantStore")
            .field("merchants", &self.merchants.len())
            .field("loading", &self.loading)
            .field("listeners", &self.listeners)
            .finish()
    }
}

impl<R: Repository<MerchantsSnapshot>> Observable for MerchantStore<R> {
    fn listeners_mut(&mut self) -> &mut Listeners {
        &mut self.listeners
    }
}

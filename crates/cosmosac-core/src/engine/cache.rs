use crate::core::cosmo::exchange::ExchangeEnergy;
use crate::core::cosmo::params::CosmoSacParams;
use crate::core::models::error::InputShapeError;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Number of temperatures kept by [`ExchangeCache::new`].
pub const DEFAULT_CAPACITY: usize = 32;

#[derive(Debug, Default)]
struct Entries {
    by_temperature: HashMap<u64, Arc<ExchangeEnergy>>,
    order: VecDeque<u64>,
}

/// Exchange energies keyed by the exact bit pattern of the temperature.
///
/// An entry is never rewritten while present, so readers can hold an `Arc`
/// across evaluations. Once `capacity` temperatures are stored the oldest
/// one is evicted. Only valid for the parameter set it was filled with.
#[derive(Debug)]
pub struct ExchangeCache {
    data: RwLock<Entries>,
    capacity: usize,
}

impl Default for ExchangeCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl ExchangeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: RwLock::new(Entries::default()),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, temperature: f64) -> Option<Arc<ExchangeEnergy>> {
        let data = self.data.read().unwrap_or_else(|e| e.into_inner());
        data.by_temperature.get(&temperature.to_bits()).cloned()
    }

    pub fn get_or_build(
        &self,
        temperature: f64,
        params: &CosmoSacParams,
    ) -> Result<Arc<ExchangeEnergy>, InputShapeError> {
        if let Some(hit) = self.get(temperature) {
            return Ok(hit);
        }

        let built = Arc::new(ExchangeEnergy::build(temperature, params)?);
        let key = temperature.to_bits();
        let mut data = self.data.write().unwrap_or_else(|e| e.into_inner());
        if let Some(existing) = data.by_temperature.get(&key) {
            return Ok(existing.clone());
        }

        while data.order.len() >= self.capacity {
            if let Some(oldest) = data.order.pop_front() {
                data.by_temperature.remove(&oldest);
                debug!(temperature = f64::from_bits(oldest), "Evicted exchange energy.");
            }
        }
        data.order.push_back(key);
        data.by_temperature.insert(key, built.clone());
        debug!(temperature, "Cached exchange energy.");
        Ok(built)
    }

    pub fn len(&self) -> usize {
        self.data
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .by_temperature
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut data = self.data.write().unwrap_or_else(|e| e.into_inner());
        data.by_temperature.clear();
        data.order.clear();
    }
}

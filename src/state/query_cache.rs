// ============================================================================
// QUERY CACHE - Resultados de consultas con ventana de frescura
// ============================================================================

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::config::CONFIG;
use crate::error::AppError;
use crate::state::reactivity::{Observable, ReactiveState, SubscriptionId};

#[derive(Clone, Debug, PartialEq)]
struct CacheEntry<V> {
    value: V,
    fetched_at_ms: f64,
}

/// Resultados por clave. Una entrada está fresca `stale_ms` tras guardarse;
/// `try_begin` de-duplica fetches simultáneos de la misma clave.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryCache<V> {
    entries: HashMap<String, CacheEntry<V>>,
    in_flight: HashSet<String>,
    errors: HashMap<String, AppError>,
    stale_ms: f64,
}

impl<V: Clone> QueryCache<V> {
    pub fn new(stale_ms: f64) -> Self {
        Self {
            entries: HashMap::new(),
            in_flight: HashSet::new(),
            errors: HashMap::new(),
            stale_ms,
        }
    }

    pub fn get_fresh(&self, key: &str, now_ms: f64) -> Option<V> {
        self.entries
            .get(key)
            .filter(|entry| now_ms - entry.fetched_at_ms < self.stale_ms)
            .map(|entry| entry.value.clone())
    }

    /// Último valor conocido, fresco o no (se muestra mientras se repide)
    pub fn get_any(&self, key: &str) -> Option<V> {
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    pub fn insert(&mut self, key: &str, value: V, now_ms: f64) {
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                fetched_at_ms: now_ms,
            },
        );
        self.in_flight.remove(key);
        self.errors.remove(key);
    }

    /// Marca un fetch como iniciado. False si ya hay uno en curso.
    pub fn try_begin(&mut self, key: &str) -> bool {
        let started = self.in_flight.insert(key.to_string());
        if started {
            self.errors.remove(key);
        }
        started
    }

    /// Quita la marca en curso sin guardar nada (fetch abortado)
    pub fn abandon(&mut self, key: &str) {
        self.in_flight.remove(key);
    }

    /// Fetch fallido: el error queda visible para todo observador de `key`
    /// hasta el siguiente `try_begin` o un `insert` correcto
    pub fn fail(&mut self, key: &str, error: AppError) {
        self.in_flight.remove(key);
        self.errors.insert(key.to_string(), error);
    }

    pub fn error(&self, key: &str) -> Option<AppError> {
        self.errors.get(key).cloned()
    }

    pub fn invalidate(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[derive(Clone)]
pub struct QueryStore<V> {
    state: ReactiveState<QueryCache<V>>,
}

impl<V> PartialEq for QueryStore<V> {
    fn eq(&self, other: &Self) -> bool {
        self.state.ptr_eq(&other.state)
    }
}

impl<V: Clone> Default for QueryStore<V> {
    fn default() -> Self {
        Self::new(CONFIG.query_config.stale_ms())
    }
}

impl<V: Clone> QueryStore<V> {
    pub fn new(stale_ms: f64) -> Self {
        Self {
            state: ReactiveState::new(QueryCache::new(stale_ms)),
        }
    }

    pub fn get_fresh(&self, key: &str, now_ms: f64) -> Option<V> {
        self.state.with(|cache| cache.get_fresh(key, now_ms))
    }

    pub fn get_any(&self, key: &str) -> Option<V> {
        self.state.with(|cache| cache.get_any(key))
    }

    pub fn try_begin(&self, key: &str) -> bool {
        let mut started = false;
        self.state.update(|cache| started = cache.try_begin(key));
        started
    }

    pub fn store(&self, key: &str, value: V, now_ms: f64) {
        self.state.update(|cache| cache.insert(key, value, now_ms));
    }

    pub fn abandon(&self, key: &str) {
        self.state.update(|cache| cache.abandon(key));
    }

    pub fn fail(&self, key: &str, error: AppError) {
        log::warn!("⚠️ [QUERY] {} failed: {}", key, error);
        self.state.update(|cache| cache.fail(key, error));
    }

    pub fn error(&self, key: &str) -> Option<AppError> {
        self.state.with(|cache| cache.error(key))
    }

    pub fn invalidate(&self, key: &str) {
        log::debug!("🗑️ [QUERY] invalidate {}", key);
        self.state.update(|cache| cache.invalidate(key));
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.state.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.state.unsubscribe(id);
    }
}

impl<V> Observable for QueryStore<V> {
    fn observe(&self, callback: Rc<dyn Fn()>) -> SubscriptionId {
        self.state.observe(callback)
    }

    fn unobserve(&self, id: SubscriptionId) {
        self.state.unobserve(id);
    }
}

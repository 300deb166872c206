// ============================================================================
// TOAST STATE - Cola de notificaciones transitorias
// ============================================================================

use std::collections::VecDeque;
use std::rc::Rc;

use crate::config::CONFIG;
use crate::state::reactivity::{Observable, ReactiveState, SubscriptionId};

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub created_at_ms: f64,
}

/// FIFO acotada de toasts visibles. Al desbordar se expulsa el más viejo y
/// cada uno caduca `ttl_ms` después de encolarse.
#[derive(Clone, PartialEq, Debug)]
pub struct ToastQueue {
    entries: VecDeque<Toast>,
    capacity: usize,
    ttl_ms: f64,
    next_id: u64,
}

impl ToastQueue {
    pub fn new(capacity: usize, ttl_ms: f64) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity: capacity.max(1),
            ttl_ms,
            next_id: 1,
        }
    }

    pub fn push(&mut self, message: impl Into<String>, now_ms: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push_back(Toast {
            id,
            message: message.into(),
            created_at_ms: now_ms,
        });
        while self.entries.len() > self.capacity {
            if let Some(evicted) = self.entries.pop_front() {
                log::debug!("🍞 [TOAST] evicted #{}", evicted.id);
            }
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|toast| toast.id != id);
    }

    /// Elimina los toasts más viejos que el TTL
    pub fn expire(&mut self, now_ms: f64) {
        let ttl = self.ttl_ms;
        self.entries
            .retain(|toast| now_ms - toast.created_at_ms < ttl);
    }

    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ttl_ms(&self) -> f64 {
        self.ttl_ms
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(
            CONFIG.ui_config.toast_capacity,
            f64::from(CONFIG.ui_config.toast_ttl_ms),
        )
    }
}

/// Cola de toasts compartida; encolar programa el temporizador de caducidad.
#[derive(Clone)]
pub struct ToastStore {
    state: ReactiveState<ToastQueue>,
}

impl PartialEq for ToastStore {
    fn eq(&self, other: &Self) -> bool {
        self.state.ptr_eq(&other.state)
    }
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new(ToastQueue::default())
    }
}

impl ToastStore {
    pub fn new(queue: ToastQueue) -> Self {
        Self {
            state: ReactiveState::new(queue),
        }
    }

    pub fn push(&self, message: impl Into<String>) {
        let id = self.push_at(message, js_sys::Date::now());

        let ttl = self.state.with(|queue| queue.ttl_ms()) as u32;
        let store = self.clone();
        gloo_timers::callback::Timeout::new(ttl, move || {
            store.expire_at(id, js_sys::Date::now());
        })
        .forget();
    }

    /// Encola sin programar el temporizador
    pub fn push_at(&self, message: impl Into<String>, now_ms: f64) -> u64 {
        let message = message.into();
        log::warn!("🍞 [TOAST] {}", message);
        let mut id = 0;
        self.state.update(|queue| id = queue.push(message, now_ms));
        id
    }

    /// Lo que ejecuta el temporizador de `id`: caduca todo lo vencido y
    /// retira `id` aunque el reloj del timer vaya unos ms por delante
    pub fn expire_at(&self, id: u64, now_ms: f64) {
        self.state.update(|queue| {
            queue.expire(now_ms);
            queue.dismiss(id);
        });
    }

    pub fn snapshot(&self) -> Vec<Toast> {
        self.state.with(|queue| queue.visible().cloned().collect())
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

impl Observable for ToastStore {
    fn observe(&self, callback: Rc<dyn Fn()>) -> SubscriptionId {
        self.state.observe(callback)
    }

    fn unobserve(&self, id: SubscriptionId) {
        self.state.unobserve(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_more_than_five_and_sixth_evicts_oldest() {
        let mut queue = ToastQueue::new(5, 3000.0);
        let first = queue.push("one", 0.0);
        for i in 2..=5 {
            queue.push(format!("toast {}", i), i as f64);
        }
        assert_eq!(queue.len(), 5);

        queue.push("six", 6.0);
        assert_eq!(queue.len(), 5);
        assert!(queue.visible().all(|t| t.id != first));
        assert_eq!(queue.visible().last().map(|t| t.message.as_str()), Some("six"));
        assert_eq!(queue.visible().next().map(|t| t.message.as_str()), Some("toast 2"));
    }

    #[test]
    fn entries_expire_after_ttl() {
        let mut queue = ToastQueue::new(5, 3000.0);
        queue.push("early", 0.0);
        queue.push("late", 1000.0);

        queue.expire(2999.0);
        assert_eq!(queue.len(), 2);

        queue.expire(3000.0);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.visible().next().unwrap().message, "late");

        queue.expire(4000.0);
        assert!(queue.is_empty());
    }

    #[test]
    fn dismiss_removes_only_target() {
        let mut queue = ToastQueue::new(5, 3000.0);
        let a = queue.push("a", 0.0);
        queue.push("b", 0.0);
        queue.dismiss(a);
        assert_eq!(queue.len(), 1);
        queue.dismiss(999);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn store_timer_path_expires_and_notifies() {
        let store = ToastStore::new(ToastQueue::new(5, 3000.0));
        let notified = Rc::new(std::cell::Cell::new(0));
        let counter = notified.clone();
        store.subscribe(move || counter.set(counter.get() + 1));

        let first = store.push_at("first", 0.0);
        let second = store.push_at("second", 500.0);
        let third = store.push_at("third", 2000.0);

        // El timer de `first` se adelanta un poco: se retira igual, el resto queda
        store.expire_at(first, 2999.0);
        let ids: Vec<u64> = store.snapshot().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![second, third]);

        // Un timer tardío barre todo lo vencido, no solo su propio id
        store.expire_at(third, 3600.0);
        assert!(store.snapshot().is_empty());
        assert_eq!(notified.get(), 5);
    }
}

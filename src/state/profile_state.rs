// ============================================================================
// PROFILE STATE - Perfil del usuario (editable por settings / onboarding)
// ============================================================================

use std::rc::Rc;

use crate::models::User;
use crate::state::reactivity::{Observable, ReactiveState, SubscriptionId};

/// Copia viva del usuario. Se siembra con la respuesta de auth y se reemplaza
/// con lo que devuelva el backend tras guardar ajustes/onboarding.
#[derive(Clone)]
pub struct ProfileStore {
    state: ReactiveState<Option<User>>,
}

impl PartialEq for ProfileStore {
    fn eq(&self, other: &Self) -> bool {
        self.state.ptr_eq(&other.state)
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileStore {
    pub fn new() -> Self {
        Self {
            state: ReactiveState::new(None),
        }
    }

    pub fn get(&self) -> Option<User> {
        self.state.get()
    }

    pub fn replace(&self, user: User) {
        self.state.set(Some(user));
    }

    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut User),
    {
        self.state.update(|profile| {
            if let Some(user) = profile.as_mut() {
                updater(user);
            }
        });
    }

    pub fn is_onboarded(&self) -> bool {
        self.state
            .with(|profile| profile.as_ref().is_some_and(User::is_onboarded))
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

impl Observable for ProfileStore {
    fn observe(&self, callback: Rc<dyn Fn()>) -> SubscriptionId {
        self.state.observe(callback)
    }

    fn unobserve(&self, id: SubscriptionId) {
        self.state.unobserve(id);
    }
}

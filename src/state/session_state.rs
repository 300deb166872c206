// ============================================================================
// SESSION STATE - Sesión de autenticación (un solo escritor: el bootstrap)
// ============================================================================

use std::rc::Rc;

use crate::models::User;
use crate::state::reactivity::{Observable, ReactiveState, SubscriptionId};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AuthStatus {
    Loading,
    Authenticated,
    Failed,
}

/// Foto de la sesión. Cargando y autenticado son estados de un mismo
/// enum: nunca pueden ser ciertos a la vez.
#[derive(Clone, PartialEq, Debug)]
pub struct Session {
    status: AuthStatus,
    user: Option<User>,
    token: Option<String>,
}

impl Session {
    fn loading() -> Self {
        Self {
            status: AuthStatus::Loading,
            user: None,
            token: None,
        }
    }

    pub fn status(&self) -> AuthStatus {
        self.status
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == AuthStatus::Authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.status == AuthStatus::Loading
    }

    pub fn is_failed(&self) -> bool {
        self.status == AuthStatus::Failed
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.id)
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// Vista de solo lectura de la sesión, compartida por el contexto
#[derive(Clone)]
pub struct SessionContext {
    state: ReactiveState<Session>,
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        self.state.ptr_eq(&other.state)
    }
}

impl SessionContext {
    /// Crea la sesión en `Loading` y su único escritor.
    pub fn new() -> (Self, SessionWriter) {
        let state = ReactiveState::new(Session::loading());
        (
            Self {
                state: state.clone(),
            },
            SessionWriter { state },
        )
    }

    pub fn snapshot(&self) -> Session {
        self.state.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(Session::is_authenticated)
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(Session::is_loading)
    }

    pub fn token(&self) -> Option<String> {
        self.state.with(|s| s.token.clone())
    }

    pub fn user_id(&self) -> Option<i64> {
        self.state.with(Session::user_id)
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

impl Observable for SessionContext {
    fn observe(&self, callback: Rc<dyn Fn()>) -> SubscriptionId {
        self.state.observe(callback)
    }

    fn unobserve(&self, id: SubscriptionId) {
        self.state.unobserve(id);
    }
}

/// Única capacidad de escritura sobre la sesión. Resolverla la consume: la
/// sesión se resuelve una sola vez por vida de la app.
pub struct SessionWriter {
    state: ReactiveState<Session>,
}

impl SessionWriter {
    pub fn settle_authenticated(self, user: User, token: String) {
        log::info!("🔐 [SESSION] Authenticated as {} (id {})", user.username, user.id);
        self.state.set(Session {
            status: AuthStatus::Authenticated,
            user: Some(user),
            token: Some(token),
        });
    }

    pub fn settle_failed(self) {
        log::warn!("🔐 [SESSION] Authentication failed, session closed");
        self.state.set(Session {
            status: AuthStatus::Failed,
            user: None,
            token: None,
        });
    }

    /// Ver el estado que se está escribiendo (para asserts durante la petición)
    pub fn current(&self) -> Session {
        self.state.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 3,
            username: "dana".into(),
            ..Default::default()
        }
    }

    #[test]
    fn starts_loading_only() {
        let (session, _writer) = SessionContext::new();
        assert!(session.is_loading());
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn success_flips_to_authenticated_only() {
        let (session, writer) = SessionContext::new();
        writer.settle_authenticated(user(), "tok".into());
        let snapshot = session.snapshot();
        assert!(snapshot.is_authenticated());
        assert!(!snapshot.is_loading());
        assert_eq!(snapshot.token(), Some("tok"));
        assert_eq!(snapshot.user_id(), Some(3));
    }

    #[test]
    fn failure_clears_both_flags() {
        let (session, writer) = SessionContext::new();
        writer.settle_failed();
        assert!(!session.is_authenticated());
        assert!(!session.is_loading());
        assert!(session.snapshot().is_failed());
    }

    #[test]
    fn subscribers_see_settlement() {
        use std::cell::Cell;
        use std::rc::Rc;

        let (session, writer) = SessionContext::new();
        let seen = Rc::new(Cell::new(false));
        let flag = seen.clone();
        let observer = session.clone();
        session.subscribe(move || flag.set(observer.is_authenticated()));
        writer.settle_authenticated(user(), "t".into());
        assert!(seen.get());
    }
}

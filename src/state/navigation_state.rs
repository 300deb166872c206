// ============================================================================
// NAVIGATION STATE - Ruta actual / anterior (un solo escritor: el sincronizador)
// ============================================================================

use crate::state::reactivity::ReactiveState;

pub const ROOT_PATH: &str = "/";

pub fn is_root(path: &str) -> bool {
    path.is_empty() || path == ROOT_PATH
}

/// Operaciones de router que necesita el handler de "atrás"
pub trait HistoryRouter {
    fn push(&self, path: &str);
    fn back(&self);
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavigationState {
    current_path: String,
    previous_path: String,
    /// Ruta con la que se abrió la app (deep link incluido); nunca se sobrescribe
    entry_path: String,
    /// Entradas de historial por delante de la entrada de lanzamiento
    depth: u32,
    /// Se emitió un history-back y aún no llegó el cambio de ruta
    pending_back: bool,
}

impl NavigationState {
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn previous_path(&self) -> &str {
        &self.previous_path
    }

    pub fn entry_path(&self) -> &str {
        &self.entry_path
    }

    /// `true` mientras la entrada actual es la primera del historial de la app
    pub fn at_first_entry(&self) -> bool {
        self.depth == 0
    }
}

/// Qué decidió hacer el handler de "atrás"
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackStep {
    Root,
    HistoryBack,
}

#[derive(Clone)]
pub struct NavigationContext {
    state: ReactiveState<NavigationState>,
}

impl PartialEq for NavigationContext {
    fn eq(&self, other: &Self) -> bool {
        self.state.ptr_eq(&other.state)
    }
}

impl NavigationContext {
    pub fn new() -> (Self, NavigationWriter) {
        let state = ReactiveState::new(NavigationState::default());
        (
            Self {
                state: state.clone(),
            },
            NavigationWriter { state },
        )
    }

    pub fn snapshot(&self) -> NavigationState {
        self.state.get()
    }

    pub fn current_path(&self) -> String {
        self.state.with(|s| s.current_path.clone())
    }

    pub fn previous_path(&self) -> String {
        self.state.with(|s| s.previous_path.clone())
    }

    pub fn entry_path(&self) -> String {
        self.state.with(|s| s.entry_path.clone())
    }
}

/// Capacidad de escritura sobre la navegación; la tiene solo el sincronizador
/// del botón "atrás"
pub struct NavigationWriter {
    state: ReactiveState<NavigationState>,
}

impl NavigationWriter {
    /// Llamado en cada cambio de ruta. La misma ruta dos veces se ignora.
    pub fn record_route(&self, path: &str) {
        let changed = self.state.with(|s| s.current_path != path);
        if !changed {
            return;
        }
        self.state.update(|s| {
            if s.current_path.is_empty() {
                s.entry_path = path.to_string();
                s.depth = 0;
            } else {
                if s.pending_back {
                    s.depth = s.depth.saturating_sub(1);
                } else {
                    s.depth += 1;
                }
                s.previous_path = std::mem::take(&mut s.current_path);
            }
            s.pending_back = false;
            s.current_path = path.to_string();
        });
        log::debug!(
            "🧭 [NAV] route {} (previous: {:?}, depth: {})",
            path,
            self.state.with(|s| s.previous_path.clone()),
            self.state.with(|s| s.depth)
        );
    }

    /// Decide y ejecuta la acción "atrás" para la ruta actual.
    /// Nunca hace history-back desde la primera entrada del historial:
    /// en el WebView eso no hace nada o cierra la app.
    pub fn navigate_back(&self, router: &dyn HistoryRouter) -> BackStep {
        let (current, previous, at_first_entry) = self.state.with(|s| {
            (
                s.current_path.clone(),
                s.previous_path.clone(),
                s.at_first_entry(),
            )
        });

        let step = if is_root(&current) || current == previous {
            BackStep::Root
        } else if !previous.is_empty() && !at_first_entry {
            BackStep::HistoryBack
        } else {
            // Sin historial propio (deep link o vuelta a la entrada de lanzamiento)
            self.state.update(|s| s.previous_path = current.clone());
            BackStep::Root
        };

        match step {
            BackStep::Root => router.push(ROOT_PATH),
            BackStep::HistoryBack => {
                self.state.update(|s| s.pending_back = true);
                router.back();
            }
        }
        log::info!("⬅️ [NAV] back from {} -> {:?}", current, step);
        step
    }

    pub fn context(&self) -> NavigationContext {
        NavigationContext {
            state: self.state.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::HistoryRouter;
    use std::cell::RefCell;

    /// Registra las llamadas en vez de tocar el historial del navegador
    #[derive(Default)]
    pub struct RecordingRouter {
        pub pushes: RefCell<Vec<String>>,
        pub backs: RefCell<u32>,
    }

    impl HistoryRouter for RecordingRouter {
        fn push(&self, path: &str) {
            self.pushes.borrow_mut().push(path.to_string());
        }

        fn back(&self) {
            *self.backs.borrow_mut() += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingRouter;
    use super::*;

    #[test]
    fn records_previous_route_on_change() {
        let (nav, writer) = NavigationContext::new();
        writer.record_route("/");
        assert_eq!(nav.previous_path(), "");
        writer.record_route("/activity");
        writer.record_route("/activity");
        assert_eq!(nav.current_path(), "/activity");
        assert_eq!(nav.previous_path(), "/");
    }

    #[test]
    fn fresh_app_without_history_goes_root() {
        let (nav, writer) = NavigationContext::new();
        writer.record_route("/meals/42");
        let router = RecordingRouter::default();
        assert_eq!(writer.navigate_back(&router), BackStep::Root);
        assert_eq!(*router.backs.borrow(), 0);
        assert_eq!(router.pushes.borrow().as_slice(), ["/"]);
        assert_eq!(nav.previous_path(), "/meals/42");
    }

    #[test]
    fn root_never_calls_history_back() {
        let (_nav, writer) = NavigationContext::new();
        writer.record_route("/activity");
        writer.record_route("/");
        let router = RecordingRouter::default();
        for _ in 0..3 {
            assert_eq!(writer.navigate_back(&router), BackStep::Root);
        }
        assert_eq!(*router.backs.borrow(), 0);
    }

    #[test]
    fn non_root_with_previous_steps_back_once() {
        let (_nav, writer) = NavigationContext::new();
        writer.record_route("/");
        writer.record_route("/posts/7");
        let router = RecordingRouter::default();
        assert_eq!(writer.navigate_back(&router), BackStep::HistoryBack);
        assert_eq!(*router.backs.borrow(), 1);
        assert!(router.pushes.borrow().is_empty());
    }

    #[test]
    fn current_equal_to_previous_goes_root() {
        let (_nav, writer) = NavigationContext::new();
        writer.record_route("/settings");
        let router = RecordingRouter::default();
        // La primera pulsación guarda /settings como previa y va a inicio
        writer.navigate_back(&router);
        // La navegación a inicio no ocurrió; una segunda pulsación no puede volver atrás
        assert_eq!(writer.navigate_back(&router), BackStep::Root);
        assert_eq!(*router.backs.borrow(), 0);
        assert_eq!(router.pushes.borrow().len(), 2);
    }

    #[test]
    fn deep_link_second_back_goes_root_not_past_first_entry() {
        let (nav, writer) = NavigationContext::new();
        let router = RecordingRouter::default();
        writer.record_route("/meals/42");
        writer.record_route("/users/bob");

        assert_eq!(writer.navigate_back(&router), BackStep::HistoryBack);
        // El router vuelve a la entrada de lanzamiento
        writer.record_route("/meals/42");
        assert_eq!(nav.entry_path(), "/meals/42");
        assert!(nav.snapshot().at_first_entry());

        assert_eq!(writer.navigate_back(&router), BackStep::Root);
        assert_eq!(*router.backs.borrow(), 1);
        assert_eq!(router.pushes.borrow().as_slice(), ["/"]);
    }

    #[test]
    fn depth_counts_pushes_and_backs() {
        let (nav, writer) = NavigationContext::new();
        let router = RecordingRouter::default();
        writer.record_route("/");
        writer.record_route("/activity");
        writer.record_route("/posts/3");

        assert_eq!(writer.navigate_back(&router), BackStep::HistoryBack);
        writer.record_route("/activity");
        assert_eq!(writer.navigate_back(&router), BackStep::HistoryBack);
        writer.record_route("/");
        assert!(nav.snapshot().at_first_entry());
        assert_eq!(*router.backs.borrow(), 2);
    }
}

// ============================================================================
// HOST BRIDGE - Contratos con el contenedor (Telegram WebApp)
// ============================================================================
// La lógica de ciclo de vida depende de estos traits, no de JS directamente.
// Implementación real: utils::telegram_ffi
// ============================================================================

use std::rc::Rc;

pub type ClickHandler = Rc<dyn Fn()>;

/// Control renderizado por el host con un slot de callback de click
pub trait ClickTarget {
    /// Lo que el host necesita para quitar luego este callback exacto
    type Binding;

    fn on_click(&self, handler: ClickHandler) -> Self::Binding;
    fn off_click(&self, binding: Self::Binding);
    fn show(&self);
    fn hide(&self);

    /// Volver al estado neutro al soltar un préstamo
    fn reset(&self) {
        self.hide();
    }
}

/// Botón de acción fijo en la parte inferior de la mini-app
pub trait MainButtonHost: ClickTarget {
    fn set_text(&self, text: &str);
    fn enable(&self);
    fn disable(&self);
    fn show_progress(&self, leave_active: bool);
    fn hide_progress(&self);
}

/// Capacidades del host que usa el bootstrap
pub trait WebAppHost {
    fn init_data(&self) -> String;
    fn start_param(&self) -> Option<String>;
    fn ready(&self);
    fn expand(&self);
    fn haptic_error(&self);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default, Debug, Clone, PartialEq)]
    pub struct FakeButtonState {
        pub visible: bool,
        pub enabled: bool,
        pub label: String,
        pub progress_visible: bool,
    }

    /// Botón en memoria. `click()` dispara todos los handlers vinculados, como
    /// hace el host real cuando se apilan callbacks.
    #[derive(Default)]
    pub struct FakeButton {
        pub state: RefCell<FakeButtonState>,
        handlers: RefCell<Vec<(u64, ClickHandler)>>,
        next_id: Cell<u64>,
    }

    impl FakeButton {
        pub fn click(&self) {
            let handlers: Vec<ClickHandler> =
                self.handlers.borrow().iter().map(|(_, h)| h.clone()).collect();
            for handler in handlers {
                handler();
            }
        }

        pub fn handler_count(&self) -> usize {
            self.handlers.borrow().len()
        }

        pub fn snapshot(&self) -> FakeButtonState {
            self.state.borrow().clone()
        }
    }

    impl ClickTarget for FakeButton {
        type Binding = u64;

        fn on_click(&self, handler: ClickHandler) -> u64 {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.handlers.borrow_mut().push((id, handler));
            id
        }

        fn off_click(&self, binding: u64) {
            self.handlers.borrow_mut().retain(|(id, _)| *id != binding);
        }

        fn show(&self) {
            self.state.borrow_mut().visible = true;
        }

        fn hide(&self) {
            self.state.borrow_mut().visible = false;
        }

        fn reset(&self) {
            let mut state = self.state.borrow_mut();
            state.visible = false;
            state.progress_visible = false;
        }
    }

    impl MainButtonHost for FakeButton {
        fn set_text(&self, text: &str) {
            self.state.borrow_mut().label = text.to_string();
        }

        fn enable(&self) {
            self.state.borrow_mut().enabled = true;
        }

        fn disable(&self) {
            self.state.borrow_mut().enabled = false;
        }

        fn show_progress(&self, leave_active: bool) {
            let mut state = self.state.borrow_mut();
            state.progress_visible = true;
            state.enabled = leave_active;
        }

        fn hide_progress(&self) {
            self.state.borrow_mut().progress_visible = false;
        }
    }

    #[derive(Default)]
    pub struct FakeWebApp {
        pub init_data: String,
        pub start_param: Option<String>,
        pub ready_calls: Cell<u32>,
        pub expand_calls: Cell<u32>,
    }

    impl WebAppHost for FakeWebApp {
        fn init_data(&self) -> String {
            self.init_data.clone()
        }

        fn start_param(&self) -> Option<String> {
            self.start_param.clone()
        }

        fn ready(&self) {
            self.ready_calls.set(self.ready_calls.get() + 1);
        }

        fn expand(&self) {
            self.expand_calls.set(self.expand_calls.get() + 1);
        }

        fn haptic_error(&self) {}
    }
}

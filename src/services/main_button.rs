// ============================================================================
// MAIN BUTTON - Adaptador del botón principal (una página a la vez)
// ============================================================================

use std::rc::Rc;

use crate::services::button_slot::{ButtonLease, ButtonSlot};
use crate::services::host_bridge::{ClickHandler, MainButtonHost};

/// Las páginas toman prestado el botón principal a través de este adaptador
pub struct MainButton<B: MainButtonHost> {
    slot: ButtonSlot<B>,
}

impl<B: MainButtonHost> Clone for MainButton<B> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<B: MainButtonHost> PartialEq for MainButton<B> {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

impl<B: MainButtonHost> MainButton<B> {
    pub fn new(host: Rc<B>) -> Self {
        Self {
            slot: ButtonSlot::new("MAIN_BUTTON", host),
        }
    }

    /// Vincula el handler de la página. El botón sigue oculto hasta que la página
    /// llama a `enable` o `disable` sobre el préstamo.
    pub fn acquire(&self, handler: ClickHandler) -> MainButtonLease<B> {
        MainButtonLease {
            lease: self.slot.acquire(handler),
        }
    }

    pub fn is_held(&self) -> bool {
        self.slot.is_held()
    }
}

/// Préstamo del botón principal. Cada llamada es no-op una vez que el préstamo
/// fue reemplazado; al soltarlo se desvincula y oculta el botón.
pub struct MainButtonLease<B: MainButtonHost> {
    lease: ButtonLease<B>,
}

impl<B: MainButtonHost> MainButtonLease<B> {
    pub fn enable(&self, label: &str) -> &Self {
        if let Some(host) = self.lease.host() {
            host.set_text(label);
            host.enable();
            host.show();
        }
        self
    }

    pub fn disable(&self, label: &str) -> &Self {
        if let Some(host) = self.lease.host() {
            host.set_text(label);
            host.disable();
            host.show();
        }
        self
    }

    pub fn show_progress(&self) -> &Self {
        if let Some(host) = self.lease.host() {
            host.show_progress(false);
        }
        self
    }

    pub fn hide_progress(&self) -> &Self {
        if let Some(host) = self.lease.host() {
            host.hide_progress();
        }
        self
    }

    pub fn is_active(&self) -> bool {
        self.lease.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::host_bridge::testing::FakeButton;
    use std::cell::Cell;

    fn counting_handler() -> (Rc<Cell<u32>>, ClickHandler) {
        let hits = Rc::new(Cell::new(0));
        let c = hits.clone();
        (hits, Rc::new(move || c.set(c.get() + 1)))
    }

    #[test]
    fn one_fire_per_click_across_page_transitions() {
        let host = Rc::new(FakeButton::default());
        let main_button = MainButton::new(host.clone());

        let (page_a_hits, page_a) = counting_handler();
        let lease_a = main_button.acquire(page_a);
        lease_a.enable("Save");
        host.click();
        assert_eq!(page_a_hits.get(), 1);

        // Se desmonta A, se monta B
        drop(lease_a);
        let (page_b_hits, page_b) = counting_handler();
        let lease_b = main_button.acquire(page_b);
        lease_b.enable("Continue");

        host.click();
        assert_eq!(page_a_hits.get(), 1);
        assert_eq!(page_b_hits.get(), 1);
        assert_eq!(host.handler_count(), 1);

        // Otra vez a A
        drop(lease_b);
        let (again_hits, again) = counting_handler();
        let _lease = main_button.acquire(again);
        host.click();
        assert_eq!(again_hits.get(), 1);
        assert_eq!(page_b_hits.get(), 1);
    }

    #[test]
    fn enable_disable_and_progress_map_onto_host() {
        let host = Rc::new(FakeButton::default());
        let main_button = MainButton::new(host.clone());
        let lease = main_button.acquire(Rc::new(|| {}));
        assert!(!host.snapshot().visible);

        lease.disable("Save");
        let state = host.snapshot();
        assert!(state.visible && !state.enabled);
        assert_eq!(state.label, "Save");

        lease.enable("Save").show_progress();
        assert!(host.snapshot().progress_visible);
        lease.hide_progress();
        assert!(!host.snapshot().progress_visible);

        drop(lease);
        let state = host.snapshot();
        assert!(!state.visible);
        assert!(!state.progress_visible);
        assert!(!main_button.is_held());
    }

    #[test]
    fn superseded_lease_cannot_touch_the_button() {
        let host = Rc::new(FakeButton::default());
        let main_button = MainButton::new(host.clone());
        let stale = main_button.acquire(Rc::new(|| {}));
        let current = main_button.acquire(Rc::new(|| {}));
        current.enable("Continue");

        stale.disable("Stale");
        assert!(!stale.is_active());
        assert_eq!(host.snapshot().label, "Continue");
        assert!(host.snapshot().enabled);
    }
}

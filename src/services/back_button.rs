// ============================================================================
// BACK BUTTON SYNC - Botón "atrás" del host sincronizado con el router
// ============================================================================

use crate::services::button_slot::{ButtonLease, ButtonSlot};
use crate::services::host_bridge::{ClickHandler, ClickTarget};
use crate::state::navigation_state::is_root;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackButtonState {
    Hidden,
    VisibleBound,
}

/// Oculto en la ruta raíz, visible con exactamente un handler en cualquier
/// otra. El handler se reemplaza en cada cambio de ruta.
pub struct BackButtonSync<B: ClickTarget> {
    slot: ButtonSlot<B>,
    lease: Option<ButtonLease<B>>,
}

impl<B: ClickTarget> BackButtonSync<B> {
    pub fn new(slot: ButtonSlot<B>) -> Self {
        Self { slot, lease: None }
    }

    pub fn state(&self) -> BackButtonState {
        match &self.lease {
            Some(lease) if lease.is_active() => BackButtonState::VisibleBound,
            _ => BackButtonState::Hidden,
        }
    }

    pub fn on_route_change(&mut self, path: &str, handler: ClickHandler) {
        // Desvincular antes de vincular el siguiente
        self.lease = None;

        if is_root(path) {
            return;
        }

        let lease = self.slot.acquire(handler);
        self.slot.host().show();
        self.lease = Some(lease);
    }

    pub fn teardown(&mut self) {
        if self.lease.take().is_some() {
            log::debug!("⬅️ [BACK_BUTTON] teardown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::host_bridge::testing::FakeButton;
    use crate::state::navigation_state::testing::RecordingRouter;
    use crate::state::NavigationContext;
    use std::rc::Rc;

    fn sync() -> (Rc<FakeButton>, BackButtonSync<FakeButton>) {
        let host = Rc::new(FakeButton::default());
        let sync = BackButtonSync::new(ButtonSlot::new("BACK_BUTTON", host.clone()));
        (host, sync)
    }

    #[test]
    fn hidden_on_root_visible_elsewhere() {
        let (host, mut sync) = sync();
        sync.on_route_change("/", Rc::new(|| {}));
        assert_eq!(sync.state(), BackButtonState::Hidden);
        assert_eq!(host.handler_count(), 0);

        sync.on_route_change("/activity", Rc::new(|| {}));
        assert_eq!(sync.state(), BackButtonState::VisibleBound);
        assert!(host.snapshot().visible);
        assert_eq!(host.handler_count(), 1);

        sync.on_route_change("/", Rc::new(|| {}));
        assert_eq!(sync.state(), BackButtonState::Hidden);
        assert!(!host.snapshot().visible);
        assert_eq!(host.handler_count(), 0);
    }

    #[test]
    fn route_changes_replace_the_handler() {
        let (host, mut sync) = sync();
        for path in ["/activity", "/posts/1", "/users/alice", "/settings"] {
            sync.on_route_change(path, Rc::new(|| {}));
            assert_eq!(host.handler_count(), 1);
        }
        sync.teardown();
        assert_eq!(sync.state(), BackButtonState::Hidden);
        assert_eq!(host.handler_count(), 0);
        assert!(!host.snapshot().visible);
    }

    #[test]
    fn click_after_transitions_steps_back_exactly_once() {
        let (host, mut sync) = sync();
        let (_nav, writer) = NavigationContext::new();
        let writer = Rc::new(writer);
        let router = Rc::new(RecordingRouter::default());

        for path in ["/", "/activity", "/posts/9"] {
            writer.record_route(path);
            let handler_writer = writer.clone();
            let handler_router = router.clone();
            sync.on_route_change(
                path,
                Rc::new(move || {
                    handler_writer.navigate_back(handler_router.as_ref());
                }),
            );
        }

        host.click();
        assert_eq!(*router.backs.borrow(), 1);
        assert!(router.pushes.borrow().is_empty());
    }
}

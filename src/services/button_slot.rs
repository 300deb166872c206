// ============================================================================
// BUTTON SLOT - Acquire/release sobre un botón del host con un solo callback
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::services::host_bridge::{ClickHandler, ClickTarget};

struct ActiveBinding<T> {
    lease_id: u64,
    binding: T,
}

/// Dueño del único slot de click de un botón del host. Como mucho un préstamo
/// tiene un handler vinculado a la vez.
pub struct ButtonSlot<B: ClickTarget> {
    name: &'static str,
    host: Rc<B>,
    active: Rc<RefCell<Option<ActiveBinding<B::Binding>>>>,
    next_id: Rc<Cell<u64>>,
}

impl<B: ClickTarget> Clone for ButtonSlot<B> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            host: self.host.clone(),
            active: self.active.clone(),
            next_id: self.next_id.clone(),
        }
    }
}

impl<B: ClickTarget> PartialEq for ButtonSlot<B> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.active, &other.active)
    }
}

impl<B: ClickTarget> ButtonSlot<B> {
    pub fn new(name: &'static str, host: Rc<B>) -> Self {
        Self {
            name,
            host,
            active: Rc::new(RefCell::new(None)),
            next_id: Rc::new(Cell::new(1)),
        }
    }

    /// Vincula `handler` y devuelve el préstamo que lo mantiene. Un préstamo
    /// que otro siga teniendo se suelta antes.
    pub fn acquire(&self, handler: ClickHandler) -> ButtonLease<B> {
        if self.is_held() {
            log::error!(
                "❌ [{}] acquired while a previous lease is still held; releasing it",
                self.name
            );
            self.release_active();
        }

        let lease_id = self.next_id.get();
        self.next_id.set(lease_id + 1);

        let binding = self.host.on_click(handler);
        *self.active.borrow_mut() = Some(ActiveBinding { lease_id, binding });
        log::debug!("🔗 [{}] bound lease #{}", self.name, lease_id);

        ButtonLease {
            lease_id,
            slot: self.clone(),
        }
    }

    pub fn is_held(&self) -> bool {
        self.active.borrow().is_some()
    }

    pub fn host(&self) -> &B {
        &self.host
    }

    fn holder(&self) -> Option<u64> {
        self.active.borrow().as_ref().map(|a| a.lease_id)
    }

    fn release(&self, lease_id: u64) -> bool {
        if self.holder() != Some(lease_id) {
            return false;
        }
        self.release_active()
    }

    fn release_active(&self) -> bool {
        let taken = self.active.borrow_mut().take();
        match taken {
            Some(active) => {
                self.host.off_click(active.binding);
                self.host.reset();
                log::debug!("🔓 [{}] released lease #{}", self.name, active.lease_id);
                true
            }
            None => false,
        }
    }
}

/// Mantiene el handler vinculado mientras vive. Al soltarlo se desvincula
/// y se resetea el botón, salvo que el slot ya tenga otro dueño.
pub struct ButtonLease<B: ClickTarget> {
    lease_id: u64,
    slot: ButtonSlot<B>,
}

impl<B: ClickTarget> ButtonLease<B> {
    /// False cuando otro acquire reemplazó este préstamo
    pub fn is_active(&self) -> bool {
        self.slot.holder() == Some(self.lease_id)
    }

    /// El botón del host, solo mientras este préstamo es el activo
    pub fn host(&self) -> Option<&B> {
        if self.is_active() {
            Some(self.slot.host())
        } else {
            None
        }
    }

    pub fn release(self) {}
}

impl<B: ClickTarget> Drop for ButtonLease<B> {
    fn drop(&mut self) {
        self.slot.release(self.lease_id);
    }
}

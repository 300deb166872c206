// ============================================================================
// USE MAIN BUTTON HOOK - Préstamo del botón principal durante la vida de la página
// ============================================================================
// Montar: adquiere el botón con el handler de la página.
// Desmontar: suelta el préstamo (offClick + hide + hideProgress).
// El handler siempre llama al callback más reciente del render, y le pasa
// el propio handle para que la página pueda mostrar progreso.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::hooks::use_app_context;
use crate::services::{ClickHandler, MainButtonLease};
use crate::utils::TelegramButton;

type Lease = MainButtonLease<TelegramButton>;

#[derive(Clone)]
pub struct UseMainButtonHandle {
    lease: Rc<RefCell<Option<Lease>>>,
}

impl PartialEq for UseMainButtonHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.lease, &other.lease)
    }
}

impl UseMainButtonHandle {
    fn with(&self, f: impl FnOnce(&Lease)) {
        if let Some(lease) = self.lease.borrow().as_ref() {
            f(lease);
        }
    }

    pub fn enable(&self, label: &str) {
        self.with(|lease| {
            lease.enable(label);
        });
    }

    pub fn disable(&self, label: &str) {
        self.with(|lease| {
            lease.disable(label);
        });
    }

    pub fn show_progress(&self) {
        self.with(|lease| {
            lease.show_progress();
        });
    }

    pub fn hide_progress(&self) {
        self.with(|lease| {
            lease.hide_progress();
        });
    }
}

#[hook]
pub fn use_main_button(on_click: Callback<UseMainButtonHandle>) -> UseMainButtonHandle {
    let ctx = use_app_context();
    let latest = use_mut_ref(|| on_click.clone());
    *latest.borrow_mut() = on_click;

    let lease: Rc<RefCell<Option<Lease>>> = use_mut_ref(|| None);

    {
        let lease = lease.clone();
        let main_button = ctx.main_button.clone();
        use_effect_with((), move |_| {
            let handle = UseMainButtonHandle {
                lease: lease.clone(),
            };
            let handler: ClickHandler = Rc::new(move || {
                let callback = latest.borrow().clone();
                callback.emit(handle.clone());
            });
            *lease.borrow_mut() = Some(main_button.acquire(handler));

            move || {
                lease.borrow_mut().take();
            }
        });
    }

    UseMainButtonHandle { lease }
}

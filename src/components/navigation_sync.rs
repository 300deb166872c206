// ============================================================================
// NAVIGATION SYNC - Ruta del router <-> BackButton del host
// ============================================================================
// Cada cambio de ruta: registra la ruta previa, suelta el handler anterior
// y (fuera de "/") vincula uno nuevo. Al desmontar la app: botón oculto.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::services::{BackButtonSync, ButtonSlot, ClickHandler};
use crate::state::{NavigationContext, NavigationWriter, ROOT_PATH};
use crate::utils::TelegramButton;
use crate::views::routes::NavigatorRouter;

/// Dueño del NavigationWriter y del BackButton del host
pub struct NavigationSync {
    writer: NavigationWriter,
    back_button: RefCell<BackButtonSync<TelegramButton>>,
}

impl NavigationSync {
    pub fn new(writer: NavigationWriter) -> Self {
        let slot = ButtonSlot::new("BACK_BUTTON", Rc::new(TelegramButton::back()));
        Self {
            writer,
            back_button: RefCell::new(BackButtonSync::new(slot)),
        }
    }

    pub fn context(&self) -> NavigationContext {
        self.writer.context()
    }

    fn route_changed(self: &Rc<Self>, path: &str, navigator: Option<Navigator>) {
        self.writer.record_route(path);

        // Weak: el handler vive dentro del botón que este struct posee
        let sync = Rc::downgrade(self);
        let handler: ClickHandler = Rc::new(move || {
            let (Some(sync), Some(navigator)) = (sync.upgrade(), navigator.clone()) else {
                log::warn!("⚠️ [NAV] back pressed without a router");
                return;
            };
            sync.writer.navigate_back(&NavigatorRouter::new(navigator));
        });
        self.back_button.borrow_mut().on_route_change(path, handler);
    }

    fn teardown(&self) {
        self.back_button.borrow_mut().teardown();
    }
}

#[hook]
pub fn use_navigation_sync(sync: Rc<NavigationSync>) {
    let location = use_location();
    let navigator = use_navigator();
    let path = location
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| ROOT_PATH.to_string());

    {
        let sync = sync.clone();
        use_effect_with(path, move |path| {
            sync.route_changed(path, navigator);
        });
    }

    use_effect_with((), move |_| move || sync.teardown());
}

// ============================================================================
// APP - Raíz: bootstrap de auth, contexto compartido, router
// ============================================================================
// Loading -> pantalla vacía
// Failed  -> mensaje de error a pantalla completa (sin reintento)
// Authenticated -> páginas
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{use_navigation_sync, NavigationSync, ToastHost};
use crate::context::{AppContext, AppContextProvider};
use crate::error::AppError;
use crate::hooks::use_observe;
use crate::services::{bootstrap, ButtonLease, ButtonSlot, ClickHandler, ClickTarget};
use crate::state::{AuthStatus, NavigationContext, SessionContext, SessionWriter};
use crate::utils::TelegramButton;
use crate::views::routes::{push_path, switch, Route};

/// Todo lo que la raíz posee durante la vida de la app
struct Shell {
    context: AppContext,
    session_writer: RefCell<Option<SessionWriter>>,
    navigation: Rc<NavigationSync>,
    settings_slot: ButtonSlot<TelegramButton>,
    settings_lease: RefCell<Option<ButtonLease<TelegramButton>>>,
}

impl Shell {
    fn new() -> Self {
        let (session, session_writer) = SessionContext::new();
        let (_, navigation_writer) = NavigationContext::new();
        let navigation = Rc::new(NavigationSync::new(navigation_writer));

        Self {
            context: AppContext::new(session, navigation.context()),
            session_writer: RefCell::new(Some(session_writer)),
            navigation,
            settings_slot: ButtonSlot::new(
                "SETTINGS_BUTTON",
                Rc::new(TelegramButton::settings()),
            ),
            settings_lease: RefCell::new(None),
        }
    }

    /// Botón de ajustes: se vincula una vez y vive hasta que la app se cierra
    fn bind_settings_button(&self, navigator: Option<Navigator>) {
        if self.settings_lease.borrow().is_some() {
            return;
        }
        let handler: ClickHandler = Rc::new(move || match &navigator {
            Some(navigator) => navigator.push(&Route::Settings),
            None => log::warn!("⚠️ [SETTINGS_BUTTON] no router available"),
        });
        let lease = self.settings_slot.acquire(handler);
        if let Some(host) = lease.host() {
            host.show();
        }
        *self.settings_lease.borrow_mut() = Some(lease);
        log::info!("⚙️ [SETTINGS_BUTTON] bound");
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppShell />
        </BrowserRouter>
    }
}

#[function_component(AppShell)]
fn app_shell() -> Html {
    let shell = use_memo((), |_| Shell::new());
    let context = shell.context.clone();
    let navigator = use_navigator();

    use_observe(&context.session);
    use_navigation_sync(shell.navigation.clone());

    // Bootstrap de auth, una vez por vida de la app
    {
        let shell = shell.clone();
        let navigator = navigator.clone();
        use_effect_with((), move |_| {
            let writer = shell.session_writer.borrow_mut().take();
            if let Some(writer) = writer {
                let context = shell.context.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let Ok(redirect) = bootstrap(writer, &context.api, &context.host).await else {
                        return;
                    };
                    if let Some(user) = context.session.snapshot().user().cloned() {
                        context.profile.replace(user);
                    }
                    if let (Some(target), Some(navigator)) = (redirect, navigator) {
                        push_path(&navigator, &target);
                    }
                });
            }
        });
    }

    {
        let shell = shell.clone();
        let authenticated = context.session.is_authenticated();
        use_effect_with(authenticated, move |authenticated| {
            if *authenticated {
                shell.bind_settings_button(navigator);
            }
        });
    }

    let body = match context.session.snapshot().status() {
        AuthStatus::Loading => html! { <div class="screen screen--loading" /> },
        AuthStatus::Failed => html! {
            <div class="screen screen--error">
                { AppError::AuthFailure(String::new()).user_message() }
            </div>
        },
        AuthStatus::Authenticated => html! { <Switch<Route> render={switch} /> },
    };

    html! {
        <AppContextProvider context={context}>
            <main class="app">{ body }</main>
            <ToastHost />
        </AppContextProvider>
    }
}

// ============================================================================
// APP CONTEXT - Estado compartido de toda la app (ContextProvider de Yew)
// ============================================================================
// Solo vistas de lectura: los escritores (SessionWriter, NavigationWriter)
// nunca entran en el contexto.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::error::AppError;
use crate::models::Meal;
use crate::services::{ApiClient, MainButton, WebAppHost};
use crate::state::{NavigationContext, ProfileStore, QueryStore, SessionContext, ToastStore};
use crate::utils::{TelegramButton, TelegramWebApp};

pub const MEALS_QUERY: &str = "meals";

#[derive(Clone, PartialEq)]
pub struct AppContext {
    pub session: SessionContext,
    pub navigation: NavigationContext,
    pub profile: ProfileStore,
    pub toasts: ToastStore,
    pub meals: QueryStore<Vec<Meal>>,
    pub api: ApiClient,
    pub main_button: MainButton<TelegramButton>,
    pub host: TelegramWebApp,
}

impl AppContext {
    pub fn new(session: SessionContext, navigation: NavigationContext) -> Self {
        Self {
            api: ApiClient::new(session.clone()),
            session,
            navigation,
            profile: ProfileStore::new(),
            toasts: ToastStore::default(),
            meals: QueryStore::default(),
            main_button: MainButton::new(Rc::new(TelegramButton::main())),
            host: TelegramWebApp,
        }
    }

    /// Contexto sin bootstrap detrás; su sesión nunca se resuelve
    pub fn detached() -> Self {
        let (session, _) = SessionContext::new();
        let (navigation, _) = NavigationContext::new();
        Self::new(session, navigation)
    }

    /// Toast de error + vibración háptica
    pub fn notify_error(&self, err: &AppError) {
        self.toasts.push(err.user_message());
        self.host.haptic_error();
    }
}

#[derive(Properties, PartialEq)]
pub struct AppContextProviderProps {
    pub context: AppContext,
    pub children: Children,
}

#[function_component(AppContextProvider)]
pub fn app_context_provider(props: &AppContextProviderProps) -> Html {
    html! {
        <ContextProvider<AppContext> context={props.context.clone()}>
            {props.children.clone()}
        </ContextProvider<AppContext>>
    }
}

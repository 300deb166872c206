use yew::prelude::*;

use crate::context::AppContext;

/// Contexto compartido de la app. Fuera del provider (no debería pasar) se devuelve
/// un contexto desconectado: las páginas muestran su estado de carga en vez de hacer panic.
#[hook]
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().unwrap_or_else(|| {
        log::error!("❌ [CONTEXT] AppContext provider missing");
        AppContext::detached()
    })
}

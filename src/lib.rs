// ============================================================================
// EATSOME MINI-APP - Cliente Telegram Mini-App (Yew + WASM)
// ============================================================================
// Capas:
// - Services: API REST, auth, botones del host (lógica pura, testeable)
// - State: Stores con Rc<RefCell> + notificaciones
// - Hooks/Components/Views: Yew
// - Utils: FFI con window.Telegram.WebApp
// ============================================================================

pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;

use crate::config::CONFIG;

/// Punto de entrada compartido por el binario y cualquier loader JS
pub fn run() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!(
        "🚀 Eatsome Mini-App starting ({}, backend {})",
        CONFIG.environment,
        CONFIG.backend_url
    );

    yew::Renderer::<components::App>::new().render();
}

// ============================================================================
// TELEGRAM WEBAPP FFI - Puente hacia window.Telegram.WebApp
// ============================================================================
// Sin estado, sin lógica: solo traduce los traits del host a llamadas JS.
// Un host ausente (navegador normal) se registra en el log y se ignora.
// ============================================================================

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::services::host_bridge::{ClickHandler, ClickTarget, MainButtonHost, WebAppHost};

fn web_app() -> Option<JsValue> {
    let window = web_sys::window()?;
    let telegram = get(&window, "Telegram")?;
    get(&telegram, "WebApp")
}

fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

fn call(target: &JsValue, method: &str, args: &[JsValue]) {
    let Some(function) = get(target, method).and_then(|f| f.dyn_into::<Function>().ok()) else {
        log::warn!("⚠️ [TELEGRAM] {} is not available", method);
        return;
    };
    let args: Array = args.iter().collect();
    if let Err(e) = function.apply(target, &args) {
        log::error!("❌ [TELEGRAM] {} failed: {:?}", method, e);
    }
}

/// `window.Telegram.WebApp`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TelegramWebApp;

impl TelegramWebApp {
    fn with(&self, f: impl FnOnce(&JsValue)) {
        match web_app() {
            Some(app) => f(&app),
            None => log::warn!("⚠️ [TELEGRAM] WebApp bridge not found"),
        }
    }
}

impl WebAppHost for TelegramWebApp {
    fn init_data(&self) -> String {
        web_app()
            .and_then(|app| get(&app, "initData"))
            .and_then(|data| data.as_string())
            .unwrap_or_default()
    }

    fn start_param(&self) -> Option<String> {
        let unsafe_data = get(&web_app()?, "initDataUnsafe")?;
        get(&unsafe_data, "start_param")?.as_string()
    }

    fn ready(&self) {
        self.with(|app| call(app, "ready", &[]));
    }

    fn expand(&self) {
        self.with(|app| call(app, "expand", &[]));
    }

    fn haptic_error(&self) {
        self.with(|app| {
            if let Some(haptic) = get(app, "HapticFeedback") {
                call(&haptic, "notificationOccurred", &[JsValue::from_str("error")]);
            }
        });
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostButtonKind {
    Main,
    Back,
    Settings,
}

impl HostButtonKind {
    fn property(&self) -> &'static str {
        match self {
            HostButtonKind::Main => "MainButton",
            HostButtonKind::Back => "BackButton",
            HostButtonKind::Settings => "SettingsButton",
        }
    }
}

/// Uno de los botones que renderiza el host
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TelegramButton {
    kind: HostButtonKind,
}

impl TelegramButton {
    pub fn main() -> Self {
        Self { kind: HostButtonKind::Main }
    }

    pub fn back() -> Self {
        Self { kind: HostButtonKind::Back }
    }

    pub fn settings() -> Self {
        Self { kind: HostButtonKind::Settings }
    }

    fn invoke(&self, method: &str, args: &[JsValue]) {
        match web_app().and_then(|app| get(&app, self.kind.property())) {
            Some(button) => call(&button, method, args),
            None => log::warn!("⚠️ [TELEGRAM] {} not available", self.kind.property()),
        }
    }
}

impl ClickTarget for TelegramButton {
    type Binding = Closure<dyn Fn()>;

    fn on_click(&self, handler: ClickHandler) -> Self::Binding {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn Fn()>);
        self.invoke("onClick", &[closure.as_ref().clone()]);
        closure
    }

    fn off_click(&self, binding: Self::Binding) {
        // El host compara por referencia: se devuelve el mismo objeto función
        self.invoke("offClick", &[binding.as_ref().clone()]);
    }

    fn show(&self) {
        self.invoke("show", &[]);
    }

    fn hide(&self) {
        self.invoke("hide", &[]);
    }

    fn reset(&self) {
        if self.kind == HostButtonKind::Main {
            self.invoke("hideProgress", &[]);
        }
        self.hide();
    }
}

impl MainButtonHost for TelegramButton {
    fn set_text(&self, text: &str) {
        self.invoke("setText", &[JsValue::from_str(text)]);
    }

    fn enable(&self) {
        self.invoke("enable", &[]);
    }

    fn disable(&self) {
        self.invoke("disable", &[]);
    }

    fn show_progress(&self, leave_active: bool) {
        self.invoke("showProgress", &[JsValue::from_bool(leave_active)]);
    }

    fn hide_progress(&self) {
        self.invoke("hideProgress", &[]);
    }
}

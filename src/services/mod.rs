// Servicios: comunicación con backend y con el host (Telegram)

pub mod api_client;
pub mod auth_service;
pub mod back_button;
pub mod button_slot;
pub mod host_bridge;
pub mod main_button;
pub mod request_scope;
pub mod upload_service;

pub use api_client::{ApiClient, ApiRequest, Reply};
pub use auth_service::{bootstrap, decode_start_param, AuthApi};
pub use back_button::{BackButtonState, BackButtonSync};
pub use button_slot::{ButtonLease, ButtonSlot};
pub use host_bridge::{ClickHandler, ClickTarget, MainButtonHost, WebAppHost};
pub use main_button::{MainButton, MainButtonLease};
pub use request_scope::{RequestScope, ScopeToken};

pub mod use_app_context;
pub mod use_main_button;
pub mod use_meals;
pub mod use_observe;
pub mod use_request_scope;

pub use use_app_context::use_app_context;
pub use use_main_button::{use_main_button, UseMainButtonHandle};
pub use use_meals::{use_meal, use_meals, UseMealHandle, UseMealsHandle};
pub use use_observe::use_observe;
pub use use_request_scope::use_request_scope;

// Componentes reutilizables

pub mod app;
pub mod meal_card;
pub mod nav_tabs;
pub mod navigation_sync;
pub mod toast_host;

pub use app::App;
pub use meal_card::MealCard;
pub use nav_tabs::NavTabs;
pub use navigation_sync::{use_navigation_sync, NavigationSync};
pub use toast_host::ToastHost;

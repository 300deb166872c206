// ============================================================================
// VIEWS - Páginas montadas por el router
// ============================================================================

pub mod activity;
pub mod home;
pub mod meal_detail;
pub mod not_found;
pub mod onboard;
pub mod post;
pub mod routes;
pub mod settings;
pub mod user_profile;

pub use activity::ActivityPage;
pub use home::HomePage;
pub use meal_detail::MealDetailPage;
pub use not_found::NotFoundPage;
pub use onboard::OnboardPage;
pub use post::PostPage;
pub use routes::Route;
pub use settings::SettingsPage;
pub use user_profile::UserPage;

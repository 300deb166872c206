// ============================================================================
// ROUTES - Tabla de rutas y adaptador del router para el back button
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::state::HistoryRouter;
use crate::views::{
    ActivityPage, HomePage, MealDetailPage, NotFoundPage, OnboardPage, PostPage, SettingsPage,
    UserPage,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/activity")]
    Activity,
    #[at("/post")]
    Post,
    #[at("/posts/:id")]
    PostDetail { id: i64 },
    // Destino del deep link `p<id>`
    #[at("/meals/:id")]
    MealDetail { id: i64 },
    #[at("/users/:username")]
    User { username: String },
    #[at("/settings")]
    Settings,
    #[at("/onboard")]
    Onboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Activity => html! { <ActivityPage /> },
        Route::Post => html! { <PostPage /> },
        Route::PostDetail { id } | Route::MealDetail { id } => html! { <MealDetailPage {id} /> },
        Route::User { username } => html! { <UserPage {username} /> },
        Route::Settings => html! { <SettingsPage /> },
        Route::Onboard => html! { <OnboardPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

/// Navega a una ruta cruda; las desconocidas van a la 404
pub fn push_path(navigator: &Navigator, path: &str) {
    let route = Route::recognize(path).unwrap_or(Route::NotFound);
    navigator.push(&route);
}

/// `HistoryRouter` sobre el navigator de yew-router
pub struct NavigatorRouter {
    navigator: Navigator,
}

impl NavigatorRouter {
    pub fn new(navigator: Navigator) -> Self {
        Self { navigator }
    }
}

impl HistoryRouter for NavigatorRouter {
    fn push(&self, path: &str) {
        push_path(&self.navigator, path);
    }

    fn back(&self) {
        self.navigator.back();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_every_page() {
        assert_eq!(Route::recognize("/activity"), Some(Route::Activity));
        assert_eq!(Route::recognize("/posts/7"), Some(Route::PostDetail { id: 7 }));
        assert_eq!(Route::recognize("/meals/42"), Some(Route::MealDetail { id: 42 }));
        assert_eq!(
            Route::recognize("/users/alice"),
            Some(Route::User {
                username: "alice".into()
            })
        );
        assert_eq!(Route::recognize("/onboard"), Some(Route::Onboard));
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(Route::recognize("/nope/at/all"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/meals/not-a-number"), Some(Route::NotFound));
        assert_eq!(Route::Settings.to_path(), "/settings");
    }
}

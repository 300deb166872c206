use yew::prelude::*;
use yew_router::prelude::*;

use crate::views::routes::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <section class="page page--empty">
            <h1>{ "404" }</h1>
            <p>{ "This page does not exist." }</p>
            <Link<Route> to={Route::Home}>{ "Back to the feed" }</Link<Route>>
        </section>
    }
}

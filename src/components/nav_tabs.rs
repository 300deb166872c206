use yew::prelude::*;
use yew_router::prelude::*;

use crate::views::routes::Route;

#[derive(Properties, PartialEq)]
pub struct NavTabsProps {
    pub active: Route,
}

/// Selector "Latest" / "My Activity" sobre las dos pestañas raíz
#[function_component(NavTabs)]
pub fn nav_tabs(props: &NavTabsProps) -> Html {
    let tab = |route: Route, label: &'static str| {
        let class = classes!("tab", (props.active == route).then_some("tab--active"));
        html! {
            <li role="presentation">
                <Link<Route> to={route} classes={class}>{ label }</Link<Route>>
            </li>
        }
    };

    html! {
        <nav class="tabs">
            <ul role="tablist">
                { tab(Route::Home, "Latest") }
                { tab(Route::Activity, "My Activity") }
            </ul>
        </nav>
    }
}

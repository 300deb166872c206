use yew::prelude::*;

use crate::components::MealCard;
use crate::hooks::use_meals;

#[derive(Properties, PartialEq)]
pub struct UserPageProps {
    pub username: String,
}

/// Comidas publicadas por `username`, sacadas del feed compartido
#[function_component(UserPage)]
pub fn user_page(props: &UserPageProps) -> Html {
    let feed = use_meals();

    let content = match (&feed.meals, &feed.error) {
        (_, Some(err)) => html! { <p class="page__error">{ err.user_message() }</p> },
        (None, None) => html! { <div class="skeleton" /> },
        (Some(meals), None) => {
            let authored: Vec<_> = meals
                .iter()
                .filter(|meal| meal.user.username == props.username)
                .cloned()
                .collect();
            if authored.is_empty() {
                html! { <p class="muted">{ "No meals posted yet." }</p> }
            } else {
                html! {
                    <div class="feed__column">
                        { for authored.into_iter().map(|meal| {
                            let id = meal.id;
                            html! { <MealCard key={id} {meal} show_author={false} /> }
                        }) }
                    </div>
                }
            }
        }
    };

    html! {
        <section class="page">
            <h1>{ format!("@{}", props.username) }</h1>
            { content }
        </section>
    }
}

// ============================================================================
// HOME - Feed de comidas (con redirección a onboarding)
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{MealCard, NavTabs};
use crate::hooks::{use_app_context, use_meals, use_observe};
use crate::models::Meal;
use crate::views::routes::Route;

/// Reparte el feed en dos columnas, alternando. El avatar del autor solo
/// se muestra si el autor cambia respecto a la tarjeta anterior.
pub fn split_columns(meals: &[Meal]) -> [Vec<(Meal, bool)>; 2] {
    let mut columns: [Vec<(Meal, bool)>; 2] = [Vec::new(), Vec::new()];
    let mut last_author = None;
    for column in 0..2 {
        for meal in meals.iter().skip(column).step_by(2) {
            let show_author = last_author != Some(meal.user.id);
            last_author = Some(meal.user.id);
            columns[column].push((meal.clone(), show_author));
        }
    }
    columns
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let ctx = use_app_context();
    use_observe(&ctx.profile);

    let needs_onboarding = ctx.profile.get().is_some() && !ctx.profile.is_onboarded();
    if needs_onboarding {
        log::info!("🧭 [HOME] profile incomplete, redirecting to onboarding");
        return html! { <Redirect<Route> to={Route::Onboard} /> };
    }

    html! {
        <>
            <NavTabs active={Route::Home} />
            <Feed />
        </>
    }
}

#[function_component(Feed)]
fn feed() -> Html {
    let feed = use_meals();

    if let Some(err) = &feed.error {
        return html! { <p class="page__error">{ err.user_message() }</p> };
    }

    let Some(meals) = &feed.meals else {
        return html! {
            <div class="feed feed--loading">
                <div class="skeleton" />
                <div class="skeleton" />
            </div>
        };
    };

    if meals.is_empty() {
        return html! {
            <section class="page page--empty">
                <p>{ "No meals yet." }</p>
                <Link<Route> to={Route::Post}>{ "Post the first one" }</Link<Route>>
            </section>
        };
    }

    html! {
        <section class="feed">
            { for split_columns(meals).into_iter().map(|column| html! {
                <div class="feed__column">
                    { for column.into_iter().map(|(meal, show_author)| {
                        let id = meal.id;
                        html! { <MealCard key={id} {meal} {show_author} /> }
                    }) }
                </div>
            }) }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealAuthor;
    use chrono::Utc;

    fn meal(id: i64, author: i64) -> Meal {
        Meal {
            id,
            user_id: author,
            photo_url: String::new(),
            text: None,
            dish_name: None,
            aesthetic_rating: None,
            health_rating: None,
            is_spam: false,
            food_insights: None,
            ingredients: Vec::new(),
            tags: Vec::new(),
            user: MealAuthor {
                id: author,
                username: format!("u{}", author),
                avatar_url: None,
                first_name: None,
                last_name: None,
            },
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn alternates_columns_and_collapses_repeated_authors() {
        let meals = vec![meal(1, 1), meal(2, 2), meal(3, 1), meal(4, 2), meal(5, 3)];
        let [left, right] = split_columns(&meals);

        let left_ids: Vec<i64> = left.iter().map(|(m, _)| m.id).collect();
        let right_ids: Vec<i64> = right.iter().map(|(m, _)| m.id).collect();
        assert_eq!(left_ids, vec![1, 3, 5]);
        assert_eq!(right_ids, vec![2, 4]);

        // 1 y 3 comparten autor; 4 sigue a 2 del mismo autor
        let left_flags: Vec<bool> = left.iter().map(|(_, show)| *show).collect();
        let right_flags: Vec<bool> = right.iter().map(|(_, show)| *show).collect();
        assert_eq!(left_flags, vec![true, false, true]);
        assert_eq!(right_flags, vec![true, false]);
    }
}

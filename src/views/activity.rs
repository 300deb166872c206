use chrono::Utc;
use yew::prelude::*;

use crate::components::{MealCard, NavTabs};
use crate::hooks::{use_app_context, use_meals};
use crate::models::NutritionTotals;
use crate::views::routes::Route;

#[function_component(ActivityPage)]
pub fn activity_page() -> Html {
    let ctx = use_app_context();
    let feed = use_meals();
    let today = Utc::now().date_naive();

    let content = match (&feed.meals, ctx.session.user_id()) {
        (Some(meals), Some(user_id)) => {
            let totals = NutritionTotals::for_day(meals, user_id, today);
            let mine = meals
                .iter()
                .filter(|meal| meal.user_id == user_id && meal.created_at.date_naive() == today)
                .cloned();
            html! {
                <>
                    <div class="totals">
                        <Stat label="Calories" value={totals.calories} unit="kcal" />
                        <Stat label="Proteins" value={totals.proteins} unit="g" />
                        <Stat label="Fats" value={totals.fats} unit="g" />
                        <Stat label="Carbs" value={totals.carbohydrates} unit="g" />
                    </div>
                    <p class="muted">{ format!("{} meals today", totals.meals) }</p>
                    <div class="feed__column">
                        { for mine.map(|meal| {
                            let id = meal.id;
                            html! { <MealCard key={id} {meal} show_author={false} /> }
                        }) }
                    </div>
                </>
            }
        }
        _ => match &feed.error {
            Some(err) => html! { <p class="page__error">{ err.user_message() }</p> },
            None => html! { <div class="skeleton" /> },
        },
    };

    html! {
        <>
            <NavTabs active={Route::Activity} />
            <section class="page">
                <h1>{ "Nutrition Dashboard" }</h1>
                { content }
            </section>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct StatProps {
    label: AttrValue,
    value: i32,
    unit: AttrValue,
}

#[function_component(Stat)]
fn stat(props: &StatProps) -> Html {
    html! {
        <div class="stat">
            <span class="stat__value">{ format!("{} {}", props.value, props.unit) }</span>
            <span class="stat__label">{ &props.label }</span>
        </div>
    }
}

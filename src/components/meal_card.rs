use chrono::Utc;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::models::Meal;
use crate::utils::time_since;
use crate::views::routes::Route;

#[derive(Properties, PartialEq)]
pub struct MealCardProps {
    pub meal: Meal,
    #[prop_or(true)]
    pub show_author: bool,
}

#[function_component(MealCard)]
pub fn meal_card(props: &MealCardProps) -> Html {
    let meal = &props.meal;
    let calories = meal.food_insights.map(|insights| insights.calories);

    html! {
        <Link<Route> to={Route::PostDetail { id: meal.id }} classes="meal-card">
            if props.show_author {
                <div class="meal-card__author">
                    if let Some(avatar) = meal.user.avatar_url.clone() {
                        <img class="avatar" src={avatar} alt="Avatar" />
                    }
                    <span>{ &meal.user.username }</span>
                </div>
            }
            <img class="meal-card__photo" src={meal.photo_url.clone()} alt={meal.title().to_string()} />
            <div class="meal-card__footer">
                <span class="meal-card__title">{ meal.title() }</span>
                if let Some(calories) = calories {
                    <span class="meal-card__kcal">{ format!("{} kcal", calories) }</span>
                }
                <span class="meal-card__time">{ time_since(meal.created_at, Utc::now()) }</span>
            </div>
        </Link<Route>>
    }
}

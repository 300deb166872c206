// ============================================================================
// MEAL DETAIL - /posts/:id y /meals/:id
// ============================================================================

use chrono::Utc;
use yew::prelude::*;

use crate::hooks::{use_app_context, use_meal, use_request_scope};
use crate::models::{FoodInsights, Ingredient, ReactionKind};
use crate::utils::time_since;

#[derive(Properties, PartialEq)]
pub struct MealDetailProps {
    pub id: i64,
}

#[function_component(MealDetailPage)]
pub fn meal_detail_page(props: &MealDetailProps) -> Html {
    let ctx = use_app_context();
    let scope = use_request_scope();
    let state = use_meal(props.id);
    let reaction = use_state(|| None::<ReactionKind>);

    let on_react = {
        let ctx = ctx.clone();
        let scope = scope.clone();
        let reaction = reaction.clone();
        let id = props.id;
        Callback::from(move |kind: ReactionKind| {
            let api = ctx.api.scoped(&scope);
            let token = scope.token();
            let ctx = ctx.clone();
            let reaction = reaction.clone();
            let toggling_off = *reaction == Some(kind);
            wasm_bindgen_futures::spawn_local(async move {
                let result = if toggling_off {
                    api.remove_reaction(id).await
                } else {
                    api.add_reaction(id, kind).await
                };
                if !token.is_live() {
                    return;
                }
                match result {
                    Ok(true) => reaction.set(if toggling_off { None } else { Some(kind) }),
                    Ok(false) => {}
                    Err(err) => ctx.notify_error(&err),
                }
            });
        })
    };

    if let Some(err) = &state.error {
        return html! { <p class="page__error">{ err.user_message() }</p> };
    }
    let Some(meal) = &state.meal else {
        return html! { <div class="skeleton skeleton--tall" /> };
    };

    let reaction_button = |kind: ReactionKind, label: &'static str| {
        let on_react = on_react.clone();
        let class = classes!("reaction", (*reaction == Some(kind)).then_some("reaction--active"));
        html! {
            <button {class} onclick={Callback::from(move |_| on_react.emit(kind))}>{ label }</button>
        }
    };

    html! {
        <article class="page meal">
            <img class="meal__photo" src={meal.photo_url.clone()} alt={meal.title().to_string()} />
            <header class="meal__header">
                <h1>{ meal.title() }</h1>
                <span class="muted">
                    { format!("@{} · {}", meal.user.username, time_since(meal.created_at, Utc::now())) }
                </span>
            </header>
            if let Some(text) = meal.text.clone() {
                <p class="meal__text">{ text }</p>
            }
            if let Some(insights) = meal.food_insights {
                <Insights {insights} />
            }
            if !meal.ingredients.is_empty() {
                <Ingredients ingredients={meal.ingredients.clone()} />
            }
            <div class="reactions">
                { reaction_button(ReactionKind::Frown, "🙁") }
                { reaction_button(ReactionKind::Meh, "😐") }
                { reaction_button(ReactionKind::Smile, "🙂") }
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct InsightsProps {
    insights: FoodInsights,
}

#[function_component(Insights)]
fn insights(props: &InsightsProps) -> Html {
    let i = props.insights;
    html! {
        <div class="totals">
            <div class="stat"><span class="stat__value">{ i.calories }</span><span class="stat__label">{ "kcal" }</span></div>
            <div class="stat"><span class="stat__value">{ i.proteins }</span><span class="stat__label">{ "proteins" }</span></div>
            <div class="stat"><span class="stat__value">{ i.fats }</span><span class="stat__label">{ "fats" }</span></div>
            <div class="stat"><span class="stat__value">{ i.carbohydrates }</span><span class="stat__label">{ "carbs" }</span></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct IngredientsProps {
    ingredients: Vec<Ingredient>,
}

#[function_component(Ingredients)]
fn ingredients(props: &IngredientsProps) -> Html {
    html! {
        <section class="ingredients">
            <h2>{ "Ingredients" }</h2>
            <ul>
                { for props.ingredients.iter().map(|item| html! {
                    <li>
                        <span>{ &item.name }</span>
                        <span class="muted">{ format!("{:.0} g", item.weight) }</span>
                    </li>
                }) }
            </ul>
        </section>
    }
}

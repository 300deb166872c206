// ============================================================================
// ONBOARD - Perfil corporal mínimo, guardado con el botón principal
// ============================================================================

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::error::AppError;
use crate::hooks::{use_app_context, use_main_button, use_request_scope, UseMainButtonHandle};
use crate::models::OnboardingRequest;
use crate::views::routes::Route;

const SAVE_LABEL: &str = "Save";

pub const GENDERS: [&str; 2] = ["male", "female"];
pub const GOALS: [(&str, &str); 5] = [
    ("gain_muscles", "Gain muscles"),
    ("lose_weight", "Lose weight"),
    ("track_nutrition", "Track nutrition"),
    ("improve_health", "Improve health"),
    ("count_calories", "Count calories"),
];

/// Entrada del formulario tal cual se escribió
#[derive(Clone, Debug, PartialEq)]
pub struct OnboardingForm {
    pub gender: String,
    pub age: String,
    pub weight: String,
    pub height: String,
    pub body_fat: String,
    pub goal: String,
}

impl Default for OnboardingForm {
    fn default() -> Self {
        Self {
            gender: GENDERS[0].to_string(),
            age: String::new(),
            weight: String::new(),
            height: String::new(),
            body_fat: String::new(),
            goal: String::new(),
        }
    }
}

fn invalid(field: &str) -> AppError {
    AppError::ValidationFailure(format!("Please enter a valid {}", field))
}

fn positive<T>(raw: &str, field: &str) -> Result<T, AppError>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    raw.trim()
        .parse::<T>()
        .ok()
        .filter(|value| *value > T::default())
        .ok_or_else(|| invalid(field))
}

/// Como `positive`, pero descarta `inf`/`NaN` (serde_json los envía como `null`)
fn positive_finite(raw: &str, field: &str) -> Result<f64, AppError> {
    positive::<f64>(raw, field).and_then(|value| {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(invalid(field))
        }
    })
}

impl OnboardingForm {
    pub fn to_request(&self) -> Result<OnboardingRequest, AppError> {
        if !GENDERS.contains(&self.gender.as_str()) {
            return Err(AppError::ValidationFailure("Please choose a gender".into()));
        }
        if !GOALS.iter().any(|(value, _)| *value == self.goal) {
            return Err(AppError::ValidationFailure("Please choose a goal".into()));
        }
        Ok(OnboardingRequest {
            gender: self.gender.clone(),
            age: positive(&self.age, "age")?,
            weight: positive_finite(&self.weight, "weight")?,
            height: positive_finite(&self.height, "height")?,
            fat_percentage: positive_finite(&self.body_fat, "body fat")?,
            goal: self.goal.clone(),
        })
    }
}

#[function_component(OnboardPage)]
pub fn onboard_page() -> Html {
    let ctx = use_app_context();
    let scope = use_request_scope();
    let navigator = use_navigator();
    let form = use_state(OnboardingForm::default);

    let on_save = {
        let ctx = ctx.clone();
        let scope = scope.clone();
        let form = form.clone();
        Callback::from(move |button: UseMainButtonHandle| {
            let request = match form.to_request() {
                Ok(request) => request,
                Err(err) => {
                    ctx.notify_error(&err);
                    return;
                }
            };
            let api = ctx.api.scoped(&scope);
            let token = scope.token();
            let ctx = ctx.clone();
            let navigator = navigator.clone();
            button.show_progress();
            wasm_bindgen_futures::spawn_local(async move {
                let result = api.save_onboarding(&request).await;
                if !token.is_live() {
                    return;
                }
                button.hide_progress();
                match result {
                    Ok(user) => {
                        log::info!("✅ [ONBOARD] profile saved for {}", user.username);
                        ctx.profile.replace(user);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Home);
                        }
                    }
                    Err(err) => ctx.notify_error(&err),
                }
            });
        })
    };

    let main_button = use_main_button(on_save);
    use_effect_with((), move |_| {
        main_button.enable(SAVE_LABEL);
    });

    let edit = |apply: fn(&mut OnboardingForm, String)| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let value = e
                .target_dyn_into::<HtmlInputElement>()
                .map(|input| input.value())
                .or_else(|| e.target_dyn_into::<HtmlSelectElement>().map(|s| s.value()));
            if let Some(value) = value {
                let mut next = (*form).clone();
                apply(&mut next, value);
                form.set(next);
            }
        })
    };

    html! {
        <form class="page page--onboard" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
            <h1>{ "Tell us about you" }</h1>
            <label>{ "Gender" }</label>
            <select onchange={edit(|f, v| f.gender = v)}>
                { for GENDERS.iter().map(|g| html! {
                    <option value={*g} selected={form.gender == *g}>{ *g }</option>
                }) }
            </select>
            <label>{ "Age" }</label>
            <input type="number" inputmode="numeric" value={form.age.clone()} onchange={edit(|f, v| f.age = v)} />
            <label>{ "Weight, kg" }</label>
            <input type="number" inputmode="decimal" value={form.weight.clone()} onchange={edit(|f, v| f.weight = v)} />
            <label>{ "Height, cm" }</label>
            <input type="number" inputmode="decimal" value={form.height.clone()} onchange={edit(|f, v| f.height = v)} />
            <label>{ "Body fat, %" }</label>
            <input type="number" inputmode="decimal" value={form.body_fat.clone()} onchange={edit(|f, v| f.body_fat = v)} />
            <label>{ "Goal" }</label>
            <select onchange={edit(|f, v| f.goal = v)}>
                <option value="" selected={form.goal.is_empty()} disabled={true}>{ "Choose a goal" }</option>
                { for GOALS.iter().map(|(value, label)| html! {
                    <option value={*value} selected={form.goal == *value}>{ *label }</option>
                }) }
            </select>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> OnboardingForm {
        OnboardingForm {
            gender: "female".into(),
            age: "29".into(),
            weight: " 61.5 ".into(),
            height: "170".into(),
            body_fat: "24".into(),
            goal: "lose_weight".into(),
        }
    }

    #[test]
    fn complete_form_builds_request() {
        let request = filled().to_request().unwrap();
        assert_eq!(request.age, 29);
        assert_eq!(request.weight, 61.5);
        assert_eq!(request.fat_percentage, 24.0);
        assert_eq!(request.goal, "lose_weight");
    }

    #[test]
    fn rejects_missing_or_nonsense_values() {
        let mut form = filled();
        form.goal.clear();
        assert!(matches!(form.to_request(), Err(AppError::ValidationFailure(_))));

        let mut form = filled();
        form.age = "0".into();
        assert_eq!(
            form.to_request().unwrap_err().user_message(),
            "Please enter a valid age"
        );

        let mut form = filled();
        form.height = "tall".into();
        assert!(form.to_request().is_err());

        let mut form = filled();
        form.body_fat.clear();
        assert_eq!(
            form.to_request().unwrap_err().user_message(),
            "Please enter a valid body fat"
        );
    }

    #[test]
    fn rejects_non_finite_measurements() {
        for raw in ["inf", "infinity", "NaN"] {
            let mut form = filled();
            form.weight = raw.into();
            assert!(matches!(form.to_request(), Err(AppError::ValidationFailure(_))), "{}", raw);
        }
    }
}

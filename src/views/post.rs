// ============================================================================
// POST - Publicar una comida (foto + texto) con el botón principal
// ============================================================================
// Sin foto: botón "Save" inactivo. Con foto: activo.
// Guardando: inactivo + progreso; al terminar vuelve a activo.
// ============================================================================

use web_sys::{File, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::MEALS_QUERY;
use crate::hooks::{use_app_context, use_main_button, use_request_scope, UseMainButtonHandle};
use crate::services::upload_service::{publish_meal, validate_file};
use crate::views::routes::Route;

const SAVE_LABEL: &str = "Save";

#[function_component(PostPage)]
pub fn post_page() -> Html {
    let ctx = use_app_context();
    let scope = use_request_scope();
    let navigator = use_navigator();
    let file = use_state(|| None::<File>);
    let text = use_state(String::new);
    let saving = use_mut_ref(|| false);

    let on_save = {
        let ctx = ctx.clone();
        let scope = scope.clone();
        let file = file.clone();
        let text = text.clone();
        Callback::from(move |button: UseMainButtonHandle| {
            let Some(picked) = (*file).clone() else {
                return;
            };
            if std::mem::replace(&mut *saving.borrow_mut(), true) {
                return;
            }
            button.disable(SAVE_LABEL);
            button.show_progress();

            let api = ctx.api.scoped(&scope);
            let token = scope.token();
            let ctx = ctx.clone();
            let caption = Some((*text).clone());
            let saving = saving.clone();
            let navigator = navigator.clone();
            let file = file.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = publish_meal(&api, &picked, caption).await;
                *saving.borrow_mut() = false;
                if !token.is_live() {
                    log::debug!("🛑 [POST] page gone, dropping result");
                    return;
                }
                button.enable(SAVE_LABEL);
                button.hide_progress();
                match result {
                    Ok(meal) => {
                        log::info!("✅ [POST] meal {} created", meal.id);
                        ctx.meals.invalidate(MEALS_QUERY);
                        file.set(None);
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

    {
        let main_button = main_button.clone();
        let has_file = file.is_some();
        use_effect_with(has_file, move |has_file| {
            if *has_file {
                main_button.enable(SAVE_LABEL);
            } else {
                main_button.disable(SAVE_LABEL);
            }
        });
    }

    let on_file = {
        let ctx = ctx.clone();
        let file = file.clone();
        Callback::from(move |e: Event| {
            let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let Some(picked) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            match validate_file(&picked) {
                Ok(()) => file.set(Some(picked)),
                Err(err) => {
                    input.set_value("");
                    ctx.notify_error(&err);
                }
            }
        })
    };

    let on_text = {
        let text = text.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                text.set(area.value());
            }
        })
    };

    html! {
        <section class="page page--post">
            <label class="picker">
                <input type="file" accept="image/*" onchange={on_file} />
                {
                    match &*file {
                        Some(picked) => html! { <span>{ picked.name() }</span> },
                        None => html! { <span class="muted">{ "Tap to choose a photo" }</span> },
                    }
                }
            </label>
            <textarea
                placeholder="What did you eat?"
                value={(*text).clone()}
                oninput={on_text}
            />
        </section>
    }
}

// ============================================================================
// SETTINGS - Notificaciones + idioma, guardado con el botón principal
// ============================================================================

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::{use_app_context, use_main_button, use_request_scope, UseMainButtonHandle};
use crate::models::{User, UserSettingsRequest};

const SAVE_LABEL: &str = "Save changes";
pub const LANGUAGES: [(&str, &str); 2] = [("en", "English"), ("ru", "Русский")];

/// Códigos de idioma desconocidos caen a inglés
pub fn normalize_language(code: &str) -> String {
    LANGUAGES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(known, _)| known.to_string())
        .unwrap_or_else(|| LANGUAGES[0].0.to_string())
}

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let ctx = use_app_context();
    let scope = use_request_scope();
    let profile = ctx.profile.get();

    let notifications = use_state(|| {
        profile
            .as_ref()
            .is_some_and(|user| user.notifications_enabled)
    });
    let language = use_state(|| {
        normalize_language(profile.as_ref().map_or("en", |user| user.language_code()))
    });

    let signed_in_as = profile.as_ref().map(User::display_name);

    let on_save = {
        let ctx = ctx.clone();
        let scope = scope.clone();
        let notifications = notifications.clone();
        let language = language.clone();
        Callback::from(move |button: UseMainButtonHandle| {
            let request = UserSettingsRequest {
                notifications_enabled: *notifications,
                language: (*language).clone(),
            };
            let api = ctx.api.scoped(&scope);
            let token = scope.token();
            let ctx = ctx.clone();
            button.show_progress();
            wasm_bindgen_futures::spawn_local(async move {
                let result = api.update_settings(&request).await;
                if !token.is_live() {
                    return;
                }
                button.hide_progress();
                match result {
                    Ok(user) => {
                        log::info!("✅ [SETTINGS] saved (language {})", user.language_code());
                        ctx.profile.replace(user);
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

    let on_toggle = {
        let notifications = notifications.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                notifications.set(input.checked());
            }
        })
    };

    let on_language = {
        let language = language.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                language.set(normalize_language(&select.value()));
            }
        })
    };

    html! {
        <form class="page page--settings" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
            if let Some(name) = signed_in_as {
                <p class="muted">{ format!("Signed in as {}", name) }</p>
            }
            <label class="toggle">
                <span>{ "Notifications" }</span>
                <input type="checkbox" checked={*notifications} onchange={on_toggle} />
            </label>
            <label for="language">{ "Language" }</label>
            <select id="language" onchange={on_language}>
                { for LANGUAGES.iter().map(|(code, name)| html! {
                    <option value={*code} selected={*language == *code}>{ *name }</option>
                }) }
            </select>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_supported_languages_are_sent() {
        assert_eq!(normalize_language("ru"), "ru");
        assert_eq!(normalize_language("en"), "en");
        assert_eq!(normalize_language("de"), "en");
        assert_eq!(normalize_language(""), "en");
    }
}

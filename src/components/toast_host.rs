use yew::prelude::*;

use crate::hooks::{use_app_context, use_observe};

/// Renderiza los toasts visibles, el más nuevo al final
#[function_component(ToastHost)]
pub fn toast_host() -> Html {
    let ctx = use_app_context();
    use_observe(&ctx.toasts);

    html! {
        <div class="toasts">
            { for ctx.toasts.snapshot().into_iter().map(|toast| html! {
                <div key={toast.id} class="toast">
                    <span class="toast__icon">{ "!" }</span>
                    { toast.message }
                </div>
            }) }
        </div>
    }
}

use std::rc::Rc;

use yew::prelude::*;

use crate::services::RequestScope;

/// Scope de peticiones ligado al componente: se aborta al desmontar.
#[hook]
pub fn use_request_scope() -> Rc<RequestScope> {
    let scope = use_memo((), |_| RequestScope::new());
    {
        let scope = scope.clone();
        use_effect_with((), move |_| move || scope.abort());
    }
    scope
}

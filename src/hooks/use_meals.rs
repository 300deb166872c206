// ============================================================================
// USE MEALS HOOK - Feed de comidas a través de la caché de consultas
// ============================================================================
// Fresco (< stale window): se sirve desde caché sin red.
// Viejo o ausente: un solo fetch a la vez (de-duplicación por clave).
// ============================================================================

use yew::prelude::*;

use crate::context::MEALS_QUERY;
use crate::error::AppError;
use crate::hooks::{use_app_context, use_observe, use_request_scope};
use crate::models::Meal;
use crate::services::ApiClient;
use crate::state::QueryStore;

#[derive(Clone, PartialEq)]
pub struct UseMealsHandle {
    pub meals: Option<Vec<Meal>>,
    pub error: Option<AppError>,
}

impl UseMealsHandle {
    pub fn is_loading(&self) -> bool {
        self.meals.is_none() && self.error.is_none()
    }
}

/// Lanza el fetch del feed salvo que la caché esté fresca o ya haya uno en curso.
/// El feed es de toda la app: ni la petición ni su error pertenecen a la página
/// que lo inició, el resultado (o el fallo) queda en el store para todos.
fn refresh_meals(store: QueryStore<Vec<Meal>>, api: ApiClient) {
    if store.get_fresh(MEALS_QUERY, js_sys::Date::now()).is_some() {
        log::debug!("📦 [QUERY] meals served from cache");
        return;
    }
    if !store.try_begin(MEALS_QUERY) {
        log::debug!("⏳ [QUERY] meals fetch already in flight");
        return;
    }

    wasm_bindgen_futures::spawn_local(async move {
        match api.list_meals().await {
            Ok(meals) => {
                log::info!("✅ [QUERY] {} meals loaded", meals.len());
                store.store(MEALS_QUERY, meals, js_sys::Date::now());
            }
            Err(err) => store.fail(MEALS_QUERY, err),
        }
    });
}

#[hook]
pub fn use_meals() -> UseMealsHandle {
    let ctx = use_app_context();
    use_observe(&ctx.meals);

    {
        let store = ctx.meals.clone();
        let api = ctx.api.clone();
        use_effect_with((), move |_| {
            refresh_meals(store, api);
        });
    }

    UseMealsHandle {
        meals: ctx.meals.get_any(MEALS_QUERY),
        error: ctx.meals.error(MEALS_QUERY),
    }
}

#[derive(Clone, PartialEq)]
pub struct UseMealHandle {
    pub meal: Option<Meal>,
    pub error: Option<AppError>,
}

/// Una comida: del feed en caché si está, si no se pide
/// dentro del scope de la página.
#[hook]
pub fn use_meal(id: i64) -> UseMealHandle {
    let ctx = use_app_context();
    let scope = use_request_scope();
    let fetched = use_state(|| None::<Meal>);
    let error = use_state(|| None::<AppError>);

    let cached = ctx
        .meals
        .get_any(MEALS_QUERY)
        .and_then(|meals| meals.into_iter().find(|meal| meal.id == id));

    {
        let api = ctx.api.scoped(&scope);
        let token = scope.token();
        let fetched = fetched.clone();
        let error = error.clone();
        let needs_fetch = cached.is_none();
        use_effect_with(id, move |id| {
            if needs_fetch {
                let id = *id;
                wasm_bindgen_futures::spawn_local(async move {
                    let result = api.get_meal(id).await;
                    if !token.is_live() {
                        log::debug!("🛑 [API] dropping meal {} response after teardown", id);
                        return;
                    }
                    match result {
                        Ok(meal) => fetched.set(Some(meal)),
                        Err(err) => error.set(Some(err)),
                    }
                });
            }
        });
    }

    UseMealHandle {
        meal: cached.or_else(|| (*fetched).clone().filter(|meal| meal.id == id)),
        error: (*error).clone(),
    }
}

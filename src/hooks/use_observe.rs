// ============================================================================
// USE OBSERVE - Re-render cuando cambia un store compartido
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::state::Observable;

#[hook]
pub fn use_observe<S>(source: &S)
where
    S: Observable + Clone + PartialEq + 'static,
{
    let force_update = use_force_update();
    use_effect_with(source.clone(), move |source| {
        let id = source.observe(Rc::new(move || force_update.force_update()));
        let source = source.clone();
        move || source.unobserve(id)
    });
}

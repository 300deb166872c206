// ============================================================================
// REQUEST SCOPE - Cancelación de peticiones ligada a la vida de una página
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use web_sys::{AbortController, AbortSignal};

/// Dueño de las peticiones de una página. Al soltar el scope se abortan,
/// y cualquier respuesta que aún llegue se considera obsoleta.
pub struct RequestScope {
    alive: Rc<Cell<bool>>,
    controller: Option<AbortController>,
}

/// Handle barato que los futures consultan antes de aplicar una respuesta
#[derive(Clone)]
pub struct ScopeToken {
    alive: Rc<Cell<bool>>,
}

impl ScopeToken {
    pub fn is_live(&self) -> bool {
        self.alive.get()
    }
}

impl RequestScope {
    /// Scope respaldado por un `AbortController` del navegador
    pub fn new() -> Self {
        let controller = match AbortController::new() {
            Ok(controller) => Some(controller),
            Err(e) => {
                log::warn!("⚠️ [SCOPE] AbortController unavailable: {:?}", e);
                None
            }
        };
        Self {
            alive: Rc::new(Cell::new(true)),
            controller,
        }
    }

    /// Scope sin controller: las respuestas se descartan igual tras el
    /// desmontaje, las peticiones simplemente terminan.
    pub fn detached() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
            controller: None,
        }
    }

    pub fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(AbortController::signal)
    }

    pub fn token(&self) -> ScopeToken {
        ScopeToken {
            alive: self.alive.clone(),
        }
    }

    pub fn is_live(&self) -> bool {
        self.alive.get()
    }

    pub fn abort(&self) {
        if !self.alive.replace(false) {
            return;
        }
        if let Some(controller) = &self.controller {
            log::debug!("🛑 [SCOPE] Aborting in-flight requests");
            controller.abort();
        }
    }
}

impl Default for RequestScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RequestScope {
    fn drop(&mut self) {
        self.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_goes_stale_when_scope_drops() {
        let scope = RequestScope::detached();
        let token = scope.token();
        assert!(token.is_live());
        drop(scope);
        assert!(!token.is_live());
    }

    #[test]
    fn abort_is_idempotent() {
        let scope = RequestScope::detached();
        let token = scope.token();
        scope.abort();
        scope.abort();
        assert!(!token.is_live());
        assert!(scope.signal().is_none());
    }
}

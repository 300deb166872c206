// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod navigation_state;
pub mod profile_state;
pub mod query_cache;
pub mod reactivity;
pub mod session_state;
pub mod toast_state;

pub use navigation_state::*;
pub use profile_state::*;
pub use query_cache::*;
pub use reactivity::*;
pub use session_state::*;
pub use toast_state::*;

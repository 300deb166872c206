// ============================================================================
// AUTH SERVICE - Bootstrap de sesión
// ============================================================================
// init data del host -> POST /auth/telegram -> { user, token }
// Se ejecuta una vez; el SessionWriter se consume al resolver.
// ============================================================================

use url::form_urlencoded;

use crate::error::AppError;
use crate::models::AuthResponse;
use crate::services::host_bridge::WebAppHost;
use crate::state::SessionWriter;

/// Los start params de la forma `p<id>` abren una comida directamente
pub const START_PARAM_MARKER: &str = "p";

/// Traduce un start param a la ruta del deep link.
///
/// `"p42"` → `/meals/42`. Sin marcador, solo el marcador, o sin
/// parámetro: `None`.
pub fn decode_start_param(param: Option<&str>) -> Option<String> {
    let rest = param?.strip_prefix(START_PARAM_MARKER)?;
    if rest.is_empty() {
        return None;
    }
    Some(format!("/meals/{}", rest))
}

/// Vista parseada del init data. El string crudo es lo que valida
/// el backend, así que se guarda tal cual.
#[derive(Clone, Debug, PartialEq)]
pub struct InitData {
    raw: String,
    pairs: Vec<(String, String)>,
}

impl InitData {
    pub fn parse(raw: &str) -> Self {
        let pairs = form_urlencoded::parse(raw.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self {
            raw: raw.to_string(),
            pairs,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.trim().is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn start_param(&self) -> Option<&str> {
        self.get("start_param").filter(|value| !value.is_empty())
    }
}

/// Intercambio de init data por token de sesión
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn authenticate(&self, init_data: &str) -> Result<AuthResponse, AppError>;
}

/// Ejecuta el bootstrap de auth hasta el final.
///
/// Devuelve la redirección única si todo va bien. Ante cualquier fallo la
/// sesión queda fallida y se devuelve el error; no hay reintento.
pub async fn bootstrap<A, H>(
    writer: SessionWriter,
    api: &A,
    host: &H,
) -> Result<Option<String>, AppError>
where
    A: AuthApi,
    H: WebAppHost,
{
    let init_data = InitData::parse(&host.init_data());

    if init_data.is_empty() {
        log::error!("❌ [AUTH] No init data from host, cannot authenticate");
        writer.settle_failed();
        return Err(AppError::AuthFailure("empty init data".into()));
    }

    log::info!("🔐 [AUTH] Authenticating with host init data...");
    let response = match api.authenticate(init_data.raw()).await {
        Ok(response) => response,
        Err(err) => {
            log::error!("❌ [AUTH] {}", err);
            writer.settle_failed();
            return Err(err);
        }
    };

    writer.settle_authenticated(response.user, response.token);
    host.ready();
    host.expand();

    let start_param = host
        .start_param()
        .or_else(|| init_data.start_param().map(str::to_string));
    let redirect = decode_start_param(start_param.as_deref());
    if let Some(target) = &redirect {
        log::info!("🔗 [AUTH] Start parameter redirects to {}", target);
    }
    Ok(redirect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use crate::services::host_bridge::testing::FakeWebApp;
    use crate::state::SessionContext;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    struct FakeAuthApi {
        result: Result<AuthResponse, AppError>,
        calls: Cell<u32>,
        seen_init_data: RefCell<Option<String>>,
        session: SessionContext,
        loading_while_in_flight: Cell<bool>,
    }

    impl FakeAuthApi {
        fn new(session: SessionContext, result: Result<AuthResponse, AppError>) -> Self {
            Self {
                result,
                calls: Cell::new(0),
                seen_init_data: RefCell::new(None),
                session,
                loading_while_in_flight: Cell::new(false),
            }
        }
    }

    impl AuthApi for FakeAuthApi {
        async fn authenticate(&self, init_data: &str) -> Result<AuthResponse, AppError> {
            self.calls.set(self.calls.get() + 1);
            *self.seen_init_data.borrow_mut() = Some(init_data.to_string());
            self.loading_while_in_flight
                .set(self.session.is_loading() && !self.session.is_authenticated());
            self.result.clone()
        }
    }

    fn success() -> Result<AuthResponse, AppError> {
        Ok(AuthResponse {
            token: "jwt".into(),
            user: User {
                id: 7,
                username: "lena".into(),
                ..Default::default()
            },
        })
    }

    fn host(init_data: &str, start_param: Option<&str>) -> FakeWebApp {
        FakeWebApp {
            init_data: init_data.to_string(),
            start_param: start_param.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn start_param_decoding() {
        assert_eq!(decode_start_param(Some("p42")), Some("/meals/42".to_string()));
        assert_eq!(decode_start_param(Some("abc")), None);
        assert_eq!(decode_start_param(None), None);
        assert_eq!(decode_start_param(Some("p")), None);
    }

    #[test]
    fn success_settles_session_and_signals_host() {
        let (session, writer) = SessionContext::new();
        let api = FakeAuthApi::new(session.clone(), success());
        let host = host("query_id=1&hash=abc", Some("p42"));

        let redirect = block_on(bootstrap(writer, &api, &host)).unwrap();

        assert!(api.loading_while_in_flight.get());
        assert!(session.is_authenticated());
        assert!(!session.is_loading());
        assert_eq!(session.token().as_deref(), Some("jwt"));
        assert_eq!(session.user_id(), Some(7));
        assert_eq!(host.ready_calls.get(), 1);
        assert_eq!(host.expand_calls.get(), 1);
        assert_eq!(redirect.as_deref(), Some("/meals/42"));
        assert_eq!(api.seen_init_data.borrow().as_deref(), Some("query_id=1&hash=abc"));
    }

    #[test]
    fn start_param_falls_back_to_init_data_field() {
        let (session, writer) = SessionContext::new();
        let api = FakeAuthApi::new(session, success());
        let host = host("start_param=p9&hash=abc", None);

        let redirect = block_on(bootstrap(writer, &api, &host)).unwrap();
        assert_eq!(redirect.as_deref(), Some("/meals/9"));
    }

    #[test]
    fn backend_rejection_settles_failed_without_retry() {
        let (session, writer) = SessionContext::new();
        let api = FakeAuthApi::new(
            session.clone(),
            Err(AppError::AuthFailure("HTTP 401".into())),
        );
        let host = host("hash=forged", Some("p1"));

        let result = block_on(bootstrap(writer, &api, &host));

        assert!(matches!(result, Err(AppError::AuthFailure(_))));
        assert_eq!(api.calls.get(), 1);
        assert!(!session.is_authenticated());
        assert!(!session.is_loading());
        assert_eq!(host.ready_calls.get(), 0);
    }

    #[test]
    fn empty_init_data_fails_without_network() {
        let (session, writer) = SessionContext::new();
        let api = FakeAuthApi::new(session.clone(), success());
        let host = host("  ", None);

        let result = block_on(bootstrap(writer, &api, &host));

        assert!(result.is_err());
        assert_eq!(api.calls.get(), 0);
        assert!(session.snapshot().is_failed());
    }

    #[test]
    fn init_data_exposes_fields() {
        let data = InitData::parse("user=%7B%22id%22%3A1%7D&start_param=p3&hash=x");
        assert_eq!(data.get("user"), Some(r#"{"id":1}"#));
        assert_eq!(data.start_param(), Some("p3"));
        assert_eq!(data.get("missing"), None);
    }
}

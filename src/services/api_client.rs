// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP
// ============================================================================
// Bearer token desde la sesión, cuerpos JSON / multipart, errores tipados.
// Cada endpoint tiene su tipo de respuesta; una forma inesperada es un
// RequestFailure, nunca un valor sin tipo.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use web_sys::AbortSignal;

use crate::config::CONFIG;
use crate::error::AppError;
use crate::models::{
    AuthResponse, CreateMealRequest, Meal, OnboardingRequest, PresignedUrlRequest,
    PresignedUrlResponse, ReactionKind, User, UserSettingsRequest,
};
use crate::services::auth_service::AuthApi;
use crate::services::request_scope::RequestScope;
use crate::state::SessionContext;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    fn is_idempotent_read(&self) -> bool {
        matches!(self, HttpMethod::Get)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(Vec<(String, String)>),
}

#[derive(Clone, Debug)]
pub struct ApiRequest {
    endpoint: String,
    method: HttpMethod,
    body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method,
            body: RequestBody::Empty,
        }
    }

    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, endpoint)
    }

    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, endpoint)
    }

    pub fn put(endpoint: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, endpoint)
    }

    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, endpoint)
    }

    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, AppError> {
        let value = serde_json::to_value(body)
            .map_err(|e| AppError::network(format!("Serialization error: {}", e)))?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    pub fn multipart(mut self, fields: Vec<(String, String)>) -> Self {
        self.body = RequestBody::Multipart(fields);
        self
    }
}

/// Resultado correcto de una llamada: cuerpo parseado o 204 No Content
#[derive(Clone, Debug, PartialEq)]
pub enum Reply<T> {
    NoContent,
    Body(T),
}

impl<T> Reply<T> {
    /// 2xx sin cuerpo significa "hecho"; quien solo necesita confirmación recibe `true`
    pub fn acknowledged(&self) -> bool {
        true
    }

    pub fn into_body(self) -> Result<T, AppError> {
        match self {
            Reply::Body(body) => Ok(body),
            Reply::NoContent => Err(AppError::request(204, "Expected a response body")),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Convierte una respuesta HTTP cruda en el resultado tipado del endpoint.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<Reply<T>, AppError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|err| err.message)
            .or_else(|| {
                let trimmed = body.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .unwrap_or_else(|| format!("HTTP {}", status));
        return Err(AppError::request(status, message));
    }

    if status == 204 {
        return Ok(Reply::NoContent);
    }

    serde_json::from_str::<T>(body)
        .map(Reply::Body)
        .map_err(|e| AppError::request(status, format!("Unexpected response shape: {}", e)))
}

/// Decodifica un endpoint que responde sin cuerpo útil
pub fn decode_ack(status: u16, body: &str) -> Result<bool, AppError> {
    decode_response::<serde_json::Value>(status, body).map(|reply| reply.acknowledged())
}

/// Las lecturas se reintentan como mucho `max_retries` veces, solo en error de red o 5xx
pub fn should_retry(method: HttpMethod, err: &AppError, attempt: u32, max_retries: u32) -> bool {
    method.is_idempotent_read()
        && attempt < max_retries
        && (err.is_network() || err.is_server_error())
}

/// Cliente API - stateless salvo el token (leído de la sesión)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: SessionContext,
    signal: Option<AbortSignal>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.session == other.session
    }
}

impl ApiClient {
    pub fn new(session: SessionContext) -> Self {
        Self {
            base_url: CONFIG.backend_url.clone(),
            session,
            signal: None,
        }
    }

    /// Copia del cliente cuyas peticiones se abortan al terminar `scope`
    pub fn scoped(&self, scope: &RequestScope) -> Self {
        Self {
            signal: scope.signal(),
            ..self.clone()
        }
    }

    fn is_aborted(&self) -> bool {
        self.signal.as_ref().is_some_and(AbortSignal::aborted)
    }

    fn builder(&self, method: HttpMethod, url: &str) -> RequestBuilder {
        let builder = match method {
            HttpMethod::Get => Request::get(url),
            HttpMethod::Post => Request::post(url),
            HttpMethod::Put => Request::put(url),
            HttpMethod::Delete => Request::delete(url),
        };
        builder.abort_signal(self.signal.as_ref())
    }

    fn build(&self, request: &ApiRequest) -> Result<Request, AppError> {
        let url = format!("{}/api{}", self.base_url, request.endpoint);
        let mut builder = self.builder(request.method, &url);

        if let Some(token) = self.session.token() {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let built = match &request.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Multipart(fields) => {
                let form = web_sys::FormData::new()
                    .map_err(|e| AppError::network(format!("FormData error: {:?}", e)))?;
                for (key, value) in fields {
                    form.append_with_str(key, value)
                        .map_err(|e| AppError::network(format!("FormData error: {:?}", e)))?;
                }
                builder.body(form)
            }
        };
        built.map_err(|e| AppError::network(format!("Request build error: {}", e)))
    }

    async fn send_once(&self, request: &ApiRequest) -> Result<(u16, String), AppError> {
        let response = self
            .build(request)?
            .send()
            .await
            .map_err(|e| AppError::network(format!("Network error: {}", e)))?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok((status, body))
    }

    async fn send_raw(&self, request: &ApiRequest) -> Result<(u16, String), AppError> {
        let mut attempt = 0;
        loop {
            let result = self.send_once(request).await;
            let failure = match &result {
                Ok((status, body)) if *status >= 500 => Some(AppError::request(*status, body.clone())),
                Err(err) => Some(err.clone()),
                Ok(_) => None,
            };
            match failure {
                Some(err)
                    if !self.is_aborted()
                        && should_retry(request.method, &err, attempt, CONFIG.retry_attempts) =>
                {
                    attempt += 1;
                    log::warn!("🔁 [API] {} failed ({}), retry {}", request.endpoint, err, attempt);
                }
                _ => return result,
            }
        }
    }

    /// Envía la petición y decodifica la respuesta en `T`
    pub async fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<Reply<T>, AppError> {
        log::debug!("🌐 [API] {:?} {}", request.method, request.endpoint);
        let (status, body) = self.send_raw(&request).await?;
        let decoded = decode_response(status, &body);
        if let Err(err) = &decoded {
            log::error!("❌ [API] {:?} {}: {}", request.method, request.endpoint, err);
        }
        decoded
    }

    async fn fetch_ack(&self, request: ApiRequest) -> Result<bool, AppError> {
        let (status, body) = self.send_raw(&request).await?;
        decode_ack(status, &body)
    }

    pub async fn list_meals(&self) -> Result<Vec<Meal>, AppError> {
        // El backend codifica la lista vacía como null
        let meals: Option<Vec<Meal>> = self.fetch(ApiRequest::get("/meals")).await?.into_body()?;
        Ok(meals.unwrap_or_default())
    }

    pub async fn get_meal(&self, id: i64) -> Result<Meal, AppError> {
        self.fetch(ApiRequest::get(format!("/meals/{}", id)))
            .await?
            .into_body()
    }

    pub async fn create_meal(&self, meal: &CreateMealRequest) -> Result<Meal, AppError> {
        self.fetch(ApiRequest::post("/meals").json(meal)?)
            .await?
            .into_body()
    }

    pub async fn presigned_url(&self, file_name: &str) -> Result<PresignedUrlResponse, AppError> {
        let request = PresignedUrlRequest {
            file_name: file_name.to_string(),
        };
        self.fetch(ApiRequest::post("/presigned-url").json(&request)?)
            .await?
            .into_body()
    }

    pub async fn add_reaction(&self, id: i64, kind: ReactionKind) -> Result<bool, AppError> {
        self.fetch_ack(ApiRequest::post(format!("/meals/{}/react/{}", id, kind.as_str())))
            .await
    }

    pub async fn remove_reaction(&self, id: i64) -> Result<bool, AppError> {
        self.fetch_ack(ApiRequest::delete(format!("/meals/{}/react", id)))
            .await
    }

    pub async fn update_settings(&self, settings: &UserSettingsRequest) -> Result<User, AppError> {
        self.fetch(ApiRequest::put("/users/settings").json(settings)?)
            .await?
            .into_body()
    }

    pub async fn save_onboarding(&self, data: &OnboardingRequest) -> Result<User, AppError> {
        self.fetch(ApiRequest::post("/users/onboard").json(data)?)
            .await?
            .into_body()
    }
}

impl AuthApi for ApiClient {
    async fn authenticate(&self, init_data: &str) -> Result<AuthResponse, AppError> {
        // El init data ya es un query string; va al backend tal cual
        let url = format!("{}/auth/telegram?{}", self.base_url, init_data);
        log::info!("🔐 [API] POST /auth/telegram");

        let response = Request::post(&url)
            .send()
            .await
            .map_err(|e| AppError::AuthFailure(format!("Network error: {}", e)))?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        decode_response::<AuthResponse>(status, &body)
            .and_then(Reply::into_body)
            .map_err(|e| AppError::AuthFailure(e.to_string()))
    }
}

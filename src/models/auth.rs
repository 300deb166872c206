use serde::{Deserialize, Serialize};

use super::user::User;

/// Cuerpo de `POST /auth/telegram`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

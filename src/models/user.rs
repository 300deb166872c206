use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub notifications_enabled: bool,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub fat_percentage: Option<f64>,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// El onboarding está completo cuando el perfil corporal está relleno.
    pub fn is_onboarded(&self) -> bool {
        self.age.is_some()
            && self.weight.is_some()
            && self.height.is_some()
            && self.fat_percentage.is_some()
            && self.goal.as_deref().is_some_and(|g| !g.is_empty())
            && self.gender.as_deref().is_some_and(|g| !g.is_empty())
    }

    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            _ => self.username.clone(),
        }
    }

    pub fn language_code(&self) -> &str {
        self.language.as_deref().unwrap_or("en")
    }
}

/// Cuerpo de `PUT /api/users/settings`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UserSettingsRequest {
    pub notifications_enabled: bool,
    pub language: String,
}

/// Cuerpo de `POST /api/users/onboard`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct OnboardingRequest {
    pub gender: String,
    pub age: u32,
    pub weight: f64,
    pub height: f64,
    pub fat_percentage: f64,
    pub goal: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_user_with_missing_optionals() {
        let json = r#"{"id": 7, "username": "alice", "notifications_enabled": true}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 7);
        assert!(user.notifications_enabled);
        assert_eq!(user.language_code(), "en");
        assert!(!user.is_onboarded());
    }

    #[test]
    fn onboarded_requires_full_profile() {
        let mut user = User {
            username: "bob".into(),
            age: Some(30),
            weight: Some(70.0),
            height: Some(180.0),
            fat_percentage: Some(18.5),
            goal: Some("lose".into()),
            gender: Some("male".into()),
            ..Default::default()
        };
        assert!(user.is_onboarded());

        user.fat_percentage = None;
        assert!(!user.is_onboarded());

        user.fat_percentage = Some(18.5);
        user.goal = Some(String::new());
        assert!(!user.is_onboarded());
    }

    #[test]
    fn display_name_prefers_real_name() {
        let user = User {
            username: "carol".into(),
            first_name: Some("Carol".into()),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "Carol");
    }
}

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Meal {
    pub id: i64,
    pub user_id: i64,
    pub photo_url: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub dish_name: Option<String>,
    #[serde(default)]
    pub aesthetic_rating: Option<i32>,
    #[serde(default)]
    pub health_rating: Option<i32>,
    #[serde(default)]
    pub is_spam: bool,
    #[serde(default)]
    pub food_insights: Option<FoodInsights>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub user: MealAuthor,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Meal {
    pub fn title(&self) -> &str {
        self.dish_name.as_deref().unwrap_or("Meal")
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct MealAuthor {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct FoodInsights {
    pub calories: i32,
    pub proteins: i32,
    pub fats: i32,
    pub carbohydrates: i32,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub weight: f64,
}

/// Cuerpo de `POST /api/meals`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CreateMealRequest {
    pub photo: String,
    pub text: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PresignedUrlRequest {
    pub file_name: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PresignedUrlResponse {
    pub file_name: String,
    pub url: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ReactionKind {
    Frown,
    Meh,
    Smile,
}

impl ReactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionKind::Frown => "frown",
            ReactionKind::Meh => "meh",
            ReactionKind::Smile => "smile",
        }
    }
}

/// Suma de food insights de un conjunto de comidas
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct NutritionTotals {
    pub meals: usize,
    pub calories: i32,
    pub proteins: i32,
    pub fats: i32,
    pub carbohydrates: i32,
}

impl NutritionTotals {
    /// Totales de las comidas de un usuario en `day` (UTC). Las comidas sin
    /// insights cuentan igual en `meals`.
    pub fn for_day(meals: &[Meal], user_id: i64, day: NaiveDate) -> Self {
        meals
            .iter()
            .filter(|meal| meal.user_id == user_id && meal.created_at.date_naive() == day)
            .fold(Self::default(), |mut totals, meal| {
                totals.meals += 1;
                if let Some(insights) = meal.food_insights {
                    totals.calories += insights.calories;
                    totals.proteins += insights.proteins;
                    totals.fats += insights.fats;
                    totals.carbohydrates += insights.carbohydrates;
                }
                totals
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn meal(id: i64, user_id: i64, day: u32, calories: Option<i32>) -> Meal {
        Meal {
            id,
            user_id,
            photo_url: format!("https://assets.example/{}.jpg", id),
            text: None,
            dish_name: None,
            aesthetic_rating: None,
            health_rating: None,
            is_spam: false,
            food_insights: calories.map(|calories| FoodInsights {
                calories,
                proteins: 10,
                fats: 5,
                carbohydrates: 20,
            }),
            ingredients: Vec::new(),
            tags: Vec::new(),
            user: MealAuthor {
                id: user_id,
                username: format!("user{}", user_id),
                avatar_url: None,
                first_name: None,
                last_name: None,
            },
            created_at: Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap(),
            updated_at: None,
        }
    }

    #[test]
    fn totals_only_count_user_and_day() {
        let meals = vec![
            meal(1, 1, 10, Some(500)),
            meal(2, 1, 10, Some(300)),
            meal(3, 2, 10, Some(900)),
            meal(4, 1, 9, Some(700)),
            meal(5, 1, 10, None),
        ];
        let day = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let totals = NutritionTotals::for_day(&meals, 1, day);
        assert_eq!(totals.meals, 3);
        assert_eq!(totals.calories, 800);
        assert_eq!(totals.proteins, 20);
        assert_eq!(totals.carbohydrates, 40);
    }

    #[test]
    fn parses_meal_from_backend_shape() {
        let json = r#"{
            "id": 42, "user_id": 1, "photo_url": "https://a/b.jpg",
            "text": null, "dish_name": "Salad", "is_spam": false,
            "food_insights": {"calories": 320, "proteins": 12, "fats": 9, "carbohydrates": 40},
            "ingredients": [{"name": "tomato", "weight": 120}],
            "user": {"id": 1, "username": "alice", "avatar_url": null},
            "created_at": "2024-05-10T08:30:00Z"
        }"#;
        let meal: Meal = serde_json::from_str(json).unwrap();
        assert_eq!(meal.title(), "Salad");
        assert_eq!(meal.ingredients.len(), 1);
        assert_eq!(meal.food_insights.unwrap().calories, 320);
    }
}

pub mod auth;
pub mod meal;
pub mod user;

pub use auth::AuthResponse;
pub use meal::{
    CreateMealRequest, FoodInsights, Ingredient, Meal, MealAuthor, NutritionTotals,
    PresignedUrlRequest, PresignedUrlResponse, ReactionKind,
};
pub use user::{OnboardingRequest, User, UserSettingsRequest};

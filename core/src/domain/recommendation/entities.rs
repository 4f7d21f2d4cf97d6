use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Substituted for every missing or blank reference cell.
pub const NOT_AVAILABLE: &str = "N/A";

/// Separator between meals in the example diet plan column.
pub const DIET_PLAN_DELIMITER: &str = "; ";

/// One row of the reference table, as read from the data source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReferenceRow {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Health Implications")]
    pub health_implications: Option<String>,
    #[serde(rename = "Diet Tips")]
    pub diet_tips: Option<String>,
    #[serde(rename = "Examples of Foods")]
    pub examples_of_foods: Option<String>,
    #[serde(rename = "Exercise Routine")]
    pub exercise_routine: Option<String>,
    #[serde(rename = "Lifestyle Tips")]
    pub lifestyle_tips: Option<String>,
    #[serde(rename = "Snack Ideas")]
    pub snack_ideas: Option<String>,
    #[serde(rename = "Hydration Tips")]
    pub hydration_tips: Option<String>,
    #[serde(rename = "Supplements")]
    pub supplements: Option<String>,
    #[serde(rename = "Cooking Tips")]
    pub cooking_tips: Option<String>,
    #[serde(rename = "Daily Calorie Range")]
    pub daily_calorie_range: Option<String>,
    #[serde(rename = "Example Diet Plan")]
    pub example_diet_plan: Option<String>,
}

/// Recommendations for one category, ready to be returned or rendered.
///
/// Keys keep the column titles of the reference table. When deserialized from a
/// client payload, absent text fields fall back to `N/A`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecommendationRecord {
    #[serde(rename = "Category", default = "not_available")]
    pub category: String,
    #[serde(rename = "Health Implications", default = "not_available")]
    pub health_implications: String,
    #[serde(rename = "Diet Tips", default = "not_available")]
    pub diet_tips: String,
    #[serde(rename = "Examples of Foods", default = "not_available")]
    pub examples_of_foods: String,
    #[serde(rename = "Exercise Routine", default = "not_available")]
    pub exercise_routine: String,
    #[serde(rename = "Lifestyle Tips", default = "not_available")]
    pub lifestyle_tips: String,
    #[serde(rename = "Snack Ideas", default = "not_available")]
    pub snack_ideas: String,
    #[serde(rename = "Hydration Tips", default = "not_available")]
    pub hydration_tips: String,
    #[serde(rename = "Supplements", default = "not_available")]
    pub supplements: String,
    #[serde(rename = "Cooking Tips", default = "not_available")]
    pub cooking_tips: String,
    #[serde(rename = "Daily Calorie Range", default = "not_available")]
    pub daily_calorie_range: String,
    #[serde(rename = "Example Diet Plan", default)]
    pub example_diet_plan: Vec<String>,
}

fn not_available() -> String {
    NOT_AVAILABLE.to_string()
}

use serde::Serialize;
use serde_json::Value;

use crate::domain::recommendation::entities::{
    DIET_PLAN_DELIMITER, NOT_AVAILABLE, RecommendationRecord,
};

/// Fields substituted into the report template.
///
/// Every measurement is carried as display text since the payload is resupplied by
/// the client and may hold any JSON value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportInput {
    pub height: String,
    pub weight: String,
    pub current_date: String,
    pub bmi: String,
    pub category: String,
    pub recommendations_bmi: Option<RecommendationRecord>,
}

/// Display text for an optional JSON value. Absent and `null` values become `N/A`.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => NOT_AVAILABLE.to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Rebuild recommendations resupplied by a client.
///
/// Anything other than a JSON object counts as absent. Text fields go through
/// [`display_value`]. The diet plan may be a list of meals or a single
/// `"; "`-delimited string.
pub fn recommendations_from_value(value: Option<&Value>) -> Option<RecommendationRecord> {
    let Some(Value::Object(fields)) = value else {
        return None;
    };
    let text = |key: &str| display_value(fields.get(key));

    let example_diet_plan = match fields.get("Example Diet Plan") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(meals)) => meals.iter().map(|meal| display_value(Some(meal))).collect(),
        Some(Value::String(plan)) => plan.split(DIET_PLAN_DELIMITER).map(str::to_string).collect(),
        Some(other) => vec![display_value(Some(other))],
    };

    Some(RecommendationRecord {
        category: text("Category"),
        health_implications: text("Health Implications"),
        diet_tips: text("Diet Tips"),
        examples_of_foods: text("Examples of Foods"),
        exercise_routine: text("Exercise Routine"),
        lifestyle_tips: text("Lifestyle Tips"),
        snack_ideas: text("Snack Ideas"),
        hydration_tips: text("Hydration Tips"),
        supplements: text("Supplements"),
        cooking_tips: text("Cooking Tips"),
        daily_calorie_range: text("Daily Calorie Range"),
        example_diet_plan,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(None), "N/A");
        assert_eq!(display_value(Some(&Value::Null)), "N/A");
        assert_eq!(display_value(Some(&json!("Obesity"))), "Obesity");
        assert_eq!(display_value(Some(&json!(21.6))), "21.6");
        assert_eq!(display_value(Some(&json!(70))), "70");
        assert_eq!(display_value(Some(&json!(true))), "true");
    }

    #[test]
    fn test_recommendations_from_value_accepts_loose_shapes() {
        let record = recommendations_from_value(Some(&json!({
            "Category": "Overweight",
            "Supplements": null,
            "Daily Calorie Range": 1800,
            "Example Diet Plan": "Oats; Salad"
        })))
        .unwrap();

        assert_eq!(record.category, "Overweight");
        assert_eq!(record.supplements, "N/A");
        assert_eq!(record.diet_tips, "N/A");
        assert_eq!(record.daily_calorie_range, "1800");
        assert_eq!(record.example_diet_plan, vec!["Oats", "Salad"]);

        let record =
            recommendations_from_value(Some(&json!({ "Example Diet Plan": ["Oats", 2] }))).unwrap();
        assert_eq!(record.example_diet_plan, vec!["Oats", "2"]);

        let record = recommendations_from_value(Some(&json!({ "Diet Tips": "Less sugar" }))).unwrap();
        assert!(record.example_diet_plan.is_empty());
    }

    #[test]
    fn test_recommendations_from_non_object_is_absent() {
        assert_eq!(recommendations_from_value(None), None);
        assert_eq!(recommendations_from_value(Some(&Value::Null)), None);
        assert_eq!(recommendations_from_value(Some(&json!("none"))), None);
        assert_eq!(recommendations_from_value(Some(&json!(["Oats"]))), None);
    }
}

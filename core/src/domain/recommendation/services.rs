use tracing::warn;

use crate::domain::{
    bmi::entities::Category,
    common::entities::app_errors::CoreError,
    recommendation::{
        entities::{DIET_PLAN_DELIMITER, NOT_AVAILABLE, RecommendationRecord, ReferenceRow},
        ports::ReferenceTable,
    },
};

/// Reshape a reference row. Missing or blank cells become `N/A` and the diet plan is
/// split into its meals.
pub fn format_recommendations(row: &ReferenceRow) -> RecommendationRecord {
    let diet_plan = or_not_available(&row.example_diet_plan);

    RecommendationRecord {
        category: if row.category.trim().is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            row.category.clone()
        },
        health_implications: or_not_available(&row.health_implications),
        diet_tips: or_not_available(&row.diet_tips),
        examples_of_foods: or_not_available(&row.examples_of_foods),
        exercise_routine: or_not_available(&row.exercise_routine),
        lifestyle_tips: or_not_available(&row.lifestyle_tips),
        snack_ideas: or_not_available(&row.snack_ideas),
        hydration_tips: or_not_available(&row.hydration_tips),
        supplements: or_not_available(&row.supplements),
        cooking_tips: or_not_available(&row.cooking_tips),
        daily_calorie_range: or_not_available(&row.daily_calorie_range),
        example_diet_plan: diet_plan
            .split(DIET_PLAN_DELIMITER)
            .map(str::to_string)
            .collect(),
    }
}

/// Look up `category` and format its row.
pub fn recommendations_for(
    table: &dyn ReferenceTable,
    category: Category,
) -> Result<RecommendationRecord, CoreError> {
    let row = table.find_by_category(category.as_str()).ok_or_else(|| {
        warn!(%category, rows = table.row_count(), "no reference row for category");
        CoreError::RecommendationNotFound(category)
    })?;

    Ok(format_recommendations(&row))
}

fn or_not_available(value: &Option<String>) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text.clone(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recommendation::ports::MockReferenceTable;

    fn full_row() -> ReferenceRow {
        ReferenceRow {
            category: "Overweight".to_string(),
            health_implications: Some("Raised cardiovascular risk".to_string()),
            diet_tips: Some("Cut refined sugar".to_string()),
            examples_of_foods: Some("Lentils, broccoli".to_string()),
            exercise_routine: Some("30 minutes brisk walking".to_string()),
            lifestyle_tips: Some("Sleep 7-8 hours".to_string()),
            snack_ideas: Some("Apple slices".to_string()),
            hydration_tips: Some("Water before meals".to_string()),
            supplements: Some("Vitamin D if deficient".to_string()),
            cooking_tips: Some("Steam instead of fry".to_string()),
            daily_calorie_range: Some("1600-2000 kcal".to_string()),
            example_diet_plan: Some(
                "Breakfast: oats; Lunch: grilled chicken salad; Dinner: baked fish".to_string(),
            ),
        }
    }

    #[test]
    fn test_format_passes_fields_through() {
        let record = format_recommendations(&full_row());
        assert_eq!(record.category, "Overweight");
        assert_eq!(record.health_implications, "Raised cardiovascular risk");
        assert_eq!(record.examples_of_foods, "Lentils, broccoli");
        assert_eq!(record.daily_calorie_range, "1600-2000 kcal");
        assert_eq!(
            record.example_diet_plan,
            vec![
                "Breakfast: oats",
                "Lunch: grilled chicken salad",
                "Dinner: baked fish"
            ]
        );
    }

    #[test]
    fn test_diet_plan_rejoins_to_source() {
        let row = full_row();
        let record = format_recommendations(&row);
        assert_eq!(
            Some(record.example_diet_plan.join(DIET_PLAN_DELIMITER)),
            row.example_diet_plan
        );
    }

    #[test]
    fn test_missing_fields_become_not_available() {
        let row = ReferenceRow {
            category: "Underweight".to_string(),
            diet_tips: Some("   ".to_string()),
            supplements: Some(String::new()),
            ..ReferenceRow::default()
        };

        let record = format_recommendations(&row);
        assert_eq!(record.health_implications, NOT_AVAILABLE);
        assert_eq!(record.diet_tips, NOT_AVAILABLE);
        assert_eq!(record.supplements, NOT_AVAILABLE);
        assert_eq!(record.cooking_tips, NOT_AVAILABLE);
        assert_eq!(record.example_diet_plan, vec![NOT_AVAILABLE]);
    }

    #[test]
    fn test_recommendations_for_missing_category() {
        let mut table = MockReferenceTable::new();
        table.expect_find_by_category().returning(|_| None);
        table.expect_row_count().returning(|| 0);

        let result = recommendations_for(&table, Category::Obesity);
        assert_eq!(
            result,
            Err(CoreError::RecommendationNotFound(Category::Obesity))
        );
    }

    #[test]
    fn test_recommendation_record_defaults_on_deserialize() {
        let record: RecommendationRecord = serde_json::from_value(serde_json::json!({
            "Category": "Obesity",
            "Example Diet Plan": ["Soup"]
        }))
        .unwrap();

        assert_eq!(record.category, "Obesity");
        assert_eq!(record.hydration_tips, NOT_AVAILABLE);
        assert_eq!(record.example_diet_plan, vec!["Soup"]);
    }
}

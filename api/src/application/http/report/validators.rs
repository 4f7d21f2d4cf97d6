use bmi_report_core::domain::{
    common::current_date,
    recommendation::entities::RecommendationRecord,
    report::value_objects::{ReportInput, display_value, recommendations_from_value},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

/// A previous compute result, resupplied by the client. Every field is optional and
/// accepts any JSON value, so deserializing a JSON object never fails.
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct GeneratePdfValidator {
    #[schema(value_type = Option<f64>, example = 1.8)]
    pub height: Option<Value>,

    #[schema(value_type = Option<f64>, example = 70)]
    pub weight: Option<Value>,

    #[schema(value_type = Option<String>, example = "2025-01-31")]
    pub current_date: Option<Value>,

    #[schema(value_type = Option<f64>, example = 21.6)]
    pub bmi: Option<Value>,

    #[schema(value_type = Option<String>, example = "Normal weight")]
    pub category: Option<Value>,

    #[schema(value_type = Option<RecommendationRecord>)]
    pub recommendations_bmi: Option<Value>,
}

impl GeneratePdfValidator {
    pub fn into_input(self) -> ReportInput {
        let current_date = match self.current_date {
            None | Some(Value::Null) => current_date(),
            Some(value) => display_value(Some(&value)),
        };

        ReportInput {
            height: display_value(self.height.as_ref()),
            weight: display_value(self.weight.as_ref()),
            current_date,
            bmi: display_value(self.bmi.as_ref()),
            category: display_value(self.category.as_ref()),
            recommendations_bmi: recommendations_from_value(self.recommendations_bmi.as_ref()),
        }
    }
}

use std::borrow::Cow;

use bmi_report_core::domain::bmi::value_objects::ComputeBmiInput;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::application::http::server::api_entities::api_error::ApiError;

pub const MEASUREMENTS_MUST_BE_NUMBERS: &str = "Height and weight must be numbers";

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ComputeBmiValidator {
    /// Height in meters.
    #[serde(default)]
    #[validate(custom(function = "validate_number"))]
    #[schema(value_type = f64, example = 1.8)]
    pub height: Value,

    /// Weight in kilograms.
    #[serde(default)]
    #[validate(custom(function = "validate_number"))]
    #[schema(value_type = f64, example = 70)]
    pub weight: Value,
}

/// Measurements as sent by the client, plus their numeric form.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurements {
    pub height: Number,
    pub weight: Number,
    pub input: ComputeBmiInput,
}

impl ComputeBmiValidator {
    pub fn into_measurements(self) -> Result<Measurements, ApiError> {
        let invalid = || ApiError::BadRequest(MEASUREMENTS_MUST_BE_NUMBERS.to_string());

        let (Value::Number(height), Value::Number(weight)) = (self.height, self.weight) else {
            return Err(invalid());
        };
        let input = ComputeBmiInput {
            height: height.as_f64().ok_or_else(invalid)?,
            weight: weight.as_f64().ok_or_else(invalid)?,
        };

        Ok(Measurements {
            height,
            weight,
            input,
        })
    }
}

/// Only JSON numbers pass. Strings, booleans and `null` are rejected.
fn validate_number(value: &Value) -> Result<(), ValidationError> {
    if value.is_number() {
        Ok(())
    } else {
        Err(ValidationError::new("number").with_message(Cow::Borrowed(MEASUREMENTS_MUST_BE_NUMBERS)))
    }
}

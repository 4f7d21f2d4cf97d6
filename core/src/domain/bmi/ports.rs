use crate::domain::{
    bmi::{entities::BmiAssessment, value_objects::ComputeBmiInput},
    common::entities::app_errors::CoreError,
};

pub trait BmiService: Send + Sync {
    /// Compute the BMI, resolve its category and attach the matching recommendations.
    fn compute_bmi(&self, input: ComputeBmiInput) -> Result<BmiAssessment, CoreError>;

    /// Render the HTML input form. `root_path` prefixes the endpoints the page posts to.
    fn render_form(&self, root_path: &str) -> Result<String, CoreError>;
}

use serde_json::json;
use tracing::debug;

use crate::domain::{
    bmi::{
        entities::{BmiAssessment, Category},
        ports::BmiService,
        value_objects::ComputeBmiInput,
    },
    common::{current_date, entities::app_errors::CoreError, services::Service},
    recommendation::services::recommendations_for,
    report::entities::FORM_TEMPLATE,
};

/// `weight / height²` rounded to two decimals. `None` when `height²` is zero, which
/// includes heights small enough to underflow, or when the quotient is not finite.
pub fn calculate_bmi(height: f64, weight: f64) -> Option<f64> {
    let divisor = height * height;
    if divisor == 0.0 {
        return None;
    }

    let bmi = weight / divisor;
    if !bmi.is_finite() {
        return None;
    }

    Some((bmi * 100.0).round() / 100.0)
}

/// Rules are evaluated in order. Values in `[24.9, 25)` match none of the bounded
/// ranges and end up as `Obesity`, same as anything from 29.9 upwards.
pub fn categorize(bmi: Option<f64>) -> Category {
    let Some(bmi) = bmi else {
        return Category::Invalid;
    };

    if bmi < 18.5 {
        Category::Underweight
    } else if (18.5..24.9).contains(&bmi) {
        Category::NormalWeight
    } else if (25.0..29.9).contains(&bmi) {
        Category::Overweight
    } else {
        Category::Obesity
    }
}

impl BmiService for Service {
    fn compute_bmi(&self, input: ComputeBmiInput) -> Result<BmiAssessment, CoreError> {
        let bmi = calculate_bmi(input.height, input.weight);
        let category = categorize(bmi);

        debug!(
            height = input.height,
            weight = input.weight,
            bmi = ?bmi,
            %category,
            "bmi computed"
        );

        let recommendations_bmi = recommendations_for(self.reference_table.as_ref(), category)?;

        Ok(BmiAssessment {
            height: input.height,
            weight: input.weight,
            current_date: current_date(),
            bmi,
            category,
            recommendations_bmi,
        })
    }

    fn render_form(&self, root_path: &str) -> Result<String, CoreError> {
        self.template_renderer
            .render(FORM_TEMPLATE, &json!({ "root_path": root_path }))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::{
        recommendation::{entities::ReferenceRow, ports::MockReferenceTable},
        report::ports::{MockDocumentConverter, MockTemplateRenderer},
    };

    fn service_with_table(table: MockReferenceTable) -> Service {
        Service::new(
            Arc::new(table),
            Arc::new(MockTemplateRenderer::new()),
            Arc::new(MockDocumentConverter::new()),
        )
    }

    fn row(category: &str) -> ReferenceRow {
        ReferenceRow {
            category: category.to_string(),
            health_implications: Some("Healthy range".to_string()),
            example_diet_plan: Some("Oats; Salad; Fish".to_string()),
            ..ReferenceRow::default()
        }
    }

    #[test]
    fn test_calculate_bmi_rounds_to_two_decimals() {
        assert_eq!(calculate_bmi(1.8, 70.0), Some(21.6));
        assert_eq!(calculate_bmi(1.75, 68.0), Some(22.2));
        assert_eq!(calculate_bmi(1.6, 50.0), Some(19.53));
    }

    #[test]
    fn test_calculate_bmi_matches_formula() {
        for (height, weight) in [(1.5, 45.0), (1.62, 58.3), (1.91, 102.0), (2.0, 0.0)] {
            let expected = (weight / (height * height) * 100.0_f64).round() / 100.0;
            assert_eq!(calculate_bmi(height, weight), Some(expected));
        }
    }

    #[test]
    fn test_calculate_bmi_zero_height() {
        assert_eq!(calculate_bmi(0.0, 70.0), None);
        assert_eq!(calculate_bmi(0.0, 0.0), None);
        assert_eq!(calculate_bmi(-0.0, 12.5), None);
    }

    #[test]
    fn test_calculate_bmi_underflowing_height() {
        assert_eq!(calculate_bmi(1e-170, 70.0), None);
        assert_eq!(calculate_bmi(1e-170, 0.0), None);
        assert_eq!(calculate_bmi(1e-160, 70.0), None);
        assert_eq!(categorize(calculate_bmi(1e-170, 70.0)), Category::Invalid);
    }

    #[test]
    fn test_categorize_boundaries() {
        assert_eq!(categorize(None), Category::Invalid);
        assert_eq!(categorize(Some(0.0)), Category::Underweight);
        assert_eq!(categorize(Some(18.49)), Category::Underweight);
        assert_eq!(categorize(Some(18.5)), Category::NormalWeight);
        assert_eq!(categorize(Some(24.89)), Category::NormalWeight);
        assert_eq!(categorize(Some(25.0)), Category::Overweight);
        assert_eq!(categorize(Some(29.89)), Category::Overweight);
        assert_eq!(categorize(Some(29.9)), Category::Obesity);
        assert_eq!(categorize(Some(41.2)), Category::Obesity);
    }

    #[test]
    fn test_categorize_gap_between_normal_and_overweight() {
        assert_eq!(categorize(Some(24.9)), Category::Obesity);
        assert_eq!(categorize(Some(24.95)), Category::Obesity);
        assert_eq!(categorize(Some(24.99)), Category::Obesity);
    }

    #[test]
    fn test_compute_bmi_attaches_recommendations() {
        let mut table = MockReferenceTable::new();
        table
            .expect_find_by_category()
            .withf(|category| category == "Normal weight")
            .returning(|category| Some(row(category)));

        let service = service_with_table(table);
        let assessment = service
            .compute_bmi(ComputeBmiInput {
                height: 1.8,
                weight: 70.0,
            })
            .unwrap();

        assert_eq!(assessment.bmi, Some(21.6));
        assert_eq!(assessment.category, Category::NormalWeight);
        assert_eq!(assessment.recommendations_bmi.category, "Normal weight");
        assert_eq!(
            assessment.recommendations_bmi.example_diet_plan,
            vec!["Oats", "Salad", "Fish"]
        );
        assert_eq!(assessment.current_date, current_date());
    }

    #[test]
    fn test_compute_bmi_zero_height_has_no_recommendations() {
        let mut table = MockReferenceTable::new();
        table
            .expect_find_by_category()
            .withf(|category| category == "Invalid")
            .returning(|_| None);

        let service = service_with_table(table);
        let result = service.compute_bmi(ComputeBmiInput {
            height: 0.0,
            weight: 70.0,
        });

        assert_eq!(
            result,
            Err(CoreError::RecommendationNotFound(Category::Invalid))
        );
    }

    #[test]
    fn test_render_form_uses_form_template() {
        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .withf(|name, fields| name == FORM_TEMPLATE && fields["root_path"] == "/bmi")
            .returning(|_, _| Ok("<form></form>".to_string()));

        let service = Service::new(
            Arc::new(MockReferenceTable::new()),
            Arc::new(renderer),
            Arc::new(MockDocumentConverter::new()),
        );

        assert_eq!(service.render_form("/bmi").unwrap(), "<form></form>");
    }
}

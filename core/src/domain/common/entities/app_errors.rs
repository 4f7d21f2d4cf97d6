use thiserror::Error;

use crate::domain::bmi::entities::Category;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Failed to load reference table: {0}")]
    ReferenceLoad(String),

    #[error("No recommendations available for category '{0}'")]
    RecommendationNotFound(Category),

    #[error("Failed to render template: {0}")]
    TemplateRender(String),

    #[error("Failed to convert document: {0}")]
    DocumentConversion(String),
}

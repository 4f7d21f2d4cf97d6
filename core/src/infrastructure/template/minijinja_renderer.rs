use minijinja::Environment;
use serde_json::Value;

use crate::domain::{
    common::entities::app_errors::CoreError,
    report::{
        entities::{FORM_TEMPLATE, REPORT_TEMPLATE},
        ports::TemplateRenderer,
    },
};

/// Renders the bundled templates. `.html` templates are auto-escaped, the report
/// markup template is not.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    pub fn new() -> Result<Self, CoreError> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        env.add_template(FORM_TEMPLATE, include_str!("../../../templates/bmi.html"))
            .map_err(template_error)?;
        env.add_template(
            REPORT_TEMPLATE,
            include_str!("../../../templates/report.md.j2"),
        )
        .map_err(template_error)?;

        Ok(Self { env })
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, template_name: &str, fields: &Value) -> Result<String, CoreError> {
        let template = self
            .env
            .get_template(template_name)
            .map_err(template_error)?;

        template.render(fields).map_err(template_error)
    }
}

fn template_error(error: minijinja::Error) -> CoreError {
    CoreError::TemplateRender(error.to_string())
}

use serde::Serialize;
use tera::{Context, Tera};

use crate::error::NoteError;

/// Render a set of named raw templates against one serializable context.
///
/// Templates use Tera (Jinja2) syntax. The fields of `data` become the
/// template variables. Output is returned in the order of `templates`.
pub fn render_all<T: Serialize>(
    templates: &[(&str, &str)],
    data: &T,
) -> Result<Vec<String>, NoteError> {
    let mut tera = Tera::default();
    tera.add_raw_templates(templates.iter().copied())
        .map_err(|e| NoteError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(data)?;
    let context =
        Context::from_value(value).map_err(|e| NoteError::TemplateRender(e.to_string()))?;

    templates
        .iter()
        .map(|(name, _)| tera.render(name, &context).map_err(NoteError::from))
        .collect()
}

/// Render a single raw template.
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    data: &T,
) -> Result<String, NoteError> {
    render_all(&[(template_name, template_content)], data)?
        .into_iter()
        .next()
        .ok_or_else(|| NoteError::TemplateRender(format!("{template_name}: no output")))
}

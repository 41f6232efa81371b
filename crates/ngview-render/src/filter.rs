//! Filter bar rendering.
//!
//! Filter fields render as three-column blocks bound to the filter model;
//! the concatenated blocks replace the `%%FILTER_FIELDS%%` token in a
//! caller-supplied wrapper template (usually loaded through
//! [`FileTemplateLoader`](crate::FileTemplateLoader)).

use ngview_fields::ResolvedFilterField;

use crate::config::RenderConfig;
use crate::error::RenderResult;

/// Token the rendered field blocks are substituted for in the wrapper.
pub const FILTER_FIELDS_TOKEN: &str = "%%FILTER_FIELDS%%";

/// Render `fields` into `wrapper`, replacing its `%%FILTER_FIELDS%%` token.
///
/// An empty slice substitutes an empty string, leaving the wrapper's own
/// markup as the whole fragment.
///
/// # Examples
///
/// ```
/// use ngview_fields::FilterFieldDecl;
/// use ngview_render::{RenderConfig, render_filter};
///
/// let field = FilterFieldDecl::new("getTitle", 1, "bookmark.title")
///     .resolve()
///     .unwrap();
/// let html = render_filter(
///     &[field],
///     "<form>%%FILTER_FIELDS%%</form>",
///     &RenderConfig::default(),
/// )
/// .unwrap();
/// assert!(html.contains("data-ng-model=\"filter.title\""));
/// ```
pub fn render_filter(
	fields: &[ResolvedFilterField],
	wrapper: &str,
	config: &RenderConfig,
) -> RenderResult<String> {
	tracing::debug!(count = fields.len(), "rendering filter bar");
	let mut blocks = String::new();
	for field in fields {
		blocks.push_str(&render_filter_field(field, config));
	}
	Ok(wrapper.replace(FILTER_FIELDS_TOKEN, &blocks))
}

fn render_filter_field(field: &ResolvedFilterField, config: &RenderConfig) -> String {
	let spec = field.widget.spec();
	format!(
		"<div class=\"col-md-4 form-group\"><label>{{{{'{label}'|{translate}}}}}</label>\
		 <{tag} class=\"{widget_classes} {classes}\" {widget_attributes} {attributes} \
		 data-ng-model=\"{model}.{scope}\"></{tag}></div>",
		label = field.label,
		translate = config.translate_filter,
		tag = spec.dom_tag,
		widget_classes = spec.css_classes,
		classes = field.css_classes,
		widget_attributes = spec.attributes,
		attributes = field.attributes,
		model = config.filter_model,
		scope = field.scope_name,
	)
}

//! Read-only detail view rendering.
//!
//! Each descriptor renders as a label/value row; the value is the widget's
//! inline template with the `{scopeField}` and `{scopeFieldFiltered}` tokens
//! replaced by scope bindings. Substitution is literal: descriptor values
//! are not HTML-escaped.

use ngview_fields::ResolvedDetailField;
use ngview_fields::widget::{SCOPE_FIELD_FILTERED_TOKEN, SCOPE_FIELD_TOKEN};

use crate::config::RenderConfig;
use crate::error::{RenderError, RenderResult};

/// Render the detail rows for `fields` inside a `form-horizontal` container.
///
/// An empty slice yields the bare container. Output order is the caller's
/// order; this function never re-sorts.
///
/// # Examples
///
/// ```
/// use ngview_fields::DetailFieldDecl;
/// use ngview_render::{RenderConfig, render_detail};
///
/// let field = DetailFieldDecl::new("getUserName", 1, "user.name")
///     .resolve()
///     .unwrap();
/// let html = render_detail(&[field], &RenderConfig::default()).unwrap();
/// assert!(html.contains("{{item.userName}}"));
/// ```
pub fn render_detail(fields: &[ResolvedDetailField], config: &RenderConfig) -> RenderResult<String> {
	tracing::debug!(count = fields.len(), "rendering detail view");
	let mut html = String::from("<div class=\"form-horizontal\">");
	for field in fields {
		html.push_str(&render_detail_field(field, config)?);
	}
	html.push_str("</div>");
	Ok(html)
}

fn render_detail_field(field: &ResolvedDetailField, config: &RenderConfig) -> RenderResult<String> {
	let template = field
		.widget
		.template()
		.ok_or_else(|| RenderError::UnknownWidget {
			widget: format!("{:?}", field.widget),
		})?;

	let raw_binding = format!("{{{{{}.{}}}}}", config.detail_model, field.scope_name);
	let filtered_binding = format!(
		"{{{{{}.{}}}}}",
		config.detail_model,
		piped_expression(field)
	);

	let content = template
		.replace(SCOPE_FIELD_TOKEN, &raw_binding)
		.replace(SCOPE_FIELD_FILTERED_TOKEN, &filtered_binding);

	Ok(format!(
		"<div class=\"form-group\">\
		 <label class=\"col-md-3 control-label\">{{{{'{label}' | {translate}}}}}</label>\
		 <div class=\"col-md-9\"><p class=\"form-control-static\">{content}</p></div></div>",
		label = field.label,
		translate = config.translate_filter,
	))
}

/// The scope expression with the declared filter pipeline appended.
///
/// Empty filter names are skipped; each applied filter is followed by a
/// single space, so a pipeline of `["uppercase"]` yields
/// `name | uppercase `.
fn piped_expression(field: &ResolvedDetailField) -> String {
	let mut expression = field.scope_name.clone();
	if field.filters.iter().any(|filter| !filter.is_empty()) {
		expression.push_str(" | ");
		for filter in &field.filters {
			if !filter.is_empty() {
				expression.push_str(filter);
				expression.push(' ');
			}
		}
	}
	expression
}

#[cfg(test)]
mod tests {
	use super::*;
	use ngview_fields::{DetailFieldDecl, DetailWidget};

	fn config() -> RenderConfig {
		RenderConfig::default()
	}

	#[test]
	fn empty_slice_yields_container_only() {
		let html = render_detail(&[], &config()).unwrap();
		assert_eq!(html, "<div class=\"form-horizontal\"></div>");
	}

	#[test]
	fn text_field_binds_the_filtered_expression() {
		let field = DetailFieldDecl::new("getUserName", 1, "user.name")
			.resolve()
			.unwrap();
		let html = render_detail(&[field], &config()).unwrap();

		assert!(html.contains("{{item.userName}}"));
		assert!(html.contains("{{'user.name' | translate}}"));
	}

	#[test]
	fn filters_are_piped_after_the_expression() {
		let field = DetailFieldDecl::new("getUserName", 1, "user.name")
			.with_filters(["uppercase", "limitTo:30"])
			.resolve()
			.unwrap();
		let html = render_detail(&[field], &config()).unwrap();

		assert!(html.contains("{{item.userName | uppercase limitTo:30 }}"));
	}

	#[test]
	fn empty_filter_names_are_skipped() {
		let field = DetailFieldDecl::new("getUserName", 1, "user.name")
			.with_filters(["", "uppercase"])
			.resolve()
			.unwrap();
		let html = render_detail(&[field], &config()).unwrap();

		assert!(html.contains("{{item.userName | uppercase }}"));
	}

	#[test]
	fn link_field_binds_raw_href_and_filtered_text() {
		let field = DetailFieldDecl::new("getUrl", 1, "bookmark.url")
			.with_widget(DetailWidget::Link)
			.with_filters(["uppercase"])
			.resolve()
			.unwrap();
		let html = render_detail(&[field], &config()).unwrap();

		assert!(html.contains("href=\"{{item.url}}\""));
		assert!(html.contains("{{item.url | uppercase }}"));
	}

	#[test]
	fn image_field_sources_the_raw_value() {
		let field = DetailFieldDecl::new("getAvatar", 1, "user.avatar")
			.with_widget(DetailWidget::Image)
			.resolve()
			.unwrap();
		let html = render_detail(&[field], &config()).unwrap();

		assert!(html.contains("<img data-ng-src=\"{{item.avatar}}\""));
	}

	#[test]
	fn labels_are_substituted_literally() {
		let field = DetailFieldDecl::new("getUserName", 1, "<b>name</b>")
			.resolve()
			.unwrap();
		let html = render_detail(&[field], &config()).unwrap();

		assert!(html.contains("{{'<b>name</b>' | translate}}"));
	}

	#[test]
	fn detail_model_is_configurable() {
		let field = DetailFieldDecl::new("getUserName", 1, "user.name")
			.resolve()
			.unwrap();
		let config = RenderConfig::new().with_detail_model("row");
		let html = render_detail(&[field], &config).unwrap();

		assert!(html.contains("{{row.userName}}"));
	}
}

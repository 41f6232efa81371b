//! Entity form rendering.
//!
//! Each descriptor renders as a widget element with an assembled attribute
//! list, wrapped in a row that binds a `has-error` class and an error
//! repeater to `errors.<scope_name>`, assuming the surrounding controller
//! exposes a validation-errors model of that shape.

use ngview_fields::widget::WIDGET_TOKEN;
use ngview_fields::{ResolvedFormField, WidgetSpec};

use crate::config::RenderConfig;
use crate::error::RenderResult;

/// Render the form rows for `fields` inside a `form-horizontal` container.
///
/// # Examples
///
/// ```
/// use ngview_fields::FormFieldDecl;
/// use ngview_render::{RenderConfig, render_form};
///
/// let field = FormFieldDecl::new("getUserName", 1, "user.name")
///     .resolve()
///     .unwrap();
/// let html = render_form(&[field], &RenderConfig::default()).unwrap();
/// assert!(html.contains("data-ng-model=\"form.userName\""));
/// ```
pub fn render_form(fields: &[ResolvedFormField], config: &RenderConfig) -> RenderResult<String> {
	tracing::debug!(count = fields.len(), model = %config.form_model, "rendering entity form");
	let mut html = String::from("<div class=\"form-horizontal\">");
	for field in fields {
		html.push_str(&render_form_field(field, config));
	}
	html.push_str("</div>");
	Ok(html)
}

fn render_form_field(field: &ResolvedFormField, config: &RenderConfig) -> String {
	let spec = field.widget.spec();

	let mut element = format!(
		"<{tag} {attributes}></{tag}>",
		tag = spec.dom_tag,
		attributes = build_attributes(field, &spec, config).join(" "),
	);
	if let Some(wrapper) = spec.wrapper {
		element = wrapper.replace(WIDGET_TOKEN, &element);
	}

	format!(
		"<div class=\"form-group\" data-ng-class=\"{{'has-error':errors.{scope}.length}}\">\
		 <label class=\"col-md-3 control-label\">{{{{'{label}'|{translate}}}}}</label>\
		 <div class=\"col-md-9\">{element} {errors}</div></div>",
		scope = field.scope_name,
		label = field.label,
		translate = config.translate_filter,
		errors = render_errors_repeater(&field.scope_name),
	)
}

/// Assemble the element's attribute list.
///
/// Order is part of the output contract: widget defaults, declaration
/// attributes, the options binding for options-driven widgets, the two-way
/// model binding, then the merged class attribute.
fn build_attributes(
	field: &ResolvedFormField,
	spec: &WidgetSpec,
	config: &RenderConfig,
) -> Vec<String> {
	let mut attributes = Vec::new();

	if !spec.attributes.is_empty() {
		attributes.push(spec.attributes.to_string());
	}
	attributes.extend(field.attributes.iter().cloned());

	if spec.uses_options {
		let options = field
			.options_expression
			.as_deref()
			.unwrap_or(&config.default_options);
		attributes.push(format!("data-ng-options=\"{}\"", options));
	}

	attributes.push(format!(
		"data-ng-model=\"{}.{}\"",
		config.form_model, field.scope_name
	));
	attributes.push(format!(
		"class=\"{} {}\"",
		spec.css_classes, field.css_classes
	));

	attributes
}

fn render_errors_repeater(scope_name: &str) -> String {
	format!(
		"<ul class=\"help-block\" data-ng-show=\"errors.{scope}.length\">\
		 <li data-ng-repeat=\"error in errors.{scope}\">{{{{error}}}}</li></ul>",
		scope = scope_name,
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use ngview_fields::{FormFieldDecl, FormWidget};

	fn config() -> RenderConfig {
		RenderConfig::default()
	}

	#[test]
	fn empty_slice_yields_container_only() {
		let html = render_form(&[], &config()).unwrap();
		assert_eq!(html, "<div class=\"form-horizontal\"></div>");
	}

	#[test]
	fn input_field_renders_model_binding_and_classes() {
		let field = FormFieldDecl::new("getUserName", 1, "user.name")
			.with_css_classes("wide")
			.resolve()
			.unwrap();
		let html = render_form(&[field], &config()).unwrap();

		assert!(html.contains("<input type=\"text\""));
		assert!(html.contains("data-ng-model=\"form.userName\""));
		assert!(html.contains("class=\"form-control wide\""));
	}

	#[test]
	fn declaration_attributes_follow_widget_defaults() {
		let field = FormFieldDecl::new("getUserName", 1, "user.name")
			.with_attributes(["required", "data-ng-maxlength=\"64\""])
			.resolve()
			.unwrap();
		let html = render_form(&[field], &config()).unwrap();

		let type_at = html.find("type=\"text\"").unwrap();
		let required_at = html.find("required").unwrap();
		let model_at = html.find("data-ng-model").unwrap();
		assert!(type_at < required_at && required_at < model_at);
	}

	#[test]
	fn select_without_expression_uses_default_options() {
		let field = FormFieldDecl::new("getCountry", 1, "user.country")
			.with_widget(FormWidget::Select)
			.resolve()
			.unwrap();
		let html = render_form(&[field], &config()).unwrap();

		assert!(html.contains("data-ng-options=\"options\""));
	}

	#[test]
	fn select_with_expression_uses_it() {
		let field = FormFieldDecl::new("getCountry", 1, "user.country")
			.with_widget(FormWidget::Select)
			.with_options_expression("countries")
			.resolve()
			.unwrap();
		let html = render_form(&[field], &config()).unwrap();

		assert!(html.contains("data-ng-options=\"countries\""));
		assert!(!html.contains("data-ng-options=\"options\""));
	}

	#[test]
	fn non_options_widgets_never_bind_options() {
		let field = FormFieldDecl::new("getUserName", 1, "user.name")
			.with_options_expression("countries")
			.resolve()
			.unwrap();
		let html = render_form(&[field], &config()).unwrap();

		assert!(!html.contains("data-ng-options"));
	}

	#[test]
	fn row_binds_errors_for_the_scope_name() {
		let field = FormFieldDecl::new("getUserName", 1, "user.name")
			.resolve()
			.unwrap();
		let html = render_form(&[field], &config()).unwrap();

		assert!(html.contains("data-ng-class=\"{'has-error':errors.userName.length}\""));
		assert!(html.contains("data-ng-show=\"errors.userName.length\""));
		assert!(html.contains("data-ng-repeat=\"error in errors.userName\""));
	}

	#[test]
	fn date_picker_is_wrapped_in_its_input_group() {
		let field = FormFieldDecl::new("getBirthDate", 1, "user.birth_date")
			.with_widget(FormWidget::DatePicker)
			.resolve()
			.unwrap();
		let html = render_form(&[field], &config()).unwrap();

		assert!(html.contains("<div class=\"input-group\"><input"));
		assert!(html.contains("glyphicon-calendar"));
	}

	#[test]
	fn form_model_comes_from_config() {
		let field = FormFieldDecl::new("getUserName", 1, "user.name")
			.resolve()
			.unwrap();
		let config = RenderConfig::new().with_form_model("editing.user");
		let html = render_form(&[field], &config).unwrap();

		assert!(html.contains("data-ng-model=\"editing.user.userName\""));
	}
}

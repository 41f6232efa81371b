//! Widget variants and the fixed render data attached to them.
//!
//! Widgets are closed variant sets: read-only detail fields render through a
//! per-widget inline template, while form and filter fields render a DOM
//! element described by a [`WidgetSpec`]. Both tables are build-time data,
//! initialized once and never mutated.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Token replaced with the raw scope binding in detail templates.
pub const SCOPE_FIELD_TOKEN: &str = "{scopeField}";

/// Token replaced with the filtered scope binding in detail templates.
pub const SCOPE_FIELD_FILTERED_TOKEN: &str = "{scopeFieldFiltered}";

/// Token a wrapper template substitutes the rendered widget element into.
pub const WIDGET_TOKEN: &str = "{widget}";

/// Rendering strategy for a read-only detail field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailWidget {
	/// The filtered value as plain text.
	Text,
	/// An anchor opening the raw value in a new tab, showing the filtered
	/// value as its text.
	Link,
	/// A thumbnail image sourced from the raw value.
	Image,
}

/// Inline templates for detail widgets, keyed by variant.
///
/// `{scopeField}` stands for the raw scope binding, `{scopeFieldFiltered}`
/// for the binding with the declared filter pipeline applied.
static DETAIL_TEMPLATES: Lazy<HashMap<DetailWidget, &'static str>> = Lazy::new(|| {
	HashMap::from([
		(DetailWidget::Text, "{scopeFieldFiltered}"),
		(
			DetailWidget::Link,
			"<a target=\"_blank\" href=\"{scopeField}\" class=\"ellipsize\">{scopeFieldFiltered}</a>",
		),
		(
			DetailWidget::Image,
			"<img data-ng-src=\"{scopeField}\" class=\"img-thumbnail img-responsive\"/>",
		),
	])
});

impl DetailWidget {
	/// Look up the widget's inline template in the fixed table.
	///
	/// Returns `None` when the table carries no entry for the widget; the
	/// renderer turns that into a fatal error.
	pub fn template(&self) -> Option<&'static str> {
		DETAIL_TEMPLATES.get(self).copied()
	}
}

/// Static render data for a form or filter widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetSpec {
	/// DOM element the widget renders as.
	pub dom_tag: &'static str,
	/// Attributes every instance of the widget carries.
	pub attributes: &'static str,
	/// CSS classes every instance of the widget carries.
	pub css_classes: &'static str,
	/// Wrapper template with a `{widget}` token, for widgets whose element
	/// needs surrounding markup.
	pub wrapper: Option<&'static str>,
	/// Whether the widget binds an external options list.
	pub uses_options: bool,
}

/// Widget used by form and filter fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormWidget {
	/// Single-line text input.
	#[default]
	Input,
	/// Masked password input.
	Password,
	/// Multi-line text area.
	Textarea,
	/// Drop-down bound to an options list.
	Select,
	/// Checkbox input.
	Checkbox,
	/// Text input with a calendar popup.
	DatePicker,
}

impl FormWidget {
	/// The fixed render data for this widget.
	///
	/// # Examples
	///
	/// ```
	/// use ngview_fields::widget::FormWidget;
	///
	/// let spec = FormWidget::Select.spec();
	/// assert_eq!(spec.dom_tag, "select");
	/// assert!(spec.uses_options);
	/// ```
	pub fn spec(&self) -> WidgetSpec {
		match self {
			FormWidget::Input => WidgetSpec {
				dom_tag: "input",
				attributes: "type=\"text\"",
				css_classes: "form-control",
				wrapper: None,
				uses_options: false,
			},
			FormWidget::Password => WidgetSpec {
				dom_tag: "input",
				attributes: "type=\"password\"",
				css_classes: "form-control",
				wrapper: None,
				uses_options: false,
			},
			FormWidget::Textarea => WidgetSpec {
				dom_tag: "textarea",
				attributes: "",
				css_classes: "form-control",
				wrapper: None,
				uses_options: false,
			},
			FormWidget::Select => WidgetSpec {
				dom_tag: "select",
				attributes: "",
				css_classes: "form-control",
				wrapper: None,
				uses_options: true,
			},
			FormWidget::Checkbox => WidgetSpec {
				dom_tag: "input",
				attributes: "type=\"checkbox\"",
				css_classes: "",
				wrapper: None,
				uses_options: false,
			},
			FormWidget::DatePicker => WidgetSpec {
				dom_tag: "input",
				attributes: "type=\"text\" data-datepicker-popup=\"dd/MM/yyyy\"",
				css_classes: "form-control",
				wrapper: Some(
					"<div class=\"input-group\">{widget}<span class=\"input-group-addon\">\
					 <i class=\"glyphicon glyphicon-calendar\"></i></span></div>",
				),
				uses_options: false,
			},
		}
	}
}

/// Comparison operator a filter field hands to the downstream query layer.
///
/// Carried on resolved filter descriptors; never interpreted by the
/// renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOp {
	/// Substring match.
	#[default]
	Like,
	Eq,
	Neq,
	Gt,
	Gte,
	Lt,
	Lte,
}

//! Field declarations and their resolved descriptors.
//!
//! A declaration is one entry in an entity's statically declared field
//! table. Resolution backfills unset names from the accessor method name and
//! freezes the result into a descriptor; declarations are never mutated.

use serde::{Deserialize, Serialize};

use crate::accessor::field_name_for_accessor;
use crate::error::{FieldError, FieldResult};
use crate::widget::{DetailWidget, FilterOp, FormWidget};

fn non_empty(value: Option<&String>) -> Option<String> {
	value.filter(|name| !name.is_empty()).cloned()
}

/// One entry in an entity's detail-view field table.
///
/// # Examples
///
/// ```
/// use ngview_fields::{DetailFieldDecl, DetailWidget};
///
/// let decl = DetailFieldDecl::new("getUrl", 10, "bookmark.url")
///     .with_widget(DetailWidget::Link)
///     .with_filters(["uppercase"]);
/// let field = decl.resolve().unwrap();
/// assert_eq!(field.scope_name, "url");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailFieldDecl {
	/// Accessor method name on the original domain type.
	pub accessor: String,
	/// Display sequence, ascending.
	pub order: i32,
	/// Translation key shown as the field label.
	pub label: String,
	/// Explicit scope binding identifier; derived from `accessor` when unset.
	pub scope_name: Option<String>,
	/// Client-side filter pipeline applied before display.
	pub filters: Vec<String>,
	/// Rendering strategy.
	pub widget: DetailWidget,
}

impl DetailFieldDecl {
	pub fn new(accessor: impl Into<String>, order: i32, label: impl Into<String>) -> Self {
		Self {
			accessor: accessor.into(),
			order,
			label: label.into(),
			scope_name: None,
			filters: vec![],
			widget: DetailWidget::Text,
		}
	}

	pub fn with_scope_name(mut self, scope_name: impl Into<String>) -> Self {
		self.scope_name = Some(scope_name.into());
		self
	}

	pub fn with_filters<I, S>(mut self, filters: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.filters = filters.into_iter().map(Into::into).collect();
		self
	}

	pub fn with_widget(mut self, widget: DetailWidget) -> Self {
		self.widget = widget;
		self
	}

	/// Build the frozen descriptor, deriving the scope name from the
	/// accessor when the declaration leaves it unset or empty.
	pub fn resolve(&self) -> FieldResult<ResolvedDetailField> {
		if self.label.is_empty() {
			return Err(FieldError::MissingLabel {
				accessor: self.accessor.clone(),
			});
		}
		let scope_name = match non_empty(self.scope_name.as_ref()) {
			Some(name) => name,
			None => field_name_for_accessor(&self.accessor)?,
		};
		Ok(ResolvedDetailField {
			order: self.order,
			scope_name,
			label: self.label.clone(),
			filters: self.filters.clone(),
			widget: self.widget,
		})
	}
}

/// Resolved, default-filled metadata for one detail field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedDetailField {
	pub order: i32,
	pub scope_name: String,
	pub label: String,
	pub filters: Vec<String>,
	pub widget: DetailWidget,
}

/// One entry in an entity's form field table.
///
/// # Examples
///
/// ```
/// use ngview_fields::{FormFieldDecl, FormWidget};
///
/// let decl = FormFieldDecl::new("getCountry", 20, "bookmark.country")
///     .with_widget(FormWidget::Select)
///     .with_options_expression("c.name for c in countries");
/// assert_eq!(decl.resolve().unwrap().scope_name, "country");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormFieldDecl {
	pub accessor: String,
	pub order: i32,
	pub label: String,
	pub scope_name: Option<String>,
	pub widget: FormWidget,
	/// CSS classes merged after the widget's default classes.
	pub css_classes: String,
	/// Attributes appended after the widget's default attributes.
	pub attributes: Vec<String>,
	/// `data-ng-options` expression for options-driven widgets; the
	/// configured default is used when unset.
	pub options_expression: Option<String>,
}

impl FormFieldDecl {
	pub fn new(accessor: impl Into<String>, order: i32, label: impl Into<String>) -> Self {
		Self {
			accessor: accessor.into(),
			order,
			label: label.into(),
			scope_name: None,
			widget: FormWidget::Input,
			css_classes: String::new(),
			attributes: vec![],
			options_expression: None,
		}
	}

	pub fn with_scope_name(mut self, scope_name: impl Into<String>) -> Self {
		self.scope_name = Some(scope_name.into());
		self
	}

	pub fn with_widget(mut self, widget: FormWidget) -> Self {
		self.widget = widget;
		self
	}

	pub fn with_css_classes(mut self, css_classes: impl Into<String>) -> Self {
		self.css_classes = css_classes.into();
		self
	}

	pub fn with_attributes<I, S>(mut self, attributes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.attributes = attributes.into_iter().map(Into::into).collect();
		self
	}

	pub fn with_options_expression(mut self, expression: impl Into<String>) -> Self {
		self.options_expression = Some(expression.into());
		self
	}

	/// Build the frozen descriptor, deriving the scope name when unset.
	pub fn resolve(&self) -> FieldResult<ResolvedFormField> {
		if self.label.is_empty() {
			return Err(FieldError::MissingLabel {
				accessor: self.accessor.clone(),
			});
		}
		let scope_name = match non_empty(self.scope_name.as_ref()) {
			Some(name) => name,
			None => field_name_for_accessor(&self.accessor)?,
		};
		Ok(ResolvedFormField {
			order: self.order,
			scope_name,
			label: self.label.clone(),
			widget: self.widget,
			css_classes: self.css_classes.clone(),
			attributes: self.attributes.clone(),
			options_expression: non_empty(self.options_expression.as_ref()),
		})
	}
}

/// Resolved, default-filled metadata for one form field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedFormField {
	pub order: i32,
	pub scope_name: String,
	pub label: String,
	pub widget: FormWidget,
	pub css_classes: String,
	pub attributes: Vec<String>,
	pub options_expression: Option<String>,
}

/// One entry in an entity's filter-bar field table.
///
/// Filter fields carry two names: `scope_name` binds the widget into the
/// filter model, `field_name` names the queryable property the downstream
/// query layer matches against. Both default from the accessor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterFieldDecl {
	pub accessor: String,
	pub order: i32,
	pub label: String,
	pub scope_name: Option<String>,
	pub field_name: Option<String>,
	pub op: FilterOp,
	pub widget: FormWidget,
	pub css_classes: String,
	pub attributes: String,
}

impl FilterFieldDecl {
	pub fn new(accessor: impl Into<String>, order: i32, label: impl Into<String>) -> Self {
		Self {
			accessor: accessor.into(),
			order,
			label: label.into(),
			scope_name: None,
			field_name: None,
			op: FilterOp::Like,
			widget: FormWidget::Input,
			css_classes: String::new(),
			attributes: String::new(),
		}
	}

	pub fn with_scope_name(mut self, scope_name: impl Into<String>) -> Self {
		self.scope_name = Some(scope_name.into());
		self
	}

	pub fn with_field_name(mut self, field_name: impl Into<String>) -> Self {
		self.field_name = Some(field_name.into());
		self
	}

	pub fn with_op(mut self, op: FilterOp) -> Self {
		self.op = op;
		self
	}

	pub fn with_widget(mut self, widget: FormWidget) -> Self {
		self.widget = widget;
		self
	}

	pub fn with_css_classes(mut self, css_classes: impl Into<String>) -> Self {
		self.css_classes = css_classes.into();
		self
	}

	pub fn with_attributes(mut self, attributes: impl Into<String>) -> Self {
		self.attributes = attributes.into();
		self
	}

	/// Build the frozen descriptor, deriving scope and field names from the
	/// accessor where the declaration leaves them unset.
	pub fn resolve(&self) -> FieldResult<ResolvedFilterField> {
		if self.label.is_empty() {
			return Err(FieldError::MissingLabel {
				accessor: self.accessor.clone(),
			});
		}
		let scope_name = match non_empty(self.scope_name.as_ref()) {
			Some(name) => name,
			None => field_name_for_accessor(&self.accessor)?,
		};
		let field_name = match non_empty(self.field_name.as_ref()) {
			Some(name) => name,
			None => field_name_for_accessor(&self.accessor)?,
		};
		Ok(ResolvedFilterField {
			order: self.order,
			scope_name,
			field_name,
			label: self.label.clone(),
			op: self.op,
			widget: self.widget,
			css_classes: self.css_classes.clone(),
			attributes: self.attributes.clone(),
		})
	}
}

/// Resolved, default-filled metadata for one filter field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedFilterField {
	pub order: i32,
	pub scope_name: String,
	pub field_name: String,
	pub label: String,
	pub op: FilterOp,
	pub widget: FormWidget,
	pub css_classes: String,
	pub attributes: String,
}

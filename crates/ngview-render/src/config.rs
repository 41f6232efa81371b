//! Rendering configuration.

/// Settings shared by the three fragment renderers.
///
/// The defaults reproduce the conventional scope layout: detail rows read
/// from `item`, form bindings hang off `form`, filter bindings off `filter`,
/// options-driven widgets fall back to an `options` list and labels run
/// through the `translate` filter.
///
/// # Examples
///
/// ```
/// use ngview_render::RenderConfig;
///
/// let config = RenderConfig::new().with_form_model("bookmark");
/// assert_eq!(config.form_model, "bookmark");
/// assert_eq!(config.filter_model, "filter");
/// ```
#[derive(Debug, Clone)]
pub struct RenderConfig {
	/// Scope variable a form's two-way bindings hang off.
	pub form_model: String,
	/// Scope variable filter bindings hang off.
	pub filter_model: String,
	/// Scope variable detail bindings read from.
	pub detail_model: String,
	/// `data-ng-options` expression used when a declaration supplies none.
	pub default_options: String,
	/// Client-side filter labels run through for translation.
	pub translate_filter: String,
	/// Path of the filter-bar wrapper template, relative to the loader base.
	pub filter_wrapper_path: String,
}

impl Default for RenderConfig {
	fn default() -> Self {
		Self {
			form_model: "form".to_string(),
			filter_model: "filter".to_string(),
			detail_model: "item".to_string(),
			default_options: "options".to_string(),
			translate_filter: "translate".to_string(),
			filter_wrapper_path: "filterWidgetTemplate.html".to_string(),
		}
	}
}

impl RenderConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_form_model(mut self, model: impl Into<String>) -> Self {
		self.form_model = model.into();
		self
	}

	pub fn with_filter_model(mut self, model: impl Into<String>) -> Self {
		self.filter_model = model.into();
		self
	}

	pub fn with_detail_model(mut self, model: impl Into<String>) -> Self {
		self.detail_model = model.into();
		self
	}

	pub fn with_default_options(mut self, expression: impl Into<String>) -> Self {
		self.default_options = expression.into();
		self
	}

	pub fn with_translate_filter(mut self, filter: impl Into<String>) -> Self {
		self.translate_filter = filter.into();
		self
	}

	pub fn with_filter_wrapper_path(mut self, path: impl Into<String>) -> Self {
		self.filter_wrapper_path = path.into();
		self
	}
}

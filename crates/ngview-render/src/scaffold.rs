//! Entity view scaffolding.
//!
//! [`ViewScaffold`] ties a field registry, a render configuration and a
//! template loader together, one method per emitted view. This is the
//! library-level counterpart of the original tag handlers: the host view
//! engine asks for a fragment by entity name and writes the returned string
//! into the surrounding document verbatim.

use ngview_fields::EntityRegistry;

use crate::config::RenderConfig;
use crate::detail::render_detail;
use crate::error::RenderResult;
use crate::filter::render_filter;
use crate::form::render_form;
use crate::loader::FileTemplateLoader;

/// Resolves an entity's field tables and renders its view fragments.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use ngview_fields::{DetailFieldDecl, EntityFields, EntityRegistry};
/// use ngview_render::{FileTemplateLoader, ViewScaffold};
///
/// let mut registry = EntityRegistry::new();
/// registry.register(
///     "com.example.Bookmark",
///     EntityFields::new()
///         .with_detail(DetailFieldDecl::new("getTitle", 10, "bookmark.title")),
/// );
///
/// let scaffold = ViewScaffold::new(registry, FileTemplateLoader::new(Path::new("templates")));
/// let html = scaffold.detail_view("com.example.Bookmark").unwrap();
/// assert!(html.contains("{{item.title}}"));
/// ```
pub struct ViewScaffold {
	registry: EntityRegistry,
	config: RenderConfig,
	loader: FileTemplateLoader,
}

impl ViewScaffold {
	pub fn new(registry: EntityRegistry, loader: FileTemplateLoader) -> Self {
		Self {
			registry,
			config: RenderConfig::default(),
			loader,
		}
	}

	pub fn with_config(mut self, config: RenderConfig) -> Self {
		self.config = config;
		self
	}

	pub fn registry(&self) -> &EntityRegistry {
		&self.registry
	}

	pub fn config(&self) -> &RenderConfig {
		&self.config
	}

	/// Render the read-only detail view for `entity`.
	pub fn detail_view(&self, entity: &str) -> RenderResult<String> {
		let fields = self.registry.resolve_detail(entity)?;
		render_detail(&fields, &self.config)
	}

	/// Render the editing form for `entity`.
	pub fn entity_form(&self, entity: &str) -> RenderResult<String> {
		let fields = self.registry.resolve_form(entity)?;
		render_form(&fields, &self.config)
	}

	/// Render the filter bar for `entity`, loading the wrapper template
	/// named by the configuration.
	pub fn filter_bar(&self, entity: &str) -> RenderResult<String> {
		let fields = self.registry.resolve_filter(entity)?;
		let wrapper = self.loader.load(&self.config.filter_wrapper_path)?;
		render_filter(&fields, &wrapper, &self.config)
	}
}

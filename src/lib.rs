//! # ngview
//!
//! Server-side AngularJS view scaffolding: entities declare field tables
//! next to their types, and ngview turns them into HTML fragments wired to
//! a scope model — read-only detail views, editing forms with
//! validation-error placeholders, and filter bars bound to a query model.
//!
//! ## Feature Flags
//!
//! - `fields` - Field tables, widget variants and metadata resolution
//! - `render` - Fragment renderers (implies `fields`)
//! - `full` (default) - Everything
//!
//! ## Quick Example
//!
//! ```rust
//! use ngview::fields::{DetailFieldDecl, DetailWidget, EntityFields, EntityRegistry};
//! use ngview::render::{RenderConfig, render_detail};
//!
//! let mut registry = EntityRegistry::new();
//! registry.register(
//!     "com.example.Bookmark",
//!     EntityFields::new()
//!         .with_detail(DetailFieldDecl::new("getTitle", 10, "bookmark.title"))
//!         .with_detail(
//!             DetailFieldDecl::new("getUrl", 20, "bookmark.url")
//!                 .with_widget(DetailWidget::Link),
//!         ),
//! );
//!
//! let fields = registry.resolve_detail("com.example.Bookmark").unwrap();
//! let html = render_detail(&fields, &RenderConfig::default()).unwrap();
//! assert!(html.contains("href=\"{{item.url}}\""));
//! ```

#[cfg(feature = "fields")]
pub mod fields;
#[cfg(feature = "render")]
pub mod render;

#[cfg(feature = "fields")]
pub use ngview_fields::{
	DetailFieldDecl, DetailWidget, EntityFields, EntityRegistry, FieldError, FieldResult,
	FilterFieldDecl, FilterOp, FormFieldDecl, FormWidget,
};
#[cfg(feature = "render")]
pub use ngview_render::{
	FileTemplateLoader, RenderConfig, RenderError, RenderResult, ViewScaffold,
};

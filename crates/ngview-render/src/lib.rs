//! HTML fragment renderers for resolved field descriptors.
//!
//! Three renderers, one per view kind:
//! - [`render_detail`] — read-only label/value rows,
//! - [`render_form`] — editable rows with two-way bindings and
//!   validation-error placeholders,
//! - [`render_filter`] — filter bars bound to a query model, substituted
//!   into a wrapper template.
//!
//! Every render call is a pure function of its descriptors, the
//! [`RenderConfig`] and the fixed widget template tables. Substitution is
//! literal string replacement: descriptor values are emitted verbatim, not
//! HTML-escaped. [`ViewScaffold`] bundles the renderers with an entity
//! registry and a [`FileTemplateLoader`] for the common by-entity-name path.

pub mod config;
pub mod detail;
pub mod error;
pub mod filter;
pub mod form;
pub mod loader;
pub mod scaffold;

pub use config::RenderConfig;
pub use detail::render_detail;
pub use error::{RenderError, RenderResult};
pub use filter::{FILTER_FIELDS_TOKEN, render_filter};
pub use form::render_form;
pub use loader::FileTemplateLoader;
pub use scaffold::ViewScaffold;

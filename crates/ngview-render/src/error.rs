//! Error types for fragment rendering.

use ngview_fields::FieldError;

/// Errors raised while rendering descriptors into HTML fragments.
///
/// All variants are fatal to the render call that raised them; there is no
/// partial or degraded output.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
	/// The widget has no entry in the fixed template table.
	#[error("no template registered for widget `{widget}`")]
	UnknownWidget { widget: String },
	/// A template resource could not be loaded.
	#[error("template resource `{path}` not found: {reason}")]
	TemplateNotFound { path: String, reason: String },
	/// Field resolution failed while building a view for an entity.
	#[error(transparent)]
	Field(#[from] FieldError),
}

pub type RenderResult<T> = Result<T, RenderError>;

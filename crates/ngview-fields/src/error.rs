//! Error types for field metadata resolution.

/// Errors raised while resolving an entity's field tables.
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
	/// The requested entity name has no registered field tables.
	#[error("no field tables registered for entity `{entity}`")]
	EntityNotFound { entity: String },
	/// A default name had to be derived from an accessor whose name carries
	/// neither a `get` nor an `is` prefix.
	#[error("unsupported accessor prefix in method `{method}`")]
	UnsupportedAccessor { method: String },
	/// A declaration was registered with an empty label.
	#[error("declaration for accessor `{accessor}` has an empty label")]
	MissingLabel { accessor: String },
}

pub type FieldResult<T> = Result<T, FieldError>;

//! Entity registry and field table resolution.
//!
//! Entities register their field tables under a name; resolution looks the
//! name up, backfills declaration defaults and returns descriptors sorted by
//! `order`. The registry is a plain value owned by the caller; share it
//! behind an `Arc` for concurrent reads.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::descriptor::{
	DetailFieldDecl, FilterFieldDecl, FormFieldDecl, ResolvedDetailField, ResolvedFilterField,
	ResolvedFormField,
};
use crate::error::{FieldError, FieldResult};

/// Field tables declared for one entity.
///
/// # Examples
///
/// ```
/// use ngview_fields::{DetailFieldDecl, EntityFields, FormFieldDecl};
///
/// let fields = EntityFields::new()
///     .with_detail(DetailFieldDecl::new("getTitle", 10, "bookmark.title"))
///     .with_form(FormFieldDecl::new("getTitle", 10, "bookmark.title"));
/// assert_eq!(fields.detail.len(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityFields {
	pub detail: Vec<DetailFieldDecl>,
	pub form: Vec<FormFieldDecl>,
	pub filter: Vec<FilterFieldDecl>,
}

impl EntityFields {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_detail(mut self, decl: DetailFieldDecl) -> Self {
		self.detail.push(decl);
		self
	}

	pub fn with_form(mut self, decl: FormFieldDecl) -> Self {
		self.form.push(decl);
		self
	}

	pub fn with_filter(mut self, decl: FilterFieldDecl) -> Self {
		self.filter.push(decl);
		self
	}
}

/// Registry mapping entity names to their declared field tables.
///
/// Resolution is idempotent: the same registry state yields byte-identical
/// descriptor sequences. Ties on `order` keep declaration order (the sort is
/// stable and tables are explicit).
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
	entities: HashMap<String, EntityFields>,
}

impl EntityRegistry {
	/// Create an empty registry.
	///
	/// # Examples
	///
	/// ```
	/// use ngview_fields::EntityRegistry;
	///
	/// let registry = EntityRegistry::new();
	/// assert!(!registry.contains("com.example.Bookmark"));
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Register an entity's field tables, replacing any previous tables
	/// registered under the same name.
	pub fn register(&mut self, entity: impl Into<String>, fields: EntityFields) {
		self.entities.insert(entity.into(), fields);
	}

	/// Whether field tables are registered for `entity`.
	pub fn contains(&self, entity: &str) -> bool {
		self.entities.contains_key(entity)
	}

	fn fields(&self, entity: &str) -> FieldResult<&EntityFields> {
		self.entities
			.get(entity)
			.ok_or_else(|| FieldError::EntityNotFound {
				entity: entity.to_string(),
			})
	}

	/// Resolve the detail-view descriptors for `entity`, sorted by `order`.
	pub fn resolve_detail(&self, entity: &str) -> FieldResult<Vec<ResolvedDetailField>> {
		let fields = self.fields(entity)?;
		tracing::debug!(entity, count = fields.detail.len(), "resolving detail fields");
		let mut resolved = fields
			.detail
			.iter()
			.map(DetailFieldDecl::resolve)
			.collect::<FieldResult<Vec<_>>>()?;
		resolved.sort_by_key(|field| field.order);
		Ok(resolved)
	}

	/// Resolve the form descriptors for `entity`, sorted by `order`.
	pub fn resolve_form(&self, entity: &str) -> FieldResult<Vec<ResolvedFormField>> {
		let fields = self.fields(entity)?;
		tracing::debug!(entity, count = fields.form.len(), "resolving form fields");
		let mut resolved = fields
			.form
			.iter()
			.map(FormFieldDecl::resolve)
			.collect::<FieldResult<Vec<_>>>()?;
		resolved.sort_by_key(|field| field.order);
		Ok(resolved)
	}

	/// Resolve the filter descriptors for `entity`, sorted by `order`.
	pub fn resolve_filter(&self, entity: &str) -> FieldResult<Vec<ResolvedFilterField>> {
		let fields = self.fields(entity)?;
		tracing::debug!(entity, count = fields.filter.len(), "resolving filter fields");
		let mut resolved = fields
			.filter
			.iter()
			.map(FilterFieldDecl::resolve)
			.collect::<FieldResult<Vec<_>>>()?;
		resolved.sort_by_key(|field| field.order);
		Ok(resolved)
	}
}

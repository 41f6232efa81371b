//! Entity field tables and their resolution.
//!
//! Entities declare how their fields appear in detail views, forms and
//! filter bars by building explicit field tables next to the entity type,
//! then registering them in an [`EntityRegistry`] under the entity's name.
//! Resolution backfills unset binding names from the declared accessor
//! method name and returns immutable descriptors sorted by display order,
//! ready for the renderers in `ngview-render`.
//!
//! ```
//! use ngview_fields::{DetailFieldDecl, EntityFields, EntityRegistry};
//!
//! let mut registry = EntityRegistry::new();
//! registry.register(
//!     "com.example.User",
//!     EntityFields::new()
//!         .with_detail(DetailFieldDecl::new("getUserName", 10, "user.name")),
//! );
//!
//! let fields = registry.resolve_detail("com.example.User").unwrap();
//! assert_eq!(fields[0].scope_name, "userName");
//! ```

pub mod accessor;
pub mod descriptor;
pub mod error;
pub mod registry;
pub mod widget;

pub use accessor::field_name_for_accessor;
pub use descriptor::{
	DetailFieldDecl, FilterFieldDecl, FormFieldDecl, ResolvedDetailField, ResolvedFilterField,
	ResolvedFormField,
};
pub use error::{FieldError, FieldResult};
pub use registry::{EntityFields, EntityRegistry};
pub use widget::{DetailWidget, FilterOp, FormWidget, WidgetSpec};

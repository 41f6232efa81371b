//! Field metadata module.
//!
//! Entity field tables, widget variants and descriptor resolution.
//!
//! # Examples
//!
//! ```rust
//! use ngview::fields::{EntityFields, EntityRegistry, FormFieldDecl};
//!
//! let mut registry = EntityRegistry::new();
//! registry.register(
//!     "com.example.User",
//!     EntityFields::new().with_form(FormFieldDecl::new("getUserName", 10, "user.name")),
//! );
//! assert!(registry.contains("com.example.User"));
//! ```

pub use ngview_fields::*;

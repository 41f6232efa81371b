//! Fragment rendering module.
//!
//! Detail, form and filter renderers plus the scaffold facade and the
//! filesystem template loader.
//!
//! # Examples
//!
//! ```rust
//! use ngview::render::{RenderConfig, render_form};
//!
//! let html = render_form(&[], &RenderConfig::default()).unwrap();
//! assert_eq!(html, "<div class=\"form-horizontal\"></div>");
//! ```

pub use ngview_render::*;

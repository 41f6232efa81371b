//! Filesystem template loader.
//!
//! The resource collaborator behind the filter-bar wrapper template. Loads
//! are restricted to the configured base directory; traversal outside it is
//! rejected. Caching is an optimization only, repeated loads are idempotent
//! either way.

use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::RwLock;

use crate::error::{RenderError, RenderResult};

/// Loads template resources from a base directory.
#[derive(Debug)]
pub struct FileTemplateLoader {
	base_dir: PathBuf,
	/// `None` disables caching entirely.
	cache: Option<RwLock<HashMap<String, String>>>,
}

impl FileTemplateLoader {
	/// Create a caching loader rooted at `base_dir`.
	///
	/// # Examples
	///
	/// ```no_run
	/// use std::path::Path;
	/// use ngview_render::FileTemplateLoader;
	///
	/// let loader = FileTemplateLoader::new(Path::new("templates"));
	/// let wrapper = loader.load("filterWidgetTemplate.html").unwrap();
	/// # let _ = wrapper;
	/// ```
	pub fn new(base_dir: &Path) -> Self {
		Self {
			base_dir: base_dir.to_path_buf(),
			cache: Some(RwLock::new(HashMap::new())),
		}
	}

	/// Create a loader that re-reads the file on every load.
	pub fn without_cache(base_dir: &Path) -> Self {
		Self {
			base_dir: base_dir.to_path_buf(),
			cache: None,
		}
	}

	/// Load a template resource by path relative to the base directory.
	///
	/// Fails when the path escapes the base directory, names a directory, or
	/// the file is missing or unreadable.
	pub fn load(&self, path: &str) -> RenderResult<String> {
		if let Some(cache) = &self.cache
			&& let Ok(cache) = cache.read()
			&& let Some(content) = cache.get(path)
		{
			tracing::trace!(path, "template cache hit");
			return Ok(content.clone());
		}

		let full_path = self.resolve(path)?;
		if !full_path.is_file() {
			return Err(not_found(path, "no such file"));
		}
		let content = fs::read_to_string(&full_path)
			.map_err(|err| not_found(path, &err.to_string()))?;

		if let Some(cache) = &self.cache
			&& let Ok(mut cache) = cache.write()
		{
			cache.insert(path.to_string(), content.clone());
		}

		Ok(content)
	}

	/// Drop all cached contents.
	pub fn clear_cache(&self) {
		if let Some(cache) = &self.cache
			&& let Ok(mut cache) = cache.write()
		{
			cache.clear();
		}
	}

	pub fn base_dir(&self) -> &Path {
		&self.base_dir
	}

	// Resolves the relative path, rejecting anything that could escape the
	// base directory.
	fn resolve(&self, path: &str) -> RenderResult<PathBuf> {
		let relative = path.trim_start_matches('/');
		if relative.is_empty() {
			return Err(not_found(path, "empty path"));
		}
		for component in Path::new(relative).components() {
			match component {
				Component::ParentDir => {
					return Err(not_found(path, "parent traversal not allowed"));
				}
				Component::RootDir | Component::Prefix(_) => {
					return Err(not_found(path, "absolute path not allowed"));
				}
				_ => {}
			}
		}
		Ok(self.base_dir.join(relative))
	}
}

fn not_found(path: &str, reason: &str) -> RenderError {
	RenderError::TemplateNotFound {
		path: path.to_string(),
		reason: reason.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use tempfile::TempDir;

	fn write_template(dir: &Path, name: &str, content: &str) {
		let path = dir.join(name);
		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent).unwrap();
		}
		fs::write(path, content).unwrap();
	}

	#[test]
	fn loads_a_template() {
		let dir = TempDir::new().unwrap();
		write_template(dir.path(), "wrapper.html", "<form>%%FILTER_FIELDS%%</form>");

		let loader = FileTemplateLoader::new(dir.path());
		assert_eq!(
			loader.load("wrapper.html").unwrap(),
			"<form>%%FILTER_FIELDS%%</form>"
		);
	}

	#[test]
	fn missing_template_fails() {
		let dir = TempDir::new().unwrap();
		let loader = FileTemplateLoader::new(dir.path());

		assert!(matches!(
			loader.load("absent.html"),
			Err(RenderError::TemplateNotFound { .. })
		));
	}

	#[rstest]
	#[case("../outside.html")]
	#[case("sub/../../outside.html")]
	#[case("/etc/passwd")]
	#[case("")]
	fn escaping_paths_are_rejected(#[case] path: &str) {
		let dir = TempDir::new().unwrap();
		let loader = FileTemplateLoader::new(dir.path());

		assert!(loader.load(path).is_err());
	}

	#[test]
	fn directories_are_not_templates() {
		let dir = TempDir::new().unwrap();
		fs::create_dir_all(dir.path().join("sub")).unwrap();

		let loader = FileTemplateLoader::new(dir.path());
		assert!(loader.load("sub").is_err());
	}

	#[test]
	fn cache_serves_stale_content_until_cleared() {
		let dir = TempDir::new().unwrap();
		write_template(dir.path(), "cached.html", "first");

		let loader = FileTemplateLoader::new(dir.path());
		assert_eq!(loader.load("cached.html").unwrap(), "first");

		write_template(dir.path(), "cached.html", "second");
		assert_eq!(loader.load("cached.html").unwrap(), "first");

		loader.clear_cache();
		assert_eq!(loader.load("cached.html").unwrap(), "second");
	}

	#[test]
	fn uncached_loader_sees_every_write() {
		let dir = TempDir::new().unwrap();
		write_template(dir.path(), "live.html", "first");

		let loader = FileTemplateLoader::without_cache(dir.path());
		assert_eq!(loader.load("live.html").unwrap(), "first");

		write_template(dir.path(), "live.html", "second");
		assert_eq!(loader.load("live.html").unwrap(), "second");
	}

	#[test]
	fn leading_slashes_are_normalized() {
		let dir = TempDir::new().unwrap();
		write_template(dir.path(), "wrapper.html", "content");

		let loader = FileTemplateLoader::new(dir.path());
		assert_eq!(loader.load("/wrapper.html").unwrap(), "content");
	}

	#[test]
	fn subdirectory_templates_load() {
		let dir = TempDir::new().unwrap();
		write_template(dir.path(), "tags/filter.html", "nested");

		let loader = FileTemplateLoader::new(dir.path());
		assert_eq!(loader.load("tags/filter.html").unwrap(), "nested");
	}
}

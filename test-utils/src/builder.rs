use std::path::Path;

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with bundled resources on disk.
///
/// Provides a fluent interface for describing the files a test needs. Nothing is
/// written until `build()` is called.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_properties("token=xyz\n")
///     .with_static_file("index.html", "<h1>hello</h1>")
///     .build()?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// Raw contents of the properties resource, if one should exist.
    properties: Option<String>,

    /// Static files to create, as (path relative to the static directory, contents).
    static_files: Vec<(String, String)>,
}

impl TestBuilder {
    /// Creates a new test builder with no files configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the raw contents of the bundled properties resource.
    ///
    /// # Arguments
    /// - `contents` - Text written verbatim to `app.properties`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_properties(mut self, contents: impl Into<String>) -> Self {
        self.properties = Some(contents.into());
        self
    }

    /// Adds a file to the static asset tree.
    ///
    /// Parent directories of `path` are created as needed during `build()`.
    ///
    /// # Arguments
    /// - `path` - Path relative to the static directory
    /// - `contents` - File contents
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_static_file(mut self, path: impl Into<String>, contents: impl Into<String>) -> Self {
        self.static_files.push((path.into(), contents.into()));
        self
    }

    /// Writes every configured file and returns the context owning them.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Temporary directory populated with the configured files
    /// - `Err(TestError::Io)` - Failed to create the directory or write a file
    pub fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new()?;

        if let Some(properties) = self.properties {
            std::fs::write(&context.properties_path, properties)?;
        }

        for (path, contents) in self.static_files {
            let target = context.static_dir.join(Path::new(&path));
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(target, contents)?;
        }

        Ok(context)
    }
}

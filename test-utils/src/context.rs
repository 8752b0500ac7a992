use std::path::PathBuf;

use tempfile::TempDir;

/// Test context holding an isolated temporary directory and the paths inside it.
///
/// The directory is removed when the context is dropped, so keep the context alive
/// for as long as the test reads from any of its paths.
pub struct TestContext {
    /// Root of the temporary directory.
    pub dir: TempDir,

    /// Location of the bundled properties resource.
    ///
    /// Always set, even when the builder was not given any properties. In that case
    /// the file does not exist, which is how tests exercise the missing-resource path.
    pub properties_path: PathBuf,

    /// Directory holding the static asset tree.
    pub static_dir: PathBuf,
}

impl TestContext {
    /// Creates a new context backed by a fresh temporary directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with an empty static directory created
    /// - `Err(std::io::Error)` - Failed to create the temporary directory
    pub fn new() -> Result<Self, std::io::Error> {
        let dir = tempfile::tempdir()?;
        let properties_path = dir.path().join("app.properties");
        let static_dir = dir.path().join("static");

        std::fs::create_dir_all(&static_dir)?;

        Ok(Self {
            dir,
            properties_path,
            static_dir,
        })
    }
}

//! Helpbot Test Utils
//!
//! Provides shared testing utilities for the helpbot crate. Tests that touch the
//! filesystem (bundled properties resources, static asset trees) build an isolated
//! temporary directory through a builder so nothing leaks between test runs.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring the temporary environment
//! - **TestContext**: The built environment holding the resolved paths
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn loads_bundled_properties() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_properties("token=xyz\nguildId=42\n")
//!         .build()?;
//!
//!     let resolver = ConfigResolver::new(&test.properties_path);
//!     // Resolve configuration...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;

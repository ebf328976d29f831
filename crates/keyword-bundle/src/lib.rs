//! Registry of JSON Schema keyword definitions.
//!
//! A [`KeywordBundle`] maps keyword names (`"type"`, `"properties"`,
//! `"minimum"`, ...) to [`Keyword`] definitions and keeps an index of the
//! [`SyntaxChecker`]s those keywords supply. A schema factory consults a
//! bundle to learn which keywords exist and how to check their syntax.
//!
//! Bundles are cheap to fork: derive a customized bundle from a shared
//! default with [`KeywordBundle::copy`] and register extra keywords on the
//! copy without touching the original.
//!
//! ```
//! use std::sync::Arc;
//!
//! use keyword_bundle::{FnSyntaxChecker, Keyword, KeywordBundle};
//!
//! let checker = Arc::new(FnSyntaxChecker::new(|keyword, schema, report| {
//!     if !schema[keyword].is_string() {
//!         report.push(keyword, "expected a string");
//!     }
//! }));
//!
//! let mut bundle = KeywordBundle::new();
//! bundle
//!     .register_keyword(Keyword::builder("format").with_syntax_checker(checker).build()?)
//!     .unwrap();
//!
//! let report = bundle
//!     .get_syntax_checkers()
//!     .check_schema(&serde_json::json!({ "format": 3 }));
//! assert_eq!(report.len(), 1);
//! # Ok::<(), keyword_bundle::BundleError>(())
//! ```

pub mod bundle;
pub mod config;
pub mod error;
pub mod keyword;
pub mod syntax;

pub use bundle::{KeywordBundle, KeywordSnapshot, SnapshotIter};
pub use config::{BundleConfig, DuplicatePolicy};
pub use error::{BundleError, Result};
pub use keyword::{Keyword, KeywordBuilder};
pub use syntax::{FnSyntaxChecker, SyntaxChecker, SyntaxCheckers, SyntaxMessage, SyntaxReport};

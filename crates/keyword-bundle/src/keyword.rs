use std::sync::Arc;

use crate::error::{BundleError, Result};
use crate::syntax::SyntaxChecker;

/// A named keyword definition.
///
/// Keywords are immutable once built. Bundles store them behind an `Arc`, so
/// a default bundle and every copy derived from it share the same instances.
#[derive(Debug, Clone)]
pub struct Keyword {
    name: String,
    syntax_checker: Option<Arc<dyn SyntaxChecker>>,
}

impl Keyword {
    /// Start building a keyword with the given name.
    pub fn builder(name: impl Into<String>) -> KeywordBuilder {
        KeywordBuilder {
            name: name.into(),
            syntax_checker: None,
        }
    }

    /// Keyword name as it appears in a schema (e.g. `"minimum"`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Checker used to validate this keyword's syntax, if any.
    pub fn syntax_checker(&self) -> Option<&Arc<dyn SyntaxChecker>> {
        self.syntax_checker.as_ref()
    }

    pub fn has_syntax_checker(&self) -> bool {
        self.syntax_checker.is_some()
    }
}

/// Builder for [`Keyword`].
#[derive(Debug, Clone)]
pub struct KeywordBuilder {
    name: String,
    syntax_checker: Option<Arc<dyn SyntaxChecker>>,
}

impl KeywordBuilder {
    /// Attach a syntax checker, replacing any previously set one.
    pub fn with_syntax_checker(mut self, checker: Arc<dyn SyntaxChecker>) -> Self {
        self.syntax_checker = Some(checker);
        self
    }

    /// Drop any previously set syntax checker.
    pub fn without_syntax_checker(mut self) -> Self {
        self.syntax_checker = None;
        self
    }

    /// Finish the keyword. Fails if the name is empty.
    pub fn build(self) -> Result<Keyword> {
        if self.name.is_empty() {
            return Err(BundleError::InvalidArgument(
                "keyword name must not be empty".to_string(),
            ));
        }

        Ok(Keyword {
            name: self.name,
            syntax_checker: self.syntax_checker,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::FnSyntaxChecker;

    #[test]
    fn build_without_checker() {
        let keyword = Keyword::builder("properties").build().unwrap();
        assert_eq!(keyword.name(), "properties");
        assert!(!keyword.has_syntax_checker());
        assert!(keyword.syntax_checker().is_none());
    }

    #[test]
    fn build_with_checker_keeps_identity() {
        let checker: Arc<dyn SyntaxChecker> = Arc::new(FnSyntaxChecker::new(|_, _, _| {}));
        let keyword = Keyword::builder("type")
            .with_syntax_checker(Arc::clone(&checker))
            .build()
            .unwrap();

        assert!(keyword.has_syntax_checker());
        assert!(Arc::ptr_eq(keyword.syntax_checker().unwrap(), &checker));
    }

    #[test]
    fn without_checker_clears_previous() {
        let keyword = Keyword::builder("type")
            .with_syntax_checker(Arc::new(FnSyntaxChecker::new(|_, _, _| {})))
            .without_syntax_checker()
            .build()
            .unwrap();
        assert!(!keyword.has_syntax_checker());
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(matches!(
            Keyword::builder("").build(),
            Err(BundleError::InvalidArgument(_))
        ));
    }
}

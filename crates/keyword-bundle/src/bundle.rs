use std::collections::{btree_map, BTreeMap};
use std::sync::Arc;

use tracing::{debug, trace};

use crate::config::{BundleConfig, DuplicatePolicy};
use crate::error::{BundleError, Result};
use crate::keyword::Keyword;
use crate::syntax::{SyntaxChecker, SyntaxCheckers};

type KeywordMap = BTreeMap<String, Arc<Keyword>>;
type CheckerMap = BTreeMap<String, Arc<dyn SyntaxChecker>>;

/// Name-keyed registry of keyword definitions and their syntax checkers.
///
/// The checker index only ever holds names whose registered keyword supplies
/// a checker, and always the checker of the keyword registered last.
///
/// Storage is copy-on-write: [`copy`](Self::copy), [`snapshot`](Self::snapshot)
/// and [`get_syntax_checkers`](Self::get_syntax_checkers) share the current
/// maps, and the next mutation clones them instead of touching what was
/// handed out.
///
/// Mutation takes `&mut self`. To mutate a bundle shared between threads,
/// wrap it in a lock; snapshots can be sent anywhere.
#[derive(Debug, Clone, Default)]
pub struct KeywordBundle {
    keywords: Arc<KeywordMap>,
    syntax_checkers: Arc<CheckerMap>,
    config: BundleConfig,
}

impl KeywordBundle {
    /// Create an empty bundle with default config.
    pub fn new() -> Self {
        Self::with_config(BundleConfig::default())
    }

    /// Create an empty bundle with explicit config.
    pub fn with_config(config: BundleConfig) -> Self {
        Self {
            keywords: Arc::default(),
            syntax_checkers: Arc::default(),
            config,
        }
    }

    /// Build a bundle from a set of keywords, using default config.
    pub fn from_keywords<I, K>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
        K: Into<Arc<Keyword>>,
    {
        Self::from_keywords_with_config(keywords, BundleConfig::default())
    }

    /// Build a bundle from a set of keywords with explicit config.
    pub fn from_keywords_with_config<I, K>(keywords: I, config: BundleConfig) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
        K: Into<Arc<Keyword>>,
    {
        let mut bundle = Self::with_config(config);
        for keyword in keywords {
            bundle.register_keyword(keyword)?;
        }
        Ok(bundle)
    }

    /// Register a keyword under its name.
    ///
    /// With [`DuplicatePolicy::Reject`] an already registered name fails with
    /// [`BundleError::DuplicateKeyword`] and the bundle is left unchanged;
    /// call [`unregister_keyword`](Self::unregister_keyword) first to replace
    /// it. With [`DuplicatePolicy::Replace`] the previous definition and its
    /// checker are dropped.
    pub fn register_keyword(&mut self, keyword: impl Into<Arc<Keyword>>) -> Result<()> {
        let keyword = keyword.into();
        let name = keyword.name().to_string();

        let replaced = self.keywords.contains_key(&name);
        if replaced && self.config.duplicate_policy == DuplicatePolicy::Reject {
            return Err(BundleError::DuplicateKeyword(name));
        }

        match keyword.syntax_checker() {
            Some(checker) => {
                Arc::make_mut(&mut self.syntax_checkers).insert(name.clone(), Arc::clone(checker));
            }
            None if self.syntax_checkers.contains_key(&name) => {
                Arc::make_mut(&mut self.syntax_checkers).remove(&name);
            }
            None => {}
        }

        debug!(
            keyword = %name,
            replaced,
            has_syntax_checker = keyword.has_syntax_checker(),
            "registered keyword"
        );
        Arc::make_mut(&mut self.keywords).insert(name, keyword);
        Ok(())
    }

    /// Remove a keyword and its checker. Unknown names are a no-op.
    pub fn unregister_keyword(&mut self, name: &str) -> Option<Arc<Keyword>> {
        if !self.keywords.contains_key(name) {
            return None;
        }

        if self.syntax_checkers.contains_key(name) {
            Arc::make_mut(&mut self.syntax_checkers).remove(name);
        }
        let removed = Arc::make_mut(&mut self.keywords).remove(name);
        debug!(keyword = %name, "unregistered keyword");
        removed
    }

    /// Independent copy of this bundle.
    ///
    /// Keywords and checkers are shared with the original; membership is
    /// not, so registering into either bundle never affects the other.
    pub fn copy(&self) -> Self {
        trace!(keywords = self.keywords.len(), "copying keyword bundle");
        self.clone()
    }

    /// Frozen view of the name → syntax checker index.
    pub fn get_syntax_checkers(&self) -> SyntaxCheckers {
        SyntaxCheckers::from_shared(Arc::clone(&self.syntax_checkers))
    }

    /// Frozen view of the registered keywords, taken now.
    pub fn snapshot(&self) -> KeywordSnapshot {
        KeywordSnapshot {
            keywords: Arc::clone(&self.keywords),
        }
    }

    /// Iterate over registered keywords in name order.
    pub fn iter(&self) -> SnapshotIter<'_> {
        SnapshotIter {
            inner: self.keywords.iter(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Keyword>> {
        self.keywords.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.keywords.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Registered keyword names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.keywords.keys().map(String::as_str).collect()
    }

    /// Get bundle configuration.
    pub fn config(&self) -> &BundleConfig {
        &self.config
    }
}

impl<'a> IntoIterator for &'a KeywordBundle {
    type Item = (&'a str, &'a Arc<Keyword>);
    type IntoIter = SnapshotIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Registered keywords as of the moment the snapshot was taken.
///
/// Can be iterated any number of times; bundle mutation after the snapshot
/// is invisible to it.
#[derive(Debug, Clone)]
pub struct KeywordSnapshot {
    keywords: Arc<KeywordMap>,
}

impl KeywordSnapshot {
    pub fn iter(&self) -> SnapshotIter<'_> {
        SnapshotIter {
            inner: self.keywords.iter(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Keyword>> {
        self.keywords.get(name)
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl<'a> IntoIterator for &'a KeywordSnapshot {
    type Item = (&'a str, &'a Arc<Keyword>);
    type IntoIter = SnapshotIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for KeywordSnapshot {
    type Item = (String, Arc<Keyword>);
    type IntoIter = btree_map::IntoIter<String, Arc<Keyword>>;

    fn into_iter(self) -> Self::IntoIter {
        Arc::unwrap_or_clone(self.keywords).into_iter()
    }
}

/// Iterator over `(name, keyword)` pairs in name order.
#[derive(Debug, Clone)]
pub struct SnapshotIter<'a> {
    inner: btree_map::Iter<'a, String, Arc<Keyword>>,
}

impl<'a> Iterator for SnapshotIter<'a> {
    type Item = (&'a str, &'a Arc<Keyword>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(name, keyword)| (name.as_str(), keyword))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for SnapshotIter<'_> {}

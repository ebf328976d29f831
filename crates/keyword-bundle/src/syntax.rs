use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Checks the syntax of one keyword inside a schema fragment.
///
/// `schema` is the whole fragment the keyword appears in, so checkers can
/// look at sibling keywords when needed. Problems are appended to `report`.
pub trait SyntaxChecker: Send + Sync + fmt::Debug {
    fn check_syntax(&self, keyword: &str, schema: &Value, report: &mut SyntaxReport);
}

type CheckFn = dyn Fn(&str, &Value, &mut SyntaxReport) + Send + Sync;

/// Syntax checker backed by a closure.
pub struct FnSyntaxChecker {
    check: Box<CheckFn>,
}

impl FnSyntaxChecker {
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&str, &Value, &mut SyntaxReport) + Send + Sync + 'static,
    {
        Self {
            check: Box::new(check),
        }
    }
}

impl SyntaxChecker for FnSyntaxChecker {
    fn check_syntax(&self, keyword: &str, schema: &Value, report: &mut SyntaxReport) {
        (self.check)(keyword, schema, report);
    }
}

impl fmt::Debug for FnSyntaxChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSyntaxChecker").finish_non_exhaustive()
    }
}

/// A single syntax problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxMessage {
    /// Offending keyword; `None` when the fragment itself is malformed.
    pub keyword: Option<String>,
    pub message: String,
}

impl fmt::Display for SyntaxMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.keyword {
            Some(keyword) => write!(f, "{keyword}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Syntax problems collected while checking a schema fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntaxReport {
    messages: Vec<SyntaxMessage>,
}

impl SyntaxReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a problem with `keyword`.
    pub fn push(&mut self, keyword: &str, message: impl Into<String>) {
        self.messages.push(SyntaxMessage {
            keyword: Some(keyword.to_string()),
            message: message.into(),
        });
    }

    fn push_fragment(&mut self, message: impl Into<String>) {
        self.messages.push(SyntaxMessage {
            keyword: None,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn messages(&self) -> &[SyntaxMessage] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<SyntaxMessage> {
        self.messages
    }
}

/// Frozen name → checker view taken from a bundle.
///
/// Later mutation of the bundle never shows up here, and this view offers
/// no way to mutate the bundle.
#[derive(Clone, Default)]
pub struct SyntaxCheckers {
    checkers: Arc<BTreeMap<String, Arc<dyn SyntaxChecker>>>,
}

impl SyntaxCheckers {
    pub(crate) fn from_shared(checkers: Arc<BTreeMap<String, Arc<dyn SyntaxChecker>>>) -> Self {
        Self { checkers }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn SyntaxChecker>> {
        self.checkers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.checkers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }

    /// Keyword names that have a checker, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.checkers.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn SyntaxChecker>)> {
        self.checkers.iter().map(|(name, checker)| (name.as_str(), checker))
    }

    /// Run the matching checker for every keyword present in `schema`.
    ///
    /// Keywords without a checker are skipped. Nested schemas are not
    /// visited; checkers for container keywords decide that themselves.
    pub fn check_schema(&self, schema: &Value) -> SyntaxReport {
        let mut report = SyntaxReport::new();

        let Value::Object(members) = schema else {
            report.push_fragment(format!(
                "schema must be an object, found {}",
                json_type_name(schema)
            ));
            return report;
        };

        for name in members.keys() {
            if let Some(checker) = self.checkers.get(name) {
                checker.check_syntax(name, schema, &mut report);
            }
        }

        report
    }
}

impl fmt::Debug for SyntaxCheckers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.checkers.keys()).finish()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

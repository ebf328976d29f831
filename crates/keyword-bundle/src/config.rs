/// What `register_keyword` does when the name is already taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Fail with `BundleError::DuplicateKeyword`; unregister first to replace.
    #[default]
    Reject,
    /// Replace the previous definition and its syntax checker.
    Replace,
}

/// Controls bundle mutation behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BundleConfig {
    /// Policy applied to every registration on the bundle and its copies.
    pub duplicate_policy: DuplicatePolicy,
}

impl BundleConfig {
    /// Config that silently replaces duplicate registrations.
    pub fn replacing() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::Replace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rejects_duplicates() {
        assert_eq!(
            BundleConfig::default().duplicate_policy,
            DuplicatePolicy::Reject
        );
        assert_eq!(
            BundleConfig::replacing().duplicate_policy,
            DuplicatePolicy::Replace
        );
    }
}

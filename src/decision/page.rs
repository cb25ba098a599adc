//! Per-page tracking overrides.

/// Page-level override of the route decision.
///
/// Pages can force tracking on or off regardless of the configured route
/// lists; `Unspecified` defers to list evaluation. Modeled as an explicit
/// three-valued type instead of an optional boolean so match arms name the
/// intent at every decision site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PageOverride {
    /// Force tracking on for this page.
    Allow,
    /// Force tracking off for this page.
    Deny,
    /// No page-level opinion; route lists decide.
    #[default]
    Unspecified,
}

impl From<Option<bool>> for PageOverride {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::Allow,
            Some(false) => Self::Deny,
            None => Self::Unspecified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unspecified() {
        assert_eq!(PageOverride::default(), PageOverride::Unspecified);
    }

    #[test]
    fn test_from_optional_bool() {
        assert_eq!(PageOverride::from(Some(true)), PageOverride::Allow);
        assert_eq!(PageOverride::from(Some(false)), PageOverride::Deny);
        assert_eq!(PageOverride::from(None), PageOverride::Unspecified);
    }
}

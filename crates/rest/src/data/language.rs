use std::fmt;

/// A language tag such as `en`, `en-US` or `fr`.
///
/// Tags compare case-insensitively, the original spelling is kept for display.
#[derive(Debug, Clone, Eq)]
pub struct Language {
    tag: String,
}

impl Language {
    pub const ALL: &'static str = "*";

    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Primary subtag, `en` for `en-US`
    pub fn primary(&self) -> &str {
        self.tag.split('-').next().unwrap_or(&self.tag)
    }

    /// Checks the tag against a language range from `Accept-Language`.
    ///
    /// `*` matches everything, `en` matches `en` and `en-us` but not `eng`.
    pub fn matches_range(&self, range: &Language) -> bool {
        if range.tag == Self::ALL {
            return true;
        }

        if self == range {
            return true;
        }

        let tag = self.tag.as_bytes();
        let prefix = range.tag.as_bytes();
        tag.len() > prefix.len() && tag[..prefix.len()].eq_ignore_ascii_case(prefix) && tag[prefix.len()] == b'-'
    }
}

impl PartialEq for Language {
    fn eq(&self, other: &Self) -> bool {
        self.tag.eq_ignore_ascii_case(&other.tag)
    }
}

impl std::hash::Hash for Language {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.tag.to_ascii_lowercase().hash(state);
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

impl From<&str> for Language {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

#[cfg(test)]
mod tests {
    use crate::data::Language;

    #[test]
    fn test_case_insensitive_eq() {
        assert_eq!(Language::from("en-US"), Language::from("en-us"));
        assert_eq!(Language::from("en-US").primary(), "en");
    }

    #[test]
    fn test_matches_range() {
        let en_us = Language::from("en-US");
        assert!(en_us.matches_range(&Language::from("en")));
        assert!(en_us.matches_range(&Language::from("EN-us")));
        assert!(en_us.matches_range(&Language::from("*")));
        assert!(!en_us.matches_range(&Language::from("fr")));
        assert!(!Language::from("eng").matches_range(&Language::from("en")));
        assert!(!Language::from("en").matches_range(&Language::from("en-US")));
    }
}

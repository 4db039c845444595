use crate::RestError;
use http::Uri;
use std::fmt;

/// A URI reference, absolute or relative.
///
/// The reference is kept as text so that any string handed to
/// `set_redirect_uri` survives untouched; it is only validated when converted
/// with [`Reference::to_uri`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    value: String,
}

impl Reference {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns true if the reference carries a scheme, e.g. `http://host/path`
    pub fn is_absolute(&self) -> bool {
        self.to_uri().is_ok_and(|uri| uri.scheme().is_some())
    }

    pub fn to_uri(&self) -> Result<Uri, RestError> {
        self.value.parse::<Uri>().map_err(|e| RestError::invalid_reference(&self.value, e))
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<&str> for Reference {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Reference {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<Uri> for Reference {
    fn from(uri: Uri) -> Self {
        Self::new(uri.to_string())
    }
}

impl From<&Uri> for Reference {
    fn from(uri: &Uri) -> Self {
        Self::new(uri.to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::RestError;
    use crate::data::Reference;
    use http::Uri;
    use std::error::Error;

    #[test]
    fn test_absolute_and_relative() {
        let absolute = Reference::from("http://example.com/users/1");
        assert!(absolute.is_absolute());
        assert_eq!(absolute.to_uri().unwrap().path(), "/users/1");

        let relative = Reference::from("/users/1");
        assert!(!relative.is_absolute());
    }

    #[test]
    fn test_invalid_reference() {
        let reference = Reference::from("http://exa mple.com");
        let err = reference.to_uri().unwrap_err();
        assert!(matches!(&err, RestError::InvalidReference { reference, .. } if reference == "http://exa mple.com"));
        assert!(err.source().is_some());
        assert_eq!(reference.as_str(), "http://exa mple.com");
    }

    #[test]
    fn test_from_uri() {
        let uri: Uri = "https://example.com/a?b=c".parse().unwrap();
        assert_eq!(Reference::from(uri).to_string(), "https://example.com/a?b=c");
    }
}

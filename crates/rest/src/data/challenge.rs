use crate::data::Form;
use std::fmt;

/// Authentication challenge sent by an origin server, rendered as a
/// `WWW-Authenticate` header value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeRequest {
    scheme: String,
    realm: Option<String>,
    parameters: Form,
}

impl ChallengeRequest {
    pub fn new(scheme: impl Into<String>, realm: Option<String>) -> Self {
        Self { scheme: scheme.into(), realm, parameters: Form::new() }
    }

    pub fn basic(realm: impl Into<String>) -> Self {
        Self::new("Basic", Some(realm.into()))
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn realm(&self) -> Option<&str> {
        self.realm.as_deref()
    }

    pub fn set_realm(&mut self, realm: Option<String>) {
        self.realm = realm;
    }

    pub fn parameters(&self) -> &Form {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut Form {
        &mut self.parameters
    }
}

impl fmt::Display for ChallengeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.scheme)?;

        let mut sep = " ";
        if let Some(realm) = &self.realm {
            write!(f, "{sep}realm={}", Quoted(realm))?;
            sep = ", ";
        }

        for param in &self.parameters {
            match param.value() {
                Some(value) => write!(f, "{sep}{}={}", param.name(), Quoted(value))?,
                None => write!(f, "{sep}{}", param.name())?,
            }
            sep = ", ";
        }

        Ok(())
    }
}

/// Renders a quoted-string, `"` and `\` escaped as quoted-pair (RFC 9110 §5.6.4)
struct Quoted<'a>(&'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for c in self.0.chars() {
            if matches!(c, '"' | '\\') {
                f.write_str("\\")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str("\"")
    }
}

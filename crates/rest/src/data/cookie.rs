use std::fmt;

/// A cookie the server asks the client to store, rendered as a `Set-Cookie`
/// header value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieSetting {
    pub name: String,
    pub value: String,
    pub path: Option<String>,
    pub domain: Option<String>,
    /// seconds, `0` discards the cookie
    pub max_age: Option<u64>,
    pub secure: bool,
    pub http_only: bool,
}

impl CookieSetting {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into(), ..Default::default() }
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_max_age(mut self, max_age: u64) -> Self {
        self.max_age = Some(max_age);
        self
    }
}

impl fmt::Display for CookieSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)?;
        if let Some(path) = &self.path {
            write!(f, "; Path={path}")?;
        }
        if let Some(domain) = &self.domain {
            write!(f, "; Domain={domain}")?;
        }
        if let Some(max_age) = self.max_age {
            write!(f, "; Max-Age={max_age}")?;
        }
        if self.secure {
            f.write_str("; Secure")?;
        }
        if self.http_only {
            f.write_str("; HttpOnly")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::data::CookieSetting;

    #[test]
    fn test_display() {
        assert_eq!(CookieSetting::new("sid", "42").to_string(), "sid=42");

        let mut cookie = CookieSetting::new("sid", "42").with_path("/").with_max_age(3600);
        cookie.http_only = true;
        assert_eq!(cookie.to_string(), "sid=42; Path=/; Max-Age=3600; HttpOnly");
    }
}

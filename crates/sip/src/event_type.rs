//! # Event Type
//!
//! The type of a SIP event as carried by the `Event` and `Allow-Events` headers
//! ([RFC 6665](https://datatracker.ietf.org/doc/html/rfc6665)): an event
//! package, optionally refined by templates.
//!
//! ```text
//! event-type     = event-package *( "." event-template )
//! event-package  = token-nodot
//! event-template = token-nodot
//! ```

use crate::SipError;
use crate::syntax::is_token_nodot;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Event package plus templates, e.g. `presence.winfo`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventType {
    package: Cow<'static, str>,
    templates: Vec<Cow<'static, str>>,
}

impl EventType {
    /// Presence (RFC 3856)
    pub const PRESENCE: EventType = EventType::from_static("presence");
    /// Dialog state (RFC 4235)
    pub const DIALOG: EventType = EventType::from_static("dialog");
    /// REFER progress (RFC 3515)
    pub const REFER: EventType = EventType::from_static("refer");
    /// Message waiting indication (RFC 3842)
    pub const MESSAGE_SUMMARY: EventType = EventType::from_static("message-summary");
    /// Registration state (RFC 3680)
    pub const REG: EventType = EventType::from_static("reg");
    /// Conference state (RFC 4575)
    pub const CONFERENCE: EventType = EventType::from_static("conference");

    const fn from_static(package: &'static str) -> Self {
        Self { package: Cow::Borrowed(package), templates: Vec::new() }
    }

    pub fn new(package: impl Into<String>) -> Result<Self, SipError> {
        let package = package.into();
        if !is_token_nodot(&package) {
            return Err(SipError::invalid_event_type(package));
        }
        Ok(Self { package: Cow::Owned(package), templates: Vec::new() })
    }

    /// Appends a template, `presence` + `winfo` gives `presence.winfo`
    pub fn with_template(mut self, template: impl Into<String>) -> Result<Self, SipError> {
        let template = template.into();
        if !is_token_nodot(&template) {
            return Err(SipError::invalid_event_type(template));
        }
        self.templates.push(Cow::Owned(template));
        Ok(self)
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn templates(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|template| &**template)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.package)?;
        for template in &self.templates {
            write!(f, ".{template}")?;
        }
        Ok(())
    }
}

impl FromStr for EventType {
    type Err = SipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SipError::EmptyEventType);
        }

        let mut parts = s.split('.');
        let package = parts.next().unwrap_or_default();
        parts.try_fold(EventType::new(package)?, EventType::with_template)
    }
}

#[cfg(test)]
mod tests {
    use crate::EventType;

    #[test]
    fn test_display() {
        assert_eq!(EventType::PRESENCE.to_string(), "presence");
        let winfo = EventType::new("presence").unwrap().with_template("winfo").unwrap();
        assert_eq!(winfo.to_string(), "presence.winfo");
    }

    #[test]
    fn test_parse() {
        let ty: EventType = "presence.winfo".parse().unwrap();
        assert_eq!(ty.package(), "presence");
        assert_eq!(ty.templates().collect::<Vec<_>>(), vec!["winfo"]);

        let ty: EventType = "message-summary".parse().unwrap();
        assert_eq!(ty, EventType::MESSAGE_SUMMARY);
    }

    #[test]
    fn test_parse_invalid() {
        assert!("".parse::<EventType>().is_err());
        assert!("presence.".parse::<EventType>().is_err());
        assert!(".winfo".parse::<EventType>().is_err());
        assert!("pres ence".parse::<EventType>().is_err());
        assert!(EventType::new("a.b").is_err());
    }
}

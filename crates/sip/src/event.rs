//! # Event Header
//!
//! Value of the SIP `Event` header ([RFC 6665](https://datatracker.ietf.org/doc/html/rfc6665)),
//! used by SUBSCRIBE and NOTIFY to name the subscribed event package.
//!
//! ## Format
//!
//! ```text
//! Event: presence;id=1234;expires=3600
//! o: dialog
//! ```
//!
//! The `id` parameter identifies the subscription within a dialog, it is held
//! apart from the other parameters, which keep their order.
//!
//! ## Examples
//!
//! ```
//! use micro_sip::{Event, EventType};
//!
//! let mut event = Event::with_id_and_type("1234", EventType::PRESENCE);
//! event.parameters_mut().add("expires", "3600");
//! assert_eq!(event.to_string(), "presence;id=1234;expires=3600");
//!
//! let parsed: Event = "presence;id=1234;expires=3600".parse().unwrap();
//! assert_eq!(parsed, event);
//! ```

use crate::SipError;
use crate::event_type::EventType;
use crate::syntax::{decode_value, is_token, split_params, write_value};
use http::header::{HeaderMap, HeaderName, HeaderValue};
use micro_rest::data::{Form, Parameter};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// The `Event` header name
pub const EVENT: HeaderName = HeaderName::from_static("event");

/// The compact form of the `Event` header name
pub const EVENT_COMPACT: HeaderName = HeaderName::from_static("o");

const ID_PARAM: &str = "id";

/// A SIP event: identifier, type and parameters.
///
/// Every field can be set independently, the parameter series always exists
/// and starts empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Event {
    id: Option<String>,
    event_type: Option<EventType>,
    parameters: Form,
}

impl Event {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()), ..Self::default() }
    }

    pub fn with_id_and_type(id: impl Into<String>, event_type: EventType) -> Self {
        Self { event_type: Some(event_type), ..Self::with_id(id) }
    }

    /// Reads the first `Event` header, in its long or compact form.
    pub fn from_headers(headers: &HeaderMap) -> Result<Option<Self>, SipError> {
        headers.get(EVENT).or_else(|| headers.get(EVENT_COMPACT)).map(Event::try_from).transpose()
    }

    /// Returns the event identifier.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    /// Returns the type of the event.
    pub fn event_type(&self) -> Option<&EventType> {
        self.event_type.as_ref()
    }

    pub fn set_event_type(&mut self, event_type: Option<EventType>) {
        self.event_type = event_type;
    }

    /// Returns the event parameters, `id` excluded.
    pub fn parameters(&self) -> &Form {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut Form {
        &mut self.parameters
    }

    pub fn set_parameters(&mut self, parameters: Form) {
        self.parameters = parameters;
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(event_type) = &self.event_type {
            write!(f, "{event_type}")?;
        }
        if let Some(id) = &self.id {
            write!(f, ";{ID_PARAM}=")?;
            write_value(f, id)?;
        }
        for param in &self.parameters {
            write!(f, ";{}", param.name())?;
            if let Some(value) = param.value() {
                f.write_str("=")?;
                write_value(f, value)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Event {
    type Err = SipError;

    /// Parameter values may be tokens or quoted strings, the latter are
    /// stored unquoted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments = split_params(s)?;
        let (event_type, params) = segments.split_first().ok_or(SipError::EmptyEventType)?;

        let mut event = Event { event_type: Some(event_type.parse()?), ..Event::default() };

        for segment in params {
            let segment = segment.trim();
            let (name, value) = match segment.split_once('=') {
                Some((name, value)) => (name.trim(), Some(decode_value(value.trim())?)),
                None => (segment, None),
            };

            if !is_token(name) {
                return Err(SipError::invalid_parameter(format!("bad parameter name in '{segment}'")));
            }

            if name.eq_ignore_ascii_case(ID_PARAM) {
                match value {
                    Some(_) if event.id.is_some() => return Err(SipError::invalid_parameter("duplicate id parameter")),
                    Some(id) => event.id = Some(id),
                    None => return Err(SipError::invalid_parameter(format!("bad id parameter '{segment}'"))),
                }
                continue;
            }

            event.parameters.push(Parameter::new(name, value));
        }

        trace!(event = %event, "parsed event header");
        Ok(event)
    }
}

impl TryFrom<&HeaderValue> for Event {
    type Error = SipError;

    fn try_from(value: &HeaderValue) -> Result<Self, Self::Error> {
        value.to_str().map_err(SipError::invalid_header_value)?.parse()
    }
}

impl TryFrom<&Event> for HeaderValue {
    type Error = SipError;

    fn try_from(event: &Event) -> Result<Self, Self::Error> {
        if event.event_type.is_none() {
            return Err(SipError::EmptyEventType);
        }
        HeaderValue::try_from(event.to_string()).map_err(SipError::invalid_header_value)
    }
}

#[cfg(test)]
mod tests {
    use crate::event::{EVENT, EVENT_COMPACT};
    use crate::{Event, EventType, SipError};
    use http::{HeaderMap, HeaderValue};
    use micro_rest::data::Form;

    #[test]
    fn test_parameters_are_never_absent() {
        let event = Event::new();
        assert!(event.parameters().is_empty());
        assert_eq!(event.parameters(), event.parameters());
        assert_eq!(event.id(), None);
        assert_eq!(event.event_type(), None);
    }

    #[test]
    fn test_kind_is_independent_of_id() {
        let mut event = Event::with_id("presence");
        assert_eq!(event.id(), Some("presence"));
        assert_eq!(event.event_type(), None);

        event.set_event_type(Some(EventType::PRESENCE));
        assert_eq!(event.event_type(), Some(&EventType::PRESENCE));
    }

    #[test]
    fn test_parameters_mutation_persists() {
        let mut event = Event::new();
        event.parameters_mut().add("expires", "3600");
        assert_eq!(event.parameters().first_value("expires"), Some("3600"));
    }

    #[test]
    fn test_accessor_round_trip() {
        let mut event = Event::with_id_and_type("1", EventType::DIALOG);
        assert_eq!(event.id(), Some("1"));
        assert_eq!(event.event_type(), Some(&EventType::DIALOG));

        event.set_id(Some("2".into()));
        event.set_event_type(None);
        let mut params = Form::new();
        params.add_flag("include-session-description");
        event.set_parameters(params.clone());

        assert_eq!(event.id(), Some("2"));
        assert_eq!(event.event_type(), None);
        assert_eq!(event.parameters(), &params);

        event.set_id(None);
        assert_eq!(event.id(), None);
    }

    #[test]
    fn test_parse() {
        let event: Event = "presence.winfo ; id=abc ;expires=600;lr".parse().unwrap();
        assert_eq!(event.event_type().unwrap().to_string(), "presence.winfo");
        assert_eq!(event.id(), Some("abc"));
        assert_eq!(event.parameters().len(), 2);
        assert_eq!(event.parameters().first_value("expires"), Some("600"));
        assert!(event.parameters().contains("lr"));
        assert_eq!(event.to_string(), "presence.winfo;id=abc;expires=600;lr");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!("".parse::<Event>(), Err(SipError::EmptyEventType)));
        assert!(matches!(";id=1".parse::<Event>(), Err(SipError::EmptyEventType)));
        assert!("dialog;id".parse::<Event>().is_err());
        assert!("dialog;id=1;id=2".parse::<Event>().is_err());
        assert!("dialog;=1".parse::<Event>().is_err());
        assert!("dialog;expires=".parse::<Event>().is_err());
        assert!("dialog;".parse::<Event>().is_err());
    }

    #[test]
    fn test_parse_quoted_value() {
        let event: Event = r#"presence;reason="a;b";note="say \"hi\"";id="x y""#.parse().unwrap();
        assert_eq!(event.id(), Some("x y"));
        assert_eq!(event.parameters().len(), 2);
        assert_eq!(event.parameters().first_value("reason"), Some("a;b"));
        assert_eq!(event.parameters().first_value("note"), Some(r#"say "hi""#));

        assert!(r#"presence;reason="a;b"#.parse::<Event>().is_err());
        assert!(r#"presence;reason=a"b"#.parse::<Event>().is_err());
    }

    #[test]
    fn test_format_then_parse() {
        let mut event = Event::with_id_and_type("1", EventType::PRESENCE);
        event.parameters_mut().add("note", "x;y=z");
        event.parameters_mut().add("path", r#"C:\dir "q""#);
        event.parameters_mut().add("expires", "600");
        event.parameters_mut().add_flag("lr");

        let text = event.to_string();
        assert_eq!(text, r#"presence;id=1;note="x;y=z";path="C:\\dir \"q\"";expires=600;lr"#);
        assert_eq!(text.parse::<Event>().unwrap(), event);
    }

    #[test]
    fn test_header_value_conversion() {
        let event = Event::with_id_and_type("7", EventType::REFER);
        let value = HeaderValue::try_from(&event).unwrap();
        assert_eq!(value, "refer;id=7");
        assert_eq!(Event::try_from(&value).unwrap(), event);

        assert!(matches!(HeaderValue::try_from(&Event::with_id("7")), Err(SipError::EmptyEventType)));
    }

    #[test]
    fn test_from_headers() {
        let mut headers = HeaderMap::new();
        assert!(Event::from_headers(&headers).unwrap().is_none());

        headers.insert(EVENT_COMPACT, HeaderValue::from_static("reg"));
        assert_eq!(Event::from_headers(&headers).unwrap().unwrap().event_type(), Some(&EventType::REG));

        headers.insert(EVENT, HeaderValue::from_static("conference;id=9"));
        let event = Event::from_headers(&headers).unwrap().unwrap();
        assert_eq!(event.event_type(), Some(&EventType::CONFERENCE));
        assert_eq!(event.id(), Some("9"));

        headers.insert(EVENT, HeaderValue::from_static("bad type"));
        assert!(Event::from_headers(&headers).is_err());
    }
}

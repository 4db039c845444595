//! SIP extension of `micro-rest`.
//!
//! Provides the value carried by the SIP `Event` header: an [`Event`] names an
//! [`EventType`], an optional subscription identifier and an ordered series of
//! parameters, and converts to and from [`http::HeaderValue`].

mod error;
mod event;
mod event_type;
mod syntax;

pub use error::SipError;
pub use event::{EVENT, EVENT_COMPACT, Event};
pub use event_type::EventType;

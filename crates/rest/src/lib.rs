//! A uniform REST message model on top of the [`http`] crate types.
//!
//! Requests and responses are plain values exposing the same [`Message`]
//! operations, and [`ResponseMessage`] gathers everything a resource can do to
//! its answer. Decorators in [`wrapper`] implement the same interface on top of
//! another response, forwarding what they do not intercept.
//!
//! # Example
//!
//! ```
//! use http::{Method, StatusCode};
//! use micro_rest::wrapper::WrapperResponse;
//! use micro_rest::{Message, Request, Response, ResponseMessage};
//!
//! let mut response = Response::new(Request::new(Method::GET, "/users/1"));
//! let mut wrapper = WrapperResponse::new(&mut response);
//!
//! wrapper.set_status(StatusCode::NOT_FOUND);
//! wrapper.set_entity_text("no such user".into(), mime::TEXT_PLAIN);
//!
//! assert_eq!(response.status(), StatusCode::NOT_FOUND);
//! assert!(response.is_entity_available());
//! ```

mod error;
mod message;
mod representation;
mod request;
mod resource;
mod response;

pub mod data;
pub mod negotiation;
pub mod wrapper;

pub use error::RestError;
pub use message::Message;
pub use representation::Representation;
pub use request::Request;
pub use resource::Resource;
pub use response::Response;
pub use response::ResponseMessage;

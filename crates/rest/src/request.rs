//! Request side of the uniform message model.
//!
//! A [`Request`] carries the method, the target reference, the raw headers
//! (from which client preferences are read) and an optional entity.

use crate::RestError;
use crate::data::{Attributes, Form, Language, Preference, Reference, accepted_languages, accepted_media_types};
use crate::message::{EntitySlot, Message};
use crate::representation::Representation;
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderMap, Method};
use mime::Mime;
use tracing::debug;

/// A request sent by a client to a resource.
#[derive(Debug, Clone, Default)]
pub struct Request {
    method: Method,
    resource_ref: Option<Reference>,
    headers: HeaderMap,
    entity: EntitySlot,
    attributes: Attributes,
}

impl Request {
    /// Creates a new Request with the given method and target reference
    pub fn new(method: Method, resource_ref: impl Into<Reference>) -> Self {
        Self { method, resource_ref: Some(resource_ref.into()), ..Default::default() }
    }

    /// Builds a request from an `http` request, a non empty body becomes the
    /// entity typed by its `Content-Type`.
    pub fn from_http(request: http::Request<Bytes>) -> Self {
        let (parts, body) = request.into_parts();

        let mut entity = EntitySlot::default();
        if !body.is_empty() {
            let media_type = parts.headers.get(CONTENT_TYPE).and_then(|value| value.to_str().ok()).and_then(|value| {
                value.parse::<Mime>().inspect_err(|e| debug!(content_type = value, "skip invalid content type: {e}")).ok()
            });
            entity.set(Some(Representation::new(body, media_type)));
        }

        Self {
            method: parts.method,
            resource_ref: Some(Reference::from(&parts.uri)),
            headers: parts.headers,
            entity,
            attributes: Attributes::new(),
        }
    }

    /// Returns the method of the request
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn set_method(&mut self, method: Method) {
        self.method = method;
    }

    /// Returns the reference of the target resource
    pub fn resource_ref(&self) -> Option<&Reference> {
        self.resource_ref.as_ref()
    }

    pub fn set_resource_ref(&mut self, resource_ref: Option<Reference>) {
        self.resource_ref = resource_ref;
    }

    /// Returns the raw headers of the request
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Media ranges the client accepts, in header order
    pub fn accepted_media_types(&self) -> Vec<Preference<Mime>> {
        accepted_media_types(&self.headers)
    }

    /// Language ranges the client accepts, in header order
    pub fn accepted_languages(&self) -> Vec<Preference<Language>> {
        accepted_languages(&self.headers)
    }
}

impl Message for Request {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn entity(&self) -> Option<&Representation> {
        self.entity.get()
    }

    fn set_entity(&mut self, entity: Option<Representation>) {
        self.entity.set(entity);
    }

    fn set_entity_text(&mut self, value: String, media_type: Mime) {
        self.entity.set(Some(Representation::text(value, media_type)));
    }

    fn entity_as_form(&mut self) -> Result<&Form, RestError> {
        self.entity.as_form()
    }

    fn is_entity_available(&self) -> bool {
        self.entity.is_available()
    }
}

#[cfg(test)]
mod tests {
    use crate::message::Message;
    use crate::request::Request;
    use bytes::Bytes;
    use http::header::{ACCEPT, CONTENT_TYPE};
    use http::Method;

    #[test]
    fn test_from_http() {
        let http_request = http::Request::builder()
            .method(Method::POST)
            .uri("http://example.com/users?active=true")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(ACCEPT, "application/json")
            .body(Bytes::from_static(b"name=zava&zip=10001"))
            .unwrap();

        let mut request = Request::from_http(http_request);
        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.resource_ref().unwrap().as_str(), "http://example.com/users?active=true");
        assert_eq!(request.accepted_media_types()[0].value, mime::APPLICATION_JSON);
        assert!(request.is_entity_available());

        let form = request.entity_as_form().unwrap();
        assert_eq!(form.first_value("zip"), Some("10001"));
    }

    #[test]
    fn test_from_http_without_body() {
        let http_request = http::Request::builder().uri("/").body(Bytes::new()).unwrap();

        let request = Request::from_http(http_request);
        assert_eq!(request.method(), &Method::GET);
        assert!(request.entity().is_none());
        assert!(!request.is_entity_available());
    }

    #[test]
    fn test_attributes() {
        let mut request = Request::new(Method::GET, "/users/1");
        request.attributes_mut().insert("user_id".into(), 1.into());
        assert_eq!(request.attributes().get("user_id"), Some(&serde_json::Value::from(1)));
    }
}

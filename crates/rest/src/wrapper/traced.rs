//! Response decorator that logs mutations.
//!
//! `TracingWrapper` wraps a response into a `TracedResponse`, which emits a
//! `tracing` event each time the status, the entity or the redirection target
//! is changed, then lets the change through. Every other operation is inherited
//! from an inner [`WrapperResponse`].

use crate::RestError;
use crate::data::{Attributes, ChallengeRequest, CookieSetting, Form, Language, Reference, ServerInfo};
use crate::message::Message;
use crate::representation::Representation;
use crate::request::Request;
use crate::resource::Resource;
use crate::response::ResponseMessage;
use crate::wrapper::{WrapperResponse, Wrapper};
use http::{Method, StatusCode};
use mime::Mime;
use tracing::{debug, trace};

/// A wrapper that adds mutation logging to responses.
#[derive(Debug, Clone, Copy)]
pub struct TracingWrapper;

/// A response that logs status, entity and redirection changes before
/// forwarding them to the wrapped response.
#[derive(Debug, Clone)]
pub struct TracedResponse<R> {
    inner: WrapperResponse<R>,
}

impl<R: ResponseMessage> Wrapper<R> for TracingWrapper {
    type Out = TracedResponse<R>;

    fn wrap(&self, response: R) -> Self::Out {
        TracedResponse { inner: WrapperResponse::new(response) }
    }
}

impl<R: ResponseMessage> TracedResponse<R> {
    pub fn wrapped(&self) -> &R {
        self.inner.wrapped()
    }

    pub fn into_inner(self) -> R {
        self.inner.into_inner()
    }
}

impl<R: ResponseMessage> Message for TracedResponse<R> {
    fn attributes(&self) -> &Attributes {
        self.inner.attributes()
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        self.inner.attributes_mut()
    }

    fn entity(&self) -> Option<&Representation> {
        self.inner.entity()
    }

    fn set_entity(&mut self, entity: Option<Representation>) {
        match &entity {
            Some(entity) => debug!(size = entity.size(), media_type = ?entity.media_type(), "set entity"),
            None => debug!("clear entity"),
        }
        self.inner.set_entity(entity);
    }

    fn set_entity_text(&mut self, value: String, media_type: Mime) {
        debug!(size = value.len(), %media_type, "set text entity");
        self.inner.set_entity_text(value, media_type);
    }

    fn entity_as_form(&mut self) -> Result<&Form, RestError> {
        self.inner.entity_as_form()
    }

    fn is_entity_available(&self) -> bool {
        self.inner.is_entity_available()
    }
}

impl<R: ResponseMessage> ResponseMessage for TracedResponse<R> {
    fn allowed_methods(&self) -> &[Method] {
        self.inner.allowed_methods()
    }

    fn allowed_methods_mut(&mut self) -> &mut Vec<Method> {
        self.inner.allowed_methods_mut()
    }

    fn challenge_request(&self) -> Option<&ChallengeRequest> {
        self.inner.challenge_request()
    }

    fn set_challenge_request(&mut self, request: Option<ChallengeRequest>) {
        self.inner.set_challenge_request(request);
    }

    fn cookie_settings(&self) -> &[CookieSetting] {
        self.inner.cookie_settings()
    }

    fn cookie_settings_mut(&mut self) -> &mut Vec<CookieSetting> {
        self.inner.cookie_settings_mut()
    }

    fn redirect_ref(&self) -> Option<&Reference> {
        self.inner.redirect_ref()
    }

    fn set_redirect_ref(&mut self, redirect_ref: Option<Reference>) {
        debug!(redirect_ref = ?redirect_ref.as_ref().map(Reference::as_str), "set redirect reference");
        self.inner.set_redirect_ref(redirect_ref);
    }

    fn set_redirect_uri(&mut self, redirect_uri: &str) {
        debug!(redirect_uri, "set redirect uri");
        self.inner.set_redirect_uri(redirect_uri);
    }

    fn request(&self) -> &Request {
        self.inner.request()
    }

    fn request_mut(&mut self) -> &mut Request {
        self.inner.request_mut()
    }

    fn set_request(&mut self, request: Request) {
        self.inner.set_request(request);
    }

    fn server_info(&self) -> &ServerInfo {
        self.inner.server_info()
    }

    fn server_info_mut(&mut self) -> &mut ServerInfo {
        self.inner.server_info_mut()
    }

    fn status(&self) -> StatusCode {
        self.inner.status()
    }

    fn set_status(&mut self, status: StatusCode) {
        let previous = self.inner.status();
        if previous == status {
            trace!(%status, "status unchanged");
        } else {
            debug!(%previous, %status, "set status");
        }
        self.inner.set_status(status);
    }

    fn set_negotiated_entity(&mut self, resource: &dyn Resource, fallback_language: Option<&Language>) {
        self.inner.set_negotiated_entity(resource, fallback_language);
        debug!(status = %self.inner.status(), available = self.inner.is_entity_available(), "negotiated entity");
    }
}

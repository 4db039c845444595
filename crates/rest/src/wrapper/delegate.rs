use crate::RestError;
use crate::data::{Attributes, ChallengeRequest, CookieSetting, Form, Language, Reference, ServerInfo};
use crate::message::Message;
use crate::representation::Representation;
use crate::request::Request;
use crate::resource::Resource;
use crate::response::ResponseMessage;
use http::{Method, StatusCode};
use mime::Mime;

/// A response that forwards every operation to a wrapped response.
///
/// The wrapper holds no state of its own, the wrapped response stays the single
/// source of truth. Decorators embed a `WrapperResponse` and implement the
/// operations they want to intercept, forwarding the rest to it (see
/// [`super::TracedResponse`]).
#[derive(Debug, Clone)]
pub struct WrapperResponse<R> {
    wrapped: R,
}

impl<R: ResponseMessage> WrapperResponse<R> {
    pub fn new(wrapped: R) -> Self {
        Self { wrapped }
    }

    /// Returns the wrapped response.
    pub fn wrapped(&self) -> &R {
        &self.wrapped
    }

    pub fn wrapped_mut(&mut self) -> &mut R {
        &mut self.wrapped
    }

    pub fn into_inner(self) -> R {
        self.wrapped
    }
}

impl<R: ResponseMessage> Message for WrapperResponse<R> {
    fn attributes(&self) -> &Attributes {
        self.wrapped.attributes()
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        self.wrapped.attributes_mut()
    }

    fn entity(&self) -> Option<&Representation> {
        self.wrapped.entity()
    }

    fn set_entity(&mut self, entity: Option<Representation>) {
        self.wrapped.set_entity(entity);
    }

    fn set_entity_text(&mut self, value: String, media_type: Mime) {
        self.wrapped.set_entity_text(value, media_type);
    }

    fn entity_as_form(&mut self) -> Result<&Form, RestError> {
        self.wrapped.entity_as_form()
    }

    fn is_entity_available(&self) -> bool {
        self.wrapped.is_entity_available()
    }
}

impl<R: ResponseMessage> ResponseMessage for WrapperResponse<R> {
    fn allowed_methods(&self) -> &[Method] {
        self.wrapped.allowed_methods()
    }

    fn allowed_methods_mut(&mut self) -> &mut Vec<Method> {
        self.wrapped.allowed_methods_mut()
    }

    fn challenge_request(&self) -> Option<&ChallengeRequest> {
        self.wrapped.challenge_request()
    }

    fn set_challenge_request(&mut self, request: Option<ChallengeRequest>) {
        self.wrapped.set_challenge_request(request);
    }

    fn cookie_settings(&self) -> &[CookieSetting] {
        self.wrapped.cookie_settings()
    }

    fn cookie_settings_mut(&mut self) -> &mut Vec<CookieSetting> {
        self.wrapped.cookie_settings_mut()
    }

    fn redirect_ref(&self) -> Option<&Reference> {
        self.wrapped.redirect_ref()
    }

    fn set_redirect_ref(&mut self, redirect_ref: Option<Reference>) {
        self.wrapped.set_redirect_ref(redirect_ref);
    }

    fn set_redirect_uri(&mut self, redirect_uri: &str) {
        self.wrapped.set_redirect_uri(redirect_uri);
    }

    fn request(&self) -> &Request {
        self.wrapped.request()
    }

    fn request_mut(&mut self) -> &mut Request {
        self.wrapped.request_mut()
    }

    fn set_request(&mut self, request: Request) {
        self.wrapped.set_request(request);
    }

    fn server_info(&self) -> &ServerInfo {
        self.wrapped.server_info()
    }

    fn server_info_mut(&mut self) -> &mut ServerInfo {
        self.wrapped.server_info_mut()
    }

    fn status(&self) -> StatusCode {
        self.wrapped.status()
    }

    fn set_status(&mut self, status: StatusCode) {
        self.wrapped.set_status(status);
    }

    fn set_negotiated_entity(&mut self, resource: &dyn Resource, fallback_language: Option<&Language>) {
        self.wrapped.set_negotiated_entity(resource, fallback_language);
    }
}

//! Response side of the uniform message model.
//!
//! [`ResponseMessage`] is the full response interface: every operation a
//! handler can perform on a response. [`Response`] is the concrete message
//! holding the state, decorators such as [`crate::wrapper::WrapperResponse`]
//! implement the same interface on top of another response.

use crate::RestError;
use crate::data::{Attributes, ChallengeRequest, CookieSetting, Form, Language, Reference, ServerInfo};
use crate::message::{EntitySlot, Message};
use crate::negotiation::{Negotiation, select_variant};
use crate::representation::Representation;
use crate::request::Request;
use crate::resource::Resource;
use bytes::Bytes;
use http::header::{ALLOW, CONTENT_LANGUAGE, CONTENT_TYPE, LOCATION, SERVER, SET_COOKIE, WWW_AUTHENTICATE};
use http::{HeaderMap, HeaderValue, Method, StatusCode};
use mime::Mime;
use tracing::debug;

/// Operations available on a response.
pub trait ResponseMessage: Message {
    /// Returns the list of methods allowed on the requested resource.
    fn allowed_methods(&self) -> &[Method];

    fn allowed_methods_mut(&mut self) -> &mut Vec<Method>;

    /// Returns the authentication request sent by an origin server to a client.
    fn challenge_request(&self) -> Option<&ChallengeRequest>;

    fn set_challenge_request(&mut self, request: Option<ChallengeRequest>);

    /// Returns the cookie settings provided by the server.
    fn cookie_settings(&self) -> &[CookieSetting];

    fn cookie_settings_mut(&mut self) -> &mut Vec<CookieSetting>;

    /// Returns the reference that the client should follow for redirections
    /// or resource creations.
    fn redirect_ref(&self) -> Option<&Reference>;

    fn set_redirect_ref(&mut self, redirect_ref: Option<Reference>);

    /// Sets the redirection reference from a raw URI.
    fn set_redirect_uri(&mut self, redirect_uri: &str);

    /// Returns the associated request
    fn request(&self) -> &Request;

    fn request_mut(&mut self) -> &mut Request;

    fn set_request(&mut self, request: Request);

    fn server_info(&self) -> &ServerInfo;

    fn server_info_mut(&mut self) -> &mut ServerInfo;

    fn status(&self) -> StatusCode;

    fn set_status(&mut self, status: StatusCode);

    /// Sets the entity with the best variant of a resource, according to the
    /// preferences of the associated request.
    ///
    /// If the resource has no variant, the status becomes `404 Not Found`. If
    /// no variant is acceptable, the status becomes `406 Not Acceptable`. In
    /// both cases the entity is cleared. `fallback_language` is used when no
    /// language preference matches.
    fn set_negotiated_entity(&mut self, resource: &dyn Resource, fallback_language: Option<&Language>);
}

/// A response returned by a resource to the client.
#[derive(Debug, Clone, Default)]
pub struct Response {
    status: StatusCode,
    request: Request,
    entity: EntitySlot,
    attributes: Attributes,
    allowed_methods: Vec<Method>,
    challenge_request: Option<ChallengeRequest>,
    cookie_settings: Vec<CookieSetting>,
    redirect_ref: Option<Reference>,
    server_info: ServerInfo,
}

impl Response {
    /// Creates a `200 OK` response to the given request
    pub fn new(request: Request) -> Self {
        Self { request, ..Default::default() }
    }

    /// Converts the response into an `http` response, every piece of metadata
    /// is written to its header.
    pub fn into_http(self) -> Result<http::Response<Bytes>, RestError> {
        let mut headers = HeaderMap::with_capacity(8);

        if !self.allowed_methods.is_empty() {
            let allow = self.allowed_methods.iter().map(Method::as_str).collect::<Vec<_>>().join(", ");
            headers.insert(ALLOW, HeaderValue::try_from(allow)?);
        }

        if let Some(challenge) = &self.challenge_request {
            headers.insert(WWW_AUTHENTICATE, HeaderValue::try_from(challenge.to_string())?);
        }

        for cookie in &self.cookie_settings {
            headers.append(SET_COOKIE, HeaderValue::try_from(cookie.to_string())?);
        }

        if let Some(redirect_ref) = &self.redirect_ref {
            headers.insert(LOCATION, HeaderValue::try_from(redirect_ref.as_str())?);
        }

        if let Some(agent) = &self.server_info.agent {
            headers.insert(SERVER, HeaderValue::try_from(agent.as_str())?);
        }

        let body = match self.entity.get() {
            Some(entity) => {
                if let Some(media_type) = entity.media_type() {
                    headers.insert(CONTENT_TYPE, HeaderValue::try_from(media_type.as_ref())?);
                }
                if !entity.languages().is_empty() {
                    let languages = entity.languages().iter().map(Language::tag).collect::<Vec<_>>().join(", ");
                    headers.insert(CONTENT_LANGUAGE, HeaderValue::try_from(languages)?);
                }
                entity.content().clone()
            }
            None => Bytes::new(),
        };

        let mut response = http::Response::new(body);
        *response.status_mut() = self.status;
        *response.headers_mut() = headers;
        Ok(response)
    }
}

impl Message for Response {
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

impl ResponseMessage for Response {
    fn allowed_methods(&self) -> &[Method] {
        &self.allowed_methods
    }

    fn allowed_methods_mut(&mut self) -> &mut Vec<Method> {
        &mut self.allowed_methods
    }

    fn challenge_request(&self) -> Option<&ChallengeRequest> {
        self.challenge_request.as_ref()
    }

    fn set_challenge_request(&mut self, request: Option<ChallengeRequest>) {
        self.challenge_request = request;
    }

    fn cookie_settings(&self) -> &[CookieSetting] {
        &self.cookie_settings
    }

    fn cookie_settings_mut(&mut self) -> &mut Vec<CookieSetting> {
        &mut self.cookie_settings
    }

    fn redirect_ref(&self) -> Option<&Reference> {
        self.redirect_ref.as_ref()
    }

    fn set_redirect_ref(&mut self, redirect_ref: Option<Reference>) {
        self.redirect_ref = redirect_ref;
    }

    fn set_redirect_uri(&mut self, redirect_uri: &str) {
        self.redirect_ref = Some(Reference::from(redirect_uri));
    }

    fn request(&self) -> &Request {
        &self.request
    }

    fn request_mut(&mut self) -> &mut Request {
        &mut self.request
    }

    fn set_request(&mut self, request: Request) {
        self.request = request;
    }

    fn server_info(&self) -> &ServerInfo {
        &self.server_info
    }

    fn server_info_mut(&mut self) -> &mut ServerInfo {
        &mut self.server_info
    }

    fn status(&self) -> StatusCode {
        self.status
    }

    fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    fn set_negotiated_entity(&mut self, resource: &dyn Resource, fallback_language: Option<&Language>) {
        let mut variants = resource.variants();
        let accept = self.request.accepted_media_types();
        let accept_language = self.request.accepted_languages();

        match select_variant(&variants, &accept, &accept_language, fallback_language) {
            Negotiation::Selected(index) => {
                self.entity.set(Some(variants.swap_remove(index)));
            }
            Negotiation::NotFound => {
                debug!("resource has no variant");
                self.entity.set(None);
                self.status = StatusCode::NOT_FOUND;
            }
            Negotiation::NotAcceptable => {
                debug!(variants = variants.len(), "no acceptable variant");
                self.entity.set(None);
                self.status = StatusCode::NOT_ACCEPTABLE;
            }
        }
    }
}

macro_rules! impl_deref_message {
    ($($ty:ty),*) => {
        $(
        impl<R: Message + ?Sized> Message for $ty {
            fn attributes(&self) -> &Attributes {
                (**self).attributes()
            }

            fn attributes_mut(&mut self) -> &mut Attributes {
                (**self).attributes_mut()
            }

            fn entity(&self) -> Option<&Representation> {
                (**self).entity()
            }

            fn set_entity(&mut self, entity: Option<Representation>) {
                (**self).set_entity(entity);
            }

            fn set_entity_text(&mut self, value: String, media_type: Mime) {
                (**self).set_entity_text(value, media_type);
            }

            fn entity_as_form(&mut self) -> Result<&Form, RestError> {
                (**self).entity_as_form()
            }

            fn is_entity_available(&self) -> bool {
                (**self).is_entity_available()
            }
        }
        )*
    };
}

macro_rules! impl_deref_response {
    ($($ty:ty),*) => {
        $(
        impl<R: ResponseMessage + ?Sized> ResponseMessage for $ty {
            fn allowed_methods(&self) -> &[Method] {
                (**self).allowed_methods()
            }

            fn allowed_methods_mut(&mut self) -> &mut Vec<Method> {
                (**self).allowed_methods_mut()
            }

            fn challenge_request(&self) -> Option<&ChallengeRequest> {
                (**self).challenge_request()
            }

            fn set_challenge_request(&mut self, request: Option<ChallengeRequest>) {
                (**self).set_challenge_request(request);
            }

            fn cookie_settings(&self) -> &[CookieSetting] {
                (**self).cookie_settings()
            }

            fn cookie_settings_mut(&mut self) -> &mut Vec<CookieSetting> {
                (**self).cookie_settings_mut()
            }

            fn redirect_ref(&self) -> Option<&Reference> {
                (**self).redirect_ref()
            }

            fn set_redirect_ref(&mut self, redirect_ref: Option<Reference>) {
                (**self).set_redirect_ref(redirect_ref);
            }

            fn set_redirect_uri(&mut self, redirect_uri: &str) {
                (**self).set_redirect_uri(redirect_uri);
            }

            fn request(&self) -> &Request {
                (**self).request()
            }

            fn request_mut(&mut self) -> &mut Request {
                (**self).request_mut()
            }

            fn set_request(&mut self, request: Request) {
                (**self).set_request(request);
            }

            fn server_info(&self) -> &ServerInfo {
                (**self).server_info()
            }

            fn server_info_mut(&mut self) -> &mut ServerInfo {
                (**self).server_info_mut()
            }

            fn status(&self) -> StatusCode {
                (**self).status()
            }

            fn set_status(&mut self, status: StatusCode) {
                (**self).set_status(status);
            }

            fn set_negotiated_entity(&mut self, resource: &dyn Resource, fallback_language: Option<&Language>) {
                (**self).set_negotiated_entity(resource, fallback_language);
            }
        }
        )*
    };
}

impl_deref_message!(Box<R>, &mut R);
impl_deref_response!(Box<R>, &mut R);

//! Response decorators.
//!
//! [`WrapperResponse`] forwards every operation to the response it wraps, it is
//! the base decorators build upon. A [`Wrapper`] turns a response into a
//! decorated one, and [`Wrappers`] chains several of them.

mod delegate;
mod traced;

use std::marker::PhantomData;

pub use delegate::WrapperResponse;
pub use traced::{TracedResponse, TracingWrapper};

use crate::response::ResponseMessage;

/// Turns a response into a decorated one.
///
/// Implementors usually produce a type that is itself a [`ResponseMessage`],
/// so decorations can be stacked.
pub trait Wrapper<R> {
    /// Response type handed back by [`Wrapper::wrap`]
    type Out;

    fn wrap(&self, response: R) -> Self::Out;
}

/// Two wrappers applied in sequence: `first` decorates the response, then
/// `then` decorates the result.
///
/// Chains are built from [`IdentityWrappers`] with [`Wrappers::and_then`],
/// the last wrapper added ends up outermost.
#[derive(Debug)]
pub struct Wrappers<First, Then, R> {
    first: First,
    then: Then,
    _response: PhantomData<R>,
}

/// Starting point of a chain, hands the response back untouched
pub type IdentityWrappers<R> = Wrappers<IdentityWrapper, IdentityWrapper, R>;

impl<R> Default for IdentityWrappers<R> {
    fn default() -> Self {
        Wrappers { first: IdentityWrapper, then: IdentityWrapper, _response: PhantomData }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct IdentityWrapper;

impl<R> Wrapper<R> for IdentityWrapper {
    type Out = R;

    #[inline]
    fn wrap(&self, response: R) -> R {
        response
    }
}

/// Wraps a response in a plain [`WrapperResponse`]
#[derive(Debug, Clone, Copy)]
pub struct DelegateWrapper;

impl<R: ResponseMessage> Wrapper<R> for DelegateWrapper {
    type Out = WrapperResponse<R>;

    fn wrap(&self, response: R) -> Self::Out {
        WrapperResponse::new(response)
    }
}

impl<First, Then, R> Wrappers<First, Then, R>
where
    First: Wrapper<R>,
    Then: Wrapper<First::Out>,
{
    /// Extends the chain, `next` receives what this chain produces.
    pub fn and_then<Next>(self, next: Next) -> Wrappers<Self, Next, R>
    where
        Next: Wrapper<Then::Out>,
    {
        Wrappers { first: self, then: next, _response: PhantomData }
    }
}

impl<First, Then, R> Wrapper<R> for Wrappers<First, Then, R>
where
    First: Wrapper<R>,
    Then: Wrapper<First::Out>,
{
    type Out = Then::Out;

    fn wrap(&self, response: R) -> Self::Out {
        self.then.wrap(self.first.wrap(response))
    }
}

#[cfg(test)]
mod tests {
    use crate::message::Message;
    use crate::response::{Response, ResponseMessage};
    use crate::wrapper::{DelegateWrapper, IdentityWrapper, TracingWrapper, Wrapper, Wrappers};
    use http::StatusCode;

    #[test]
    fn test_identity() {
        let wrappers: Wrappers<IdentityWrapper, IdentityWrapper, Response> = Wrappers::default();
        let mut response = wrappers.wrap(Response::default());
        response.set_status(StatusCode::NO_CONTENT);
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[test]
    fn test_and_then() {
        let wrappers: Wrappers<IdentityWrapper, IdentityWrapper, Response> = Wrappers::default();
        let wrappers = wrappers.and_then(DelegateWrapper).and_then(TracingWrapper);

        let mut response = wrappers.wrap(Response::default());
        response.set_status(StatusCode::CONFLICT);
        response.set_entity_text("conflict".into(), mime::TEXT_PLAIN);

        // TracedResponse<WrapperResponse<Response>>
        let inner = response.into_inner().into_inner();
        assert_eq!(inner.status(), StatusCode::CONFLICT);
        assert_eq!(inner.entity().unwrap().to_text(), "conflict");
    }
}

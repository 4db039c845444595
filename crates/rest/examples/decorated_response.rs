use http::header::ACCEPT_LANGUAGE;
use http::{Method, StatusCode};
use micro_rest::data::{CookieSetting, Language};
use micro_rest::wrapper::{DelegateWrapper, IdentityWrappers, TracingWrapper, Wrapper};
use micro_rest::{Message, Representation, Request, Response, ResponseMessage};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::DEBUG).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let mut request = Request::new(Method::GET, "/greeting");
    request.headers_mut().insert(ACCEPT_LANGUAGE, "fr-CH, fr;q=0.9".parse().expect("valid header"));

    let wrappers: IdentityWrappers<Response> = IdentityWrappers::default();
    let wrappers = wrappers.and_then(DelegateWrapper).and_then(TracingWrapper);
    let mut response = wrappers.wrap(Response::new(request));

    let variants = vec![
        Representation::text("hello", mime::TEXT_PLAIN_UTF_8).with_language("en"),
        Representation::text("bonjour", mime::TEXT_PLAIN_UTF_8).with_language("fr"),
    ];
    response.set_negotiated_entity(&variants, Some(&Language::from("en")));
    response.cookie_settings_mut().push(CookieSetting::new("visited", "1").with_path("/"));

    if !response.is_entity_available() {
        response.set_status(StatusCode::NO_CONTENT);
    }

    let http_response = response.into_inner().into_inner().into_http().expect("valid response headers");
    info!(status = %http_response.status(), headers = ?http_response.headers(), "response ready");
}

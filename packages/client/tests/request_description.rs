//! Request description tests
//!
//! Covers accumulation, path expansion and the hand-off conversions.

use std::io::Read;

use http::{HeaderName, HeaderValue, Method};
use rat_client::{Kind, PathError, RequestDescription, Url};

fn base() -> Url {
    Url::parse("https://api.example.com").expect("static base url")
}

#[test]
fn headers_accumulate_in_order() {
    let mut request = RequestDescription::new("/");
    let name = HeaderName::from_static("x-trace");
    request.append_header(name.clone(), HeaderValue::from_static("v1"));
    request.append_header(name, HeaderValue::from_static("v2"));

    assert_eq!(request.header_values("X-Trace"), ["v1", "v2"]);
}

#[test]
fn query_values_accumulate_and_encode() {
    let mut request = RequestDescription::new("/search");
    request.query_mut().add("b", "x y");
    request.query_mut().add("a", "1");
    request.query_mut().add("a", "2");

    assert_eq!(request.query().get("a"), Some("1"));
    assert_eq!(request.query().get_all("a"), ["1", "2"]);
    assert!(request.query().get_all("missing").is_empty());
    assert_eq!(request.query().len(), 2);
    assert_eq!(request.query().encode(), "a=1&a=2&b=x+y");
}

#[test]
fn body_is_replaced_wholesale() {
    let mut request = RequestDescription::new("/");
    assert!(request.body().is_none());

    request.set_body("first payload");
    request.set_body("second");

    let mut read = String::new();
    request
        .body_reader()
        .read_to_string(&mut read)
        .expect("in-memory read");
    assert_eq!(read, "second");
}

#[test]
fn body_reader_is_empty_without_body() {
    let request = RequestDescription::new("/");
    let mut read = Vec::new();
    request
        .body_reader()
        .read_to_end(&mut read)
        .expect("in-memory read");
    assert!(read.is_empty());
}

#[test]
fn uri_keeps_template_verbatim() {
    let mut request = RequestDescription::new("/static");
    request.set_path("/v1/{user}/repos", vec!["ann".to_string()]);

    assert_eq!(request.uri(), "/v1/{user}/repos");
    assert_eq!(request.path_params(), ["ann"]);
    assert_eq!(request.expanded_uri().expect("params fit"), "/v1/ann/repos");
}

#[test]
fn expanded_uri_without_params_is_verbatim() {
    let request = RequestDescription::new("/v1/{param}/");
    assert_eq!(request.expanded_uri().expect("nothing to expand"), "/v1/{param}/");
}

#[test]
fn expansion_errors_are_path_errors() {
    let mut request = RequestDescription::new("/");
    request.set_path("/v1/{id}", vec!["1".to_string(), "2".to_string()]);

    let error = request.expanded_uri().unwrap_err();
    assert_eq!(error.kind(), Kind::Path);
    assert_eq!(error.source_as::<PathError>(), Some(&PathError::UnusedParams(1)));
}

#[test]
fn url_joins_path_and_query() {
    let mut request = RequestDescription::new("/");
    request.set_path("/v1/{id}/items", vec!["7".to_string()]);
    request.query_mut().add("a", "1");
    request.query_mut().add("a", "2");

    let url = request.url(&base()).expect("valid url");
    assert_eq!(url.as_str(), "https://api.example.com/v1/7/items?a=1&a=2");
}

#[test]
fn into_http_carries_every_field() {
    let mut request = RequestDescription::new("/notes");
    request.append_header(
        http::header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain"),
    );
    request.query_mut().add("draft", "true");
    request.set_body("hello");

    let http_request = request
        .into_http(Method::POST, &base())
        .expect("convertible request");

    assert_eq!(*http_request.method(), Method::POST);
    assert_eq!(
        http_request.uri().to_string(),
        "https://api.example.com/notes?draft=true"
    );
    assert_eq!(http_request.headers()["content-type"], "text/plain");
    assert_eq!(&http_request.body()[..], b"hello");
}

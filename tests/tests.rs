type Result = std::result::Result<(), Box<dyn std::error::Error>>;
use routegate::*;
use test_harness::test;

const ROUTES: [&str; 10] = [
    "/get_/api/route/",
    "/get_/api/parse/(:route)",
    "/get_/api/apple/:id",
    "/get_/api/route/:id/one/:name",
    "/get_/api/:id/home/one/:name",
    "/post_///",
    "/post_/:id",
    "/post_/v3/:id/one/:name",
    "/:verb_/api/v1/:id",
    "/:verb_/v1/(:parse)/v2/(:route)",
];

fn with_logger<F, O>(test: F) -> O
where
    F: FnOnce() -> O,
{
    let _ = env_logger::builder().is_test(true).try_init();
    test()
}

fn gate() -> RouteNotFoundGate<[&'static str; 10]> {
    RouteNotFoundGate::new(ROUTES).expect("fixture routes parse")
}

fn found(method: &str, base_path: &str, path: &str) -> bool {
    gate()
        .invoke(&MatchRequest::from_parts(method, base_path, path), |err| {
            err.is_none()
        })
}

#[test(harness = with_logger)]
fn verb_is_case_insensitive() -> Result {
    assert!(found("geT", "/api/route", "/"));
    assert!(found("GET", "/api/route", ""));
    Ok(())
}

#[test(harness = with_logger)]
fn wrong_verb_is_not_found() -> Result {
    let request = MatchRequest::from_parts("post", "/api/route", "/");
    let err = gate().invoke(&request, |err| err).ok_or("expected RouteNotFound")?;

    assert_eq!(err.kind(), RouteNotFound::KIND);
    assert_eq!(err.http_verb(), "post");
    assert_eq!(err.request_url(), "/api/route/");
    assert_eq!(
        err.to_string(),
        "RouteNotFound: no route matches post /api/route/"
    );
    Ok(())
}

#[test(harness = with_logger)]
fn optional_segment_may_be_present_or_absent() -> Result {
    assert!(found("get", "/api/parse", "/45"));
    assert!(found("get", "/api/parse", "/"));
    assert!(!found("get", "/api/parse", "/45/46"));
    Ok(())
}

#[test(harness = with_logger)]
fn required_segment_must_be_present() -> Result {
    assert!(found("get", "/api/apple", "/45"));
    assert!(!found("gEt", "/api/apple", "/"));
    Ok(())
}

#[test(harness = with_logger)]
fn params_between_statics() -> Result {
    assert!(found("POST", "/v3/ctrl/one", "/xyz"));
    assert!(found("POST", "/v3/ctrl/one", "/get"));
    assert!(found("get", "/api/route/7/one", "/bob"));
    assert!(found("get", "/api/7/home/one", "/bob"));
    assert!(!found("get", "/api/7/home/two", "/bob"));
    Ok(())
}

#[test(harness = with_logger)]
fn slash_only_paths() -> Result {
    assert!(found("POST", "//", "/"));
    assert!(!found("get", "//", "/"));
    Ok(())
}

#[test(harness = with_logger)]
fn unknown_routes_are_not_found() -> Result {
    assert!(!found("get", "/fake/v1", "/index"));
    Ok(())
}

#[test(harness = with_logger)]
fn wildcard_verb_accepts_any_method() -> Result {
    assert!(found("get", "/api/v1", "/abcd"));
    assert!(found("post", "/api/v1", "/abcd"));
    assert!(found("PATCH", "/api/v1", "/abcd"));
    assert!(found("delete", "/v1/x/v2", "/y"));
    assert!(found("delete", "/v1/v2", ""));
    Ok(())
}

#[test(harness = with_logger)]
fn registration_order_decides() -> Result {
    let table = RouteTable::parse(ROUTES)?;

    let m = table.find_match(&MatchRequest::new("post", "/abc"))?;
    assert_eq!(m.index(), 6);
    assert_eq!(m.template().to_string(), "/post_/:id");

    let m = table.find_match(&MatchRequest::new("get", "/api/route"))?;
    assert_eq!(m.index(), 0);
    Ok(())
}

#[test(harness = with_logger)]
fn errors_on_load() -> Result {
    let err = RouteNotFoundGate::new(vec!["/get_/fine", "/get_/(:"]).unwrap_err();
    assert_eq!(
        err,
        TemplateSyntaxError::UnclosedOptional {
            template: "/get_/(:".into(),
            segment: "(:".into()
        }
    );

    let mut table = RouteTable::new();
    assert!(table
        .add("/get_/:")
        .unwrap_err()
        .to_string()
        .contains("params must be named"));
    assert!(table.is_empty());
    Ok(())
}

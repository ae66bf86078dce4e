use signpost::api::*;
use signpost::logging::LogContext;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

fn echo(text: &'static str) -> impl Fn(&mut RequestContext<'_>) -> HandlerResult + Send + Sync + 'static {
    move |ctx| {
        ctx.response_mut().text(text);
        Ok(())
    }
}

fn output(router: &Router, method: &str, raw_path: &str) -> String {
    let response = router
        .handle(&RequestDescriptor::new(method, raw_path))
        .expect("dispatch failed");
    body_text(&response.body)
}

fn router_with_404() -> Router {
    let mut router = Router::new();
    router.set_not_found(echo("404"));
    router
}

#[test]
fn test_duplicate_route_rejected_at_registration() {
    let mut router = router_with_404();
    router.get("/test", echo("first")).unwrap();
    router.post("/test", echo("post")).unwrap();

    let err = router.get("/test", echo("second")).unwrap_err();
    assert!(matches!(err, RouterError::RouteAlreadyExists { .. }));
    assert_eq!(err.code(), "ROUTER_ROUTE_ALREADY_EXISTS");
    assert_eq!(router.len(), 2);

    // the original registration is untouched
    assert_eq!(output(&router, "GET", "/test"), "first");
}

#[test]
fn test_only_the_matching_handler_runs() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut router = router_with_404();
    for pattern in ["/a", "/b", "/c"] {
        let calls = Arc::clone(&calls);
        router
            .get(pattern, move |_| {
                calls.lock().unwrap().push(pattern);
                Ok(())
            })
            .unwrap();
    }

    router.handle(&RequestDescriptor::get("/b")).unwrap();
    assert_eq!(*calls.lock().unwrap(), vec!["/b"]);
}

#[test]
fn test_registration_order_decides_precedence() {
    let mut router = router_with_404();
    router.get("/user/{id}", echo("A")).unwrap();
    router.get("/user/admin", echo("B")).unwrap();
    assert_eq!(output(&router, "GET", "/user/admin"), "A");

    let mut reversed = router_with_404();
    reversed.get("/user/admin", echo("B")).unwrap();
    reversed.get("/user/{id}", echo("A")).unwrap();
    assert_eq!(output(&reversed, "GET", "/user/admin"), "B");
    assert_eq!(output(&reversed, "GET", "/user/7"), "A");
}

#[test]
fn test_optional_group_unifies_trailing_slash() {
    let mut router = router_with_404();
    router.get("/test[/]", echo("test")).unwrap();
    assert_eq!(output(&router, "GET", "/test"), "test");
    assert_eq!(output(&router, "GET", "/test/"), "test");
}

#[test]
fn test_trailing_slash_is_significant_without_optional_group() {
    let mut router = router_with_404();
    router.get("/test", echo("test")).unwrap();
    assert_eq!(output(&router, "GET", "/test/"), "404");
}

#[test]
fn test_named_parameter_capture() {
    let seen = Arc::new(Mutex::new(None));
    let mut router = router_with_404();
    {
        let seen = Arc::clone(&seen);
        router
            .get("/post/{postId}/comment/{commentId}", move |ctx| {
                *seen.lock().unwrap() = Some(ctx.params().clone().into_map());
                Ok(())
            })
            .unwrap();
    }
    router
        .get("/user/{id}", |ctx| {
            let id = ctx.param("id").unwrap_or_default().to_string();
            ctx.response_mut().text(id);
            Ok(())
        })
        .unwrap();

    assert_eq!(output(&router, "GET", "/user/123"), "123");

    router
        .handle(&RequestDescriptor::get("/post/123/comment/456"))
        .unwrap();
    let params = seen.lock().unwrap().clone().unwrap();
    assert_eq!(params.get("postId").map(String::as_str), Some("123"));
    assert_eq!(params.get("commentId").map(String::as_str), Some("456"));
    assert_eq!(params.len(), 2);
}

#[test]
fn test_parameters_are_percent_decoded() {
    let mut router = router_with_404();
    router
        .get("/search/{term}", |ctx| {
            let term = ctx.param("term").unwrap_or_default().to_string();
            ctx.response_mut().text(term);
            Ok(())
        })
        .unwrap();
    assert_eq!(output(&router, "GET", "/search/rust%20lang"), "rust lang");
}

#[test]
fn test_matching_base_path_is_stripped() {
    let mut router = router_with_404();
    router.set_base_path("/some/basepath");
    router.get("/test", echo("test")).unwrap();
    assert_eq!(output(&router, "GET", "/some/basepath/test"), "test");
}

#[test]
fn test_mismatching_base_path_falls_through_to_not_found() {
    let mut router = router_with_404();
    router.set_base_path("/some/basepath");
    router.get("/test", echo("test")).unwrap();

    let mut response = HttpResponse::default();
    let outcome = router
        .dispatch(&RequestDescriptor::get("/some/path/test"), &mut response)
        .unwrap();
    assert!(outcome.is_not_found());
    assert_eq!(response.status_code, 404);
    assert_eq!(body_text(&response.body), "404");
}

#[test]
fn test_base_path_from_config() {
    let config = RouterConfig::from_json(r#"{"base_path": "/some/basepath/"}"#).unwrap();
    let mut router = Router::with_config(config);
    router.set_not_found(echo("404"));
    router.get("/test", echo("test")).unwrap();

    assert_eq!(router.base_path(), "/some/basepath");
    assert_eq!(output(&router, "GET", "/some/basepath/test"), "test");
}

#[test]
fn test_query_string_is_ignored_for_matching() {
    let mut router = router_with_404();
    router.get("/test", echo("test")).unwrap();
    assert_eq!(output(&router, "GET", "/test?param=value"), "test");

    let request = RequestDescriptor::get("/test?param=value");
    assert_eq!(
        request.query_params().get("param").map(String::as_str),
        Some("value")
    );
}

#[test]
fn test_post_route_without_not_found_handler() {
    let mut router = Router::new();
    router.post("/test", echo("test")).unwrap();

    let err = router.handle(&RequestDescriptor::get("/test")).unwrap_err();
    assert!(matches!(err, RouterError::HandlerNotConfigured));
    assert_eq!(err.to_string(), "404 handler not set");
}

#[test]
fn test_get_route_without_not_found_handler() {
    let mut router = Router::new();
    router.get("/other", echo("other")).unwrap();

    let err = router.handle(&RequestDescriptor::get("/test")).unwrap_err();
    assert_eq!(err.code(), "ROUTER_HANDLER_NOT_CONFIGURED");
}

#[test]
fn test_not_found_handler_output_replaces_error() {
    let mut router = router_with_404();
    router.post("/test", echo("test")).unwrap();
    router.get("/other", echo("other")).unwrap();
    assert_eq!(output(&router, "GET", "/test"), "404");
}

#[test]
fn test_url_for() {
    let mut router = Router::new();
    assert_eq!(router.url_for("/test"), "/test");
    router.set_base_path("/some/basepath");
    assert_eq!(router.url_for("/test"), "/some/basepath/test");
}

#[test]
fn test_redirect_with_query_from_handler() {
    let mut router = router_with_404();
    router
        .get("/old", |ctx| {
            ctx.redirect("/new", Some(&[("from", "old page")][..]))
        })
        .unwrap();

    let response = router.handle(&RequestDescriptor::get("/old")).unwrap();
    assert_eq!(response.status_code, 302);
    assert_eq!(response.location(), Some("/new?from=old%20page"));
    assert!(response.is_redirect());
}

#[test]
fn test_redirect_outside_a_handler() {
    let mut router = Router::new();
    router.set_base_path("/app");
    let mut response = HttpResponse::default();
    assert_eq!(router.redirect_to(&mut response, "/login"), Err(Halt));
    assert_eq!(response.location(), Some("/app/login"));
}

#[test]
fn test_route_line() {
    let request = RequestDescriptor::get("/some/basepath/test?x=1");
    assert_eq!(request.route_line(Some("/some/basepath")), "GET /test");
    assert_eq!(
        RequestDescriptor::get("/test").route_line(None),
        "GET /test"
    );
}

#[test]
fn test_shared_router_across_threads() {
    let hits = Arc::new(AtomicUsize::new(0));
    let mut router = router_with_404();
    {
        let hits = Arc::clone(&hits);
        router
            .get("/count/{n}", move |_| {
                hits.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .unwrap();
    }
    let router = Arc::new(router);

    let workers: Vec<_> = (0..4)
        .map(|i| {
            let router = Arc::clone(&router);
            std::thread::spawn(move || {
                router
                    .handle(&RequestDescriptor::get(format!("/count/{}", i)))
                    .unwrap();
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }
    assert_eq!(hits.load(Ordering::SeqCst), 4);
}

#[derive(Default)]
struct RecordingLogger {
    templates: Mutex<Vec<String>>,
}

impl RouterLogger for RecordingLogger {
    fn log(&self, _level: log::Level, template: &str, _context: &LogContext<'_>) {
        self.templates.lock().unwrap().push(template.to_string());
    }
}

#[test]
fn test_logger_does_not_change_matching() {
    let logger = Arc::new(RecordingLogger::default());
    let mut logged = Router::new().with_logger(logger.clone());
    let mut silent = Router::new();
    for router in [&mut logged, &mut silent] {
        router.set_not_found(echo("404"));
        router.get("/user/{id}", echo("user")).unwrap();
    }

    for path in ["/user/1", "/user/", "/nope"] {
        assert_eq!(output(&logged, "GET", path), output(&silent, "GET", path));
    }
    assert!(!logger.templates.lock().unwrap().is_empty());
}

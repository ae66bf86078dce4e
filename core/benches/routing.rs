use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use signpost::api::*;
use std::time::Duration;

fn build_router(routes: usize) -> Router {
    let mut router = Router::new();
    for i in 0..routes {
        router
            .get(&format!("/api/v1/users/{{user_id}}/posts/{{post_id}}/r{}[/]", i), |_| Ok(()))
            .unwrap();
    }
    router.set_not_found(|_| Ok(()));
    router
}

fn benchmark_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");

    for pattern in ["/test", "/user/{id}", "/post/{postId}/comment/{commentId}[/]"] {
        group.bench_with_input(BenchmarkId::new("compile", pattern), &pattern, |b, pattern| {
            b.iter(|| black_box(compile(black_box(pattern))))
        });
    }

    group.finish();
}

fn benchmark_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.measurement_time(Duration::from_secs(10));

    let router = build_router(100);
    let first = RequestDescriptor::get("/api/v1/users/123/posts/456/r0");
    let last = RequestDescriptor::get("/api/v1/users/123/posts/456/r99/");
    let miss = RequestDescriptor::get("/api/v2/nothing?page=1");

    group.bench_function("first_route", |b| {
        b.iter(|| {
            let mut response = HttpResponse::default();
            black_box(router.dispatch(black_box(&first), &mut response))
        });
    });

    group.bench_function("last_route", |b| {
        b.iter(|| {
            let mut response = HttpResponse::default();
            black_box(router.dispatch(black_box(&last), &mut response))
        });
    });

    group.bench_function("not_found", |b| {
        b.iter(|| {
            let mut response = HttpResponse::default();
            black_box(router.dispatch(black_box(&miss), &mut response))
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_compile, benchmark_dispatch);
criterion_main!(benches);

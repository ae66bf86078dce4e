//! The demo route table served by the binary.

use serde_json::json;
use signpost::api::*;
use std::sync::Arc;

pub fn build_router(config: RouterConfig) -> Result<Router, RouterError> {
    let mut router = Router::with_config(config).with_logger(Arc::new(FacadeLogger));

    router.get("/", |ctx| {
        ctx.response_mut().text("Welcome!");
        Ok(())
    })?;

    router.get("/user/{id}", |ctx| {
        let body = json!({ "id": ctx.param("id") });
        ctx.response_mut().json(body);
        Ok(())
    })?;

    router.get("/post/{postId}/comment/{commentId}", |ctx| {
        let body = json!({
            "postId": ctx.param("postId"),
            "commentId": ctx.param("commentId"),
        });
        ctx.response_mut().json(body);
        Ok(())
    })?;

    router.get("/login[/]", |ctx| {
        let action = ctx.url_for("/login");
        ctx.response_mut().html(format!(
            "<form method=\"post\" action=\"{}\"><input name=\"user\"><button>Log in</button></form>",
            action
        ));
        Ok(())
    })?;

    router.post("/login[/]", |ctx| ctx.redirect_to("/"))?;

    router.get("/old-home", |ctx| {
        let url = ctx.url_for("/");
        ctx.redirect(&url, Some(&[("moved", "permanently")][..]))
    })?;

    router.set_not_found(|ctx| {
        let body = format!("Not found: {}", ctx.path());
        ctx.response_mut().text(body);
        Ok(())
    });

    Ok(router)
}

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use askama::Template;

use dsatmath::frontend::{NavShell, Route};

use crate::web::forms::NavQuery;
use crate::web::state::AppState;
use crate::web::templates::PageChrome;

pub fn render<T: Template>(t: T) -> HttpResponse {
    render_status(StatusCode::OK, t)
}

pub fn render_status<T: Template>(status: StatusCode, t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body(format!("Template error: {e}")),
    }
}

/// Header and footer for a static page, with the persisted logo if any.
pub async fn page_chrome(state: &AppState, route: Route, query: &NavQuery) -> PageChrome {
    let nav = NavShell::for_path(route.path()).with_menu_open(query.menu_open());
    let logo = state.logo.current_logo_url().await;
    PageChrome::new(Some(route), nav, logo)
}

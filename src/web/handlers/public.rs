use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, get, web};

use dsatmath::frontend::{NavShell, Route};

use crate::web::forms::NavQuery;
use crate::web::helpers::{page_chrome, render, render_status};
use crate::web::state::AppState;
use crate::web::templates::{
    ContactTemplate, CoursesTemplate, HomeTemplate, NotFoundTemplate, PageChrome,
};

#[get("/")]
pub async fn home(state: web::Data<AppState>, query: web::Query<NavQuery>) -> impl Responder {
    let layout = page_chrome(&state, Route::Home, &query).await;
    render(HomeTemplate::new(layout))
}

#[get("/courses")]
pub async fn courses(state: web::Data<AppState>, query: web::Query<NavQuery>) -> impl Responder {
    let layout = page_chrome(&state, Route::Courses, &query).await;
    render(CoursesTemplate::new(layout))
}

#[get("/contact")]
pub async fn contact(state: web::Data<AppState>, query: web::Query<NavQuery>) -> impl Responder {
    let layout = page_chrome(&state, Route::Contact, &query).await;
    render(ContactTemplate { layout })
}

pub async fn not_found(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    let nav = NavShell::for_path(req.path());
    let logo = state.logo.current_logo_url().await;
    render_status(
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            layout: PageChrome::new(None, nav, logo),
        },
    )
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home).service(courses).service(contact);
}

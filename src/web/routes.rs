use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Form, Router};
use serde::Deserialize;

use super::pages;
use super::AppState;
use crate::auth;

/// Create the router with all routes.
///
/// Hierarchy path parameters are extracted as strings and coerced inside the
/// filters: a non-numeric id renders an empty list with an "Unknown" heading
/// instead of a 400.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/login", get(login_form).post(login_submit))
        .route("/category", get(categories))
        .route("/category/:category_id", get(forums))
        .route("/forum/:forum_id", get(threads))
        .route("/thread/:thread_id", get(posts))
        .route("/healthz", get(health))
}

// ========== HTML Routes ==========

async fn home() -> Response {
    Html(pages::home_page().into_string()).into_response()
}

async fn categories(State(state): State<AppState>) -> Response {
    Html(pages::categories_page(&state.snapshot).into_string()).into_response()
}

async fn forums(State(state): State<AppState>, Path(category_id): Path<String>) -> Response {
    Html(pages::forums_page(&category_id, &state.snapshot).into_string()).into_response()
}

async fn threads(State(state): State<AppState>, Path(forum_id): Path<String>) -> Response {
    Html(pages::threads_page(&forum_id, &state.snapshot).into_string()).into_response()
}

async fn posts(State(state): State<AppState>, Path(thread_id): Path<String>) -> Response {
    Html(pages::posts_page(&thread_id, &state.snapshot).into_string()).into_response()
}

// ========== Login ==========

/// Login form data. The "remember" checkbox is presentational and ignored.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

/// GET /login - Show the login form.
async fn login_form() -> Response {
    Html(pages::login_page(None, None).into_string()).into_response()
}

/// POST /login - Validate credentials and navigate on success.
///
/// On any failure the form is re-rendered with the inline message; no
/// session is created on success, navigation is the only effect.
async fn login_submit(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    match auth::login(&state.snapshot.users, &form.email, &form.password) {
        Ok(user) => {
            tracing::info!(user_id = user.id, "Login succeeded");
            Redirect::to("/category").into_response()
        }
        Err(e) => {
            tracing::debug!(error = %e, "Login rejected");
            Html(pages::login_page(Some(&e.to_string()), Some(&form.email)).into_string())
                .into_response()
        }
    }
}

// ========== Infrastructure ==========

async fn health() -> &'static str {
    "OK"
}

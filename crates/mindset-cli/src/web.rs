//! HTTP surface for the widget.
//!
//! One page per menu mode. A `mindset_session` cookie ties requests to a
//! session in the shared [`SessionRegistry`]; each request holds the
//! registry lock only while it rebuilds its view. Sessions are created only
//! by the challenge page, the one place state is written.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Form, Router};
use chrono::{Local, NaiveDate};
use mindset_core::storage::DisplayConfig;
use mindset_core::view::html::{render_not_found, render_page};
use mindset_core::{Config, MenuMode, SessionId, SessionRegistry, View};
use serde::Deserialize;

pub const SESSION_COOKIE: &str = "mindset_session";

#[derive(Clone)]
pub struct AppState {
    registry: Arc<Mutex<SessionRegistry>>,
    display: Arc<DisplayConfig>,
    /// Fixed date for every request; `None` follows the local clock.
    today: Option<NaiveDate>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            registry: Arc::new(Mutex::new(
                SessionRegistry::with_seed(config.random.seed).with_limits(
                    Duration::from_secs(config.server.session_idle_secs),
                    config.server.max_sessions,
                ),
            )),
            display: Arc::new(config.display.clone()),
            today: None,
        }
    }

    #[cfg(test)]
    fn pinned(config: &Config, today: NaiveDate) -> Self {
        Self {
            today: Some(today),
            ..Self::new(config)
        }
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    fn registry(&self) -> MutexGuard<'_, SessionRegistry> {
        // Sessions change only through whole operations; poisoning is ignored.
        self.registry
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[derive(Deserialize)]
pub struct ReflectionForm {
    #[serde(default)]
    reflection: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/learn") }))
        .route("/:slug", get(show_page).post(submit_reflection))
        .fallback(not_found)
        .with_state(state)
}

async fn show_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
    uri: Uri,
) -> Response {
    let Ok(mode) = slug.parse::<MenuMode>() else {
        return not_found(uri).await;
    };
    if mode == MenuMode::Learn {
        return Html(render_page(&View::learn()).into_string()).into_response();
    }

    let known = cookie_session(&headers);
    let today = state.today();

    if mode == MenuMode::DailyChallenge {
        let (id, issued) = or_issue(known);
        let body = {
            let mut registry = state.registry();
            let view = View::build(mode, registry.get_or_create(id), today, &state.display);
            render_page(&view).into_string()
        };
        return with_session_cookie(Html(body).into_response(), id, issued);
    }

    let body = {
        let mut registry = state.registry();
        let view = match known.and_then(|id| registry.get_mut(&id)) {
            Some(session) => View::build(mode, session, today, &state.display),
            None => View::build(mode, &mut registry.detached(), today, &state.display),
        };
        render_page(&view).into_string()
    };
    Html(body).into_response()
}

async fn submit_reflection(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
    uri: Uri,
    Form(form): Form<ReflectionForm>,
) -> Response {
    if slug.parse::<MenuMode>() != Ok(MenuMode::DailyChallenge) {
        return not_found(uri).await;
    }

    let (id, issued) = or_issue(cookie_session(&headers));
    let today = state.today();
    let body = {
        let mut registry = state.registry();
        let view = View::submit(registry.get_or_create(id), today, &form.reflection);
        render_page(&view).into_string()
    };

    with_session_cookie(Html(body).into_response(), id, issued)
}

async fn not_found(uri: Uri) -> Response {
    tracing::debug!(path = %uri.path(), "no such page");
    (
        StatusCode::NOT_FOUND,
        Html(render_not_found(uri.path()).into_string()),
    )
        .into_response()
}

/// Session id from the cookie header, if present and well-formed.
fn cookie_session(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| value.parse::<SessionId>().ok())
}

/// The known id, or a fresh one (`true` when it must be issued).
fn or_issue(known: Option<SessionId>) -> (SessionId, bool) {
    known.map_or_else(|| (SessionId::generate(), true), |id| (id, false))
}

fn with_session_cookie(mut response: Response, id: SessionId, issued: bool) -> Response {
    if issued {
        let cookie = format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax");
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().insert(SET_COOKIE, value);
        }
    }
    response
}

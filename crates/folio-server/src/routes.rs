//! Wizard API routes.
//!
//! Every route under `/api/portfolio` operates on the caller's workspace,
//! created on first access. Mutations broadcast a reload so the preview pane
//! tracks the store.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, State,
    },
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse},
    routing::{get, post, put},
    Json, Router,
};
use uuid::Uuid;

use folio_model::{
    Contact, ContactPatch, EducationEntry, EducationPatch, ExperienceEntry, ExperiencePatch,
    Portfolio, PortfolioStore, Profile, ProfilePatch, Project, ProjectPatch, Skill, SkillPatch,
};

use crate::auth::{self, AuthUser};
use crate::error::ApiError;
use crate::reload::{reload_client_script, ReloadMessage};
use crate::state::AppState;

/// Build the wizard API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/signup", post(auth::signup))
        .route("/api/login", post(auth::login))
        .route("/api/logout", post(auth::logout))
        .route("/api/portfolio", get(get_portfolio).delete(reset_portfolio))
        .route("/api/portfolio/profile", put(put_profile))
        .route("/api/portfolio/contact", put(put_contact))
        .route("/api/portfolio/projects", post(add_project))
        .route(
            "/api/portfolio/projects/{id}",
            axum::routing::patch(patch_project).delete(delete_project),
        )
        .route("/api/portfolio/skills", post(add_skill))
        .route(
            "/api/portfolio/skills/{id}",
            axum::routing::patch(patch_skill).delete(delete_skill),
        )
        .route("/api/portfolio/education", post(add_education))
        .route(
            "/api/portfolio/education/{id}",
            axum::routing::patch(patch_education).delete(delete_education),
        )
        .route("/api/portfolio/experience", post(add_experience))
        .route(
            "/api/portfolio/experience/{id}",
            axum::routing::patch(patch_experience).delete(delete_experience),
        )
        .route("/api/preview", get(preview))
        .route("/api/download", get(download))
        .route("/__reload", get(ws_handler))
        .route("/__reload.js", get(reload_script_handler))
        .with_state(state)
}

/// Run a mutation against the caller's workspace and broadcast a reload.
async fn mutate<T>(
    state: &AppState,
    user_id: Uuid,
    op: impl FnOnce(&mut PortfolioStore) -> Result<T, ApiError>,
) -> Result<T, ApiError> {
    let mut workspaces = state.workspaces.write().await;
    let store = workspaces.entry(user_id).or_default();
    let value = op(store)?;
    state.reload.send(ReloadMessage::Reload);
    Ok(value)
}

/// Snapshot the caller's aggregate (defaults if the workspace is untouched).
async fn snapshot(state: &AppState, user_id: Uuid) -> Portfolio {
    state
        .workspaces
        .read()
        .await
        .get(&user_id)
        .map(PortfolioStore::snapshot)
        .unwrap_or_default()
}

async fn get_portfolio(State(state): State<AppState>, auth: AuthUser) -> Json<Portfolio> {
    Json(snapshot(&state, auth.user_id).await)
}

async fn reset_portfolio(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<StatusCode, ApiError> {
    mutate(&state, auth.user_id, |store| {
        store.reset();
        Ok(())
    })
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn put_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(patch): Json<ProfilePatch>,
) -> Result<Json<Profile>, ApiError> {
    mutate(&state, auth.user_id, |store| {
        store.update_profile(patch);
        Ok(Json(store.portfolio().profile.clone()))
    })
    .await
}

async fn put_contact(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(patch): Json<ContactPatch>,
) -> Result<Json<Contact>, ApiError> {
    mutate(&state, auth.user_id, |store| {
        store.update_contact(patch);
        Ok(Json(store.portfolio().contact.clone()))
    })
    .await
}

async fn add_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(fields): Json<ProjectPatch>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    let project = mutate(&state, auth.user_id, |store| {
        Ok(store.add_project(fields).clone())
    })
    .await?;
    Ok((StatusCode::CREATED, Json(project)))
}

async fn patch_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(patch): Json<ProjectPatch>,
) -> Result<Json<Project>, ApiError> {
    mutate(&state, auth.user_id, |store| {
        Ok(Json(store.update_project(id, patch)?.clone()))
    })
    .await
}

async fn delete_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    mutate(&state, auth.user_id, |store| {
        store.remove_project(id)?;
        Ok(())
    })
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn add_skill(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(fields): Json<SkillPatch>,
) -> Result<(StatusCode, Json<Skill>), ApiError> {
    let skill = mutate(&state, auth.user_id, |store| {
        Ok(store.add_skill(fields).clone())
    })
    .await?;
    Ok((StatusCode::CREATED, Json(skill)))
}

async fn patch_skill(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(patch): Json<SkillPatch>,
) -> Result<Json<Skill>, ApiError> {
    mutate(&state, auth.user_id, |store| {
        Ok(Json(store.update_skill(id, patch)?.clone()))
    })
    .await
}

async fn delete_skill(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    mutate(&state, auth.user_id, |store| {
        store.remove_skill(id)?;
        Ok(())
    })
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn add_education(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(fields): Json<EducationPatch>,
) -> Result<(StatusCode, Json<EducationEntry>), ApiError> {
    let entry = mutate(&state, auth.user_id, |store| {
        Ok(store.add_education(fields).clone())
    })
    .await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

async fn patch_education(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(patch): Json<EducationPatch>,
) -> Result<Json<EducationEntry>, ApiError> {
    mutate(&state, auth.user_id, |store| {
        Ok(Json(store.update_education(id, patch)?.clone()))
    })
    .await
}

async fn delete_education(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    mutate(&state, auth.user_id, |store| {
        store.remove_education(id)?;
        Ok(())
    })
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn add_experience(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(fields): Json<ExperiencePatch>,
) -> Result<(StatusCode, Json<ExperienceEntry>), ApiError> {
    let entry = mutate(&state, auth.user_id, |store| {
        Ok(store.add_experience(fields).clone())
    })
    .await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

async fn patch_experience(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(patch): Json<ExperiencePatch>,
) -> Result<Json<ExperienceEntry>, ApiError> {
    mutate(&state, auth.user_id, |store| {
        Ok(Json(store.update_experience(id, patch)?.clone()))
    })
    .await
}

async fn delete_experience(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    mutate(&state, auth.user_id, |store| {
        store.remove_experience(id)?;
        Ok(())
    })
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/preview`: the rendered document for the sandboxed frame, with
/// the reload client injected so the pane follows wizard edits.
async fn preview(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Html<String>, ApiError> {
    let portfolio = snapshot(&state, auth.user_id).await;
    let html = state.renderer.render(&portfolio)?;
    Ok(Html(inject_reload_client(html)))
}

/// `GET /api/download`: the document packaged as a `portfolio.html`
/// attachment.
async fn download(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let portfolio = snapshot(&state, auth.user_id).await;
    let html = state.renderer.render(&portfolio)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                r#"attachment; filename="portfolio.html""#,
            ),
        ],
        html,
    ))
}

/// Splice the reload client into a rendered document, for preview surfaces
/// only. Downloads stay standalone.
pub(crate) fn inject_reload_client(html: String) -> String {
    html.replace(
        "</body>",
        "  <script src=\"/__reload.js\"></script>\n</body>",
    )
}

/// Handler for the reload WebSocket endpoint.
pub(crate) async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state.reload))
}

/// Forward reload broadcasts to one client.
pub(crate) async fn handle_ws(mut socket: WebSocket, hub: crate::reload::ReloadHub) {
    let mut rx = hub.subscribe();

    let msg = serde_json::to_string(&ReloadMessage::Connected).unwrap();
    if socket.send(Message::Text(msg.into())).await.is_err() {
        return;
    }

    while let Ok(reload_msg) = rx.recv().await {
        let json = serde_json::to_string(&reload_msg).unwrap();
        if socket.send(Message::Text(json.into())).await.is_err() {
            break;
        }
    }
}

/// Handler for the reload client script.
pub(crate) async fn reload_script_handler(headers: HeaderMap) -> impl IntoResponse {
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("127.0.0.1");
    let script = reload_client_script(&format!("ws://{}/__reload", host));
    ([(header::CONTENT_TYPE, "application/javascript")], script)
}

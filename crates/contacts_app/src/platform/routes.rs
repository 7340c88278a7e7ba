use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::Uri;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use contacts_core::{AppState, ContactListView, Msg};
use contacts_engine::{ContactMutation, ContactRecord, DataProvider};
use contacts_logging::{contacts_debug, contacts_info};
use serde::{Deserialize, Serialize};

use super::effects::EffectRunner;
use super::error::AppError;
use super::ui::{layout, render};

#[derive(Clone)]
pub struct ServerState {
    provider: Arc<dyn DataProvider>,
}

impl ServerState {
    pub fn new(provider: Arc<dyn DataProvider>) -> Self {
        Self { provider }
    }

    fn runner(&self) -> EffectRunner {
        EffectRunner::new(self.provider.clone())
    }
}

pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(index_handler).post(new_contact_handler))
        .route("/contacts/:id", get(contact_handler))
        .route("/contacts/:id/edit", get(edit_handler).post(save_contact_handler))
        .route("/contacts/:id/favorite", post(favorite_handler))
        .route("/contacts/:id/destroy", post(destroy_handler))
        .route("/api/contacts", get(contacts_json_handler))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    q: Option<String>,
}

#[derive(Debug, Serialize)]
struct LoaderPayload {
    contacts: Vec<ContactRecord>,
    q: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EditForm {
    first: String,
    last: String,
    twitter: String,
    avatar: String,
    notes: String,
}

impl From<EditForm> for ContactMutation {
    fn from(form: EditForm) -> Self {
        ContactMutation {
            first: Some(form.first),
            last: Some(form.last),
            twitter: Some(form.twitter),
            avatar: Some(form.avatar),
            notes: Some(form.notes),
            favorite: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FavoriteForm {
    favorite: String,
}

/// Root loader: drives the contact list state machine for the requested URL.
async fn load_contact_list(state: &ServerState, uri: &Uri) -> Result<ContactListView, AppError> {
    let href = uri
        .path_and_query()
        .map(|path_and_query| path_and_query.as_str())
        .unwrap_or("/");
    contacts_debug!("loader href={}", href);
    let session = state
        .runner()
        .settle(
            AppState::new(),
            Msg::Navigate {
                href: href.to_string(),
            },
        )
        .await;
    let view = session.view();
    match &view.error {
        Some(message) => Err(AppError::Loader(message.clone())),
        None => Ok(view),
    }
}

async fn find_contact(state: &ServerState, id: &str) -> Result<ContactRecord, AppError> {
    state
        .provider
        .get_contact(id)
        .await?
        .ok_or_else(|| AppError::ContactNotFound(id.to_string()))
}

async fn index_handler(State(state): State<ServerState>, uri: Uri) -> Result<Html<String>, AppError> {
    let view = load_contact_list(&state, &uri).await?;
    Ok(Html(layout::page(&view, &render::index_pane())))
}

async fn new_contact_handler(State(state): State<ServerState>) -> Result<Response, AppError> {
    let session = state
        .runner()
        .submit(AppState::new(), Msg::NewContactSubmitted)
        .await;
    if let Some(message) = session.error() {
        return Err(AppError::Action(message.to_string()));
    }
    let Some(redirect) = session.pending() else {
        return Err(AppError::Action("no redirect after create".to_string()));
    };
    let target = redirect.location.href();
    contacts_info!("New contact, redirecting to {}", target);
    Ok(Redirect::to(&target).into_response())
}

async fn contact_handler(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    uri: Uri,
) -> Result<Html<String>, AppError> {
    let contact = find_contact(&state, &id).await?;
    let view = load_contact_list(&state, &uri).await?;
    Ok(Html(layout::page(&view, &render::contact_pane(&contact))))
}

async fn edit_handler(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    uri: Uri,
) -> Result<Html<String>, AppError> {
    let contact = find_contact(&state, &id).await?;
    let view = load_contact_list(&state, &uri).await?;
    Ok(Html(layout::page(&view, &render::edit_pane(&contact))))
}

async fn save_contact_handler(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Form(form): Form<EditForm>,
) -> Result<Redirect, AppError> {
    let updated = state.provider.update_contact(&id, form.into()).await?;
    Ok(Redirect::to(&format!("/contacts/{}", updated.id)))
}

async fn favorite_handler(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Form(form): Form<FavoriteForm>,
) -> Result<Redirect, AppError> {
    let updates = ContactMutation {
        favorite: Some(form.favorite == "true"),
        ..ContactMutation::default()
    };
    state.provider.update_contact(&id, updates).await?;
    Ok(Redirect::to(&format!("/contacts/{id}")))
}

async fn destroy_handler(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    state.provider.delete_contact(&id).await?;
    Ok(Redirect::to("/"))
}

async fn contacts_json_handler(
    State(state): State<ServerState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<LoaderPayload>, AppError> {
    let contacts = state.provider.get_contacts(params.q.as_deref()).await?;
    Ok(Json(LoaderPayload {
        contacts,
        q: params.q,
    }))
}

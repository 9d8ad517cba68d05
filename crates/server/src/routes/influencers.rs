use axum::{extract::{Path, Query, State}, http::StatusCode, Json};
use serde::Deserialize;
use service::influencer::domain::{InfluencerInput, InfluencerView, ListFilter};
use tracing::debug;
use uuid::Uuid;

use crate::{errors::JsonApiError, extract::ApiJson, routes::ServerState};

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Only influencers managed by this employee.
    pub manager_id: Option<Uuid>,
    /// Alias of `manager_id`.
    #[serde(rename = "manager__id")]
    pub manager_id_alias: Option<Uuid>,
    /// Terms separated by spaces or commas; each must match a first or last
    /// name of the influencer or its manager.
    pub search: Option<String>,
}

impl From<ListQuery> for ListFilter {
    fn from(q: ListQuery) -> Self {
        Self { manager_id: q.manager_id.or(q.manager_id_alias), search: q.search }
    }
}

#[utoipa::path(
    get, path = "/influencers", tag = "influencers",
    params(ListQuery),
    responses((status = 200, description = "Influencers in creation order", body = [crate::openapi::InfluencerDoc]))
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<InfluencerView>>, JsonApiError> {
    let list = state.influencers.list_influencers(q.into()).await?;
    debug!(count = list.len(), "list influencers");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/influencers", tag = "influencers",
    request_body = crate::openapi::InfluencerInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::InfluencerDoc),
        (status = 400, description = "Field errors")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(input): ApiJson<InfluencerInput>,
) -> Result<(StatusCode, Json<InfluencerView>), JsonApiError> {
    let created = state.influencers.validate_and_create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/influencers/{id}", tag = "influencers",
    params(("id" = Uuid, Path, description = "Influencer ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::InfluencerDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<Uuid>) -> Result<Json<InfluencerView>, JsonApiError> {
    Ok(Json(state.influencers.get_influencer(id).await?))
}

/// Serves both PUT and PATCH. An absent `manager_id` clears the manager.
#[utoipa::path(
    put, path = "/influencers/{id}", tag = "influencers",
    params(("id" = Uuid, Path, description = "Influencer ID")),
    request_body = crate::openapi::InfluencerInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::InfluencerDoc),
        (status = 400, description = "Field errors"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    ApiJson(input): ApiJson<InfluencerInput>,
) -> Result<Json<InfluencerView>, JsonApiError> {
    Ok(Json(state.influencers.validate_and_update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/influencers/{id}", tag = "influencers",
    params(("id" = Uuid, Path, description = "Influencer ID")),
    responses(
        (status = 204, description = "Deleted with its accounts"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<Uuid>) -> Result<StatusCode, JsonApiError> {
    state.influencers.delete_influencer(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

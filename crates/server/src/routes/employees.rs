use axum::{extract::{Path, State}, http::StatusCode, Json};
use service::employee::domain::{EmployeeInput, EmployeeView};
use uuid::Uuid;

use crate::{errors::JsonApiError, extract::ApiJson, routes::ServerState};

#[utoipa::path(
    get, path = "/employees", tag = "employees",
    responses((status = 200, description = "Employees in creation order", body = [crate::openapi::EmployeeDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<EmployeeView>>, JsonApiError> {
    Ok(Json(state.employees.list_employees().await?))
}

#[utoipa::path(
    post, path = "/employees", tag = "employees",
    request_body = crate::openapi::EmployeeInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::EmployeeDoc),
        (status = 400, description = "Field errors")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(input): ApiJson<EmployeeInput>,
) -> Result<(StatusCode, Json<EmployeeView>), JsonApiError> {
    let created = state.employees.create_employee(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/employees/{id}", tag = "employees",
    params(("id" = Uuid, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::EmployeeDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<Uuid>) -> Result<Json<EmployeeView>, JsonApiError> {
    Ok(Json(state.employees.get_employee(id).await?))
}

/// Serves both PUT and PATCH; absent fields keep their value.
#[utoipa::path(
    put, path = "/employees/{id}", tag = "employees",
    params(("id" = Uuid, Path, description = "Employee ID")),
    request_body = crate::openapi::EmployeeInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::EmployeeDoc),
        (status = 400, description = "Field errors"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    ApiJson(input): ApiJson<EmployeeInput>,
) -> Result<Json<EmployeeView>, JsonApiError> {
    Ok(Json(state.employees.update_employee(id, input).await?))
}

#[utoipa::path(
    delete, path = "/employees/{id}", tag = "employees",
    params(("id" = Uuid, Path, description = "Employee ID")),
    responses(
        (status = 204, description = "Deleted; managed influencers lose their manager"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<Uuid>) -> Result<StatusCode, JsonApiError> {
    state.employees.delete_employee(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

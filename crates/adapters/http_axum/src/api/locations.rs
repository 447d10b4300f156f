//! JSON REST handlers for locations.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use staffhub_app::ports::{EmployeeRepository, LocationRepository};
use staffhub_domain::id::LocationId;
use staffhub_domain::location::{Location, LocationPatch, NewLocation};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Location>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Location>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Location>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `POST /locations`
pub async fn create<ER, LR>(
    State(state): State<AppState<ER, LR>>,
    Json(req): Json<NewLocation>,
) -> Result<CreateResponse, ApiError>
where
    ER: EmployeeRepository + Send + Sync + 'static,
    LR: LocationRepository + Send + Sync + 'static,
{
    let created = state.location_service.create(req).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `GET /locations`
pub async fn list<ER, LR>(
    State(state): State<AppState<ER, LR>>,
) -> Result<ListResponse, ApiError>
where
    ER: EmployeeRepository + Send + Sync + 'static,
    LR: LocationRepository + Send + Sync + 'static,
{
    let locations = state.location_service.find_all().await?;
    Ok(ListResponse::Ok(Json(locations)))
}

/// `GET /locations/:id`
pub async fn get<ER, LR>(
    State(state): State<AppState<ER, LR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    ER: EmployeeRepository + Send + Sync + 'static,
    LR: LocationRepository + Send + Sync + 'static,
{
    let location_id: LocationId = id.parse()?;
    let location = state.location_service.find_one(location_id).await?;
    Ok(GetResponse::Ok(Json(location)))
}

/// `PATCH /locations/:id`
pub async fn update<ER, LR>(
    State(state): State<AppState<ER, LR>>,
    Path(id): Path<String>,
    Json(patch): Json<LocationPatch>,
) -> Result<GetResponse, ApiError>
where
    ER: EmployeeRepository + Send + Sync + 'static,
    LR: LocationRepository + Send + Sync + 'static,
{
    let location_id: LocationId = id.parse()?;
    let updated = state.location_service.update(location_id, patch).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /locations/:id`
pub async fn delete<ER, LR>(
    State(state): State<AppState<ER, LR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    ER: EmployeeRepository + Send + Sync + 'static,
    LR: LocationRepository + Send + Sync + 'static,
{
    let location_id: LocationId = id.parse()?;
    state.location_service.remove(location_id).await?;
    Ok(DeleteResponse::NoContent)
}

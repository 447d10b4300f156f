//! JSON REST handlers for employees.

use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use staffhub_app::ports::{EmployeeRepository, LocationRepository};
use staffhub_domain::employee::{Employee, EmployeePatch};
use staffhub_domain::id::{EmployeeId, LocationId};

use crate::error::ApiError;
use crate::state::AppState;

/// Reference to a location in a request body: either its bare id or an
/// embedded location object carrying `locationId`.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum LocationRef {
    Id(LocationId),
    Embedded {
        #[serde(rename = "locationId")]
        id: LocationId,
    },
}

impl LocationRef {
    fn id(&self) -> LocationId {
        match self {
            Self::Id(id) | Self::Embedded { id } => *id,
        }
    }
}

/// Request body for creating an employee.
#[derive(Deserialize)]
pub struct CreateEmployeeRequest {
    #[serde(rename = "employeeName")]
    pub name: String,
    #[serde(rename = "employeeEmail")]
    pub email: String,
    pub location: LocationRef,
}

/// Request body for patching an employee.
#[derive(Deserialize)]
pub struct UpdateEmployeeRequest {
    #[serde(rename = "employeeName")]
    pub name: Option<String>,
    #[serde(rename = "employeeEmail")]
    pub email: Option<String>,
    pub location: Option<LocationRef>,
}

impl From<UpdateEmployeeRequest> for EmployeePatch {
    fn from(req: UpdateEmployeeRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            location_id: req.location.as_ref().map(LocationRef::id),
        }
    }
}

/// Possible responses from the list endpoints.
pub enum ListResponse {
    Ok(Json<Vec<Employee>>),
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
    Ok(Json<Employee>),
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
    Created(Json<Employee>),
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

/// `POST /employees`
pub async fn create<ER, LR>(
    State(state): State<AppState<ER, LR>>,
    Json(req): Json<CreateEmployeeRequest>,
) -> Result<CreateResponse, ApiError>
where
    ER: EmployeeRepository + Send + Sync + 'static,
    LR: LocationRepository + Send + Sync + 'static,
{
    let employee = Employee::builder()
        .name(req.name)
        .email(req.email)
        .location_id(req.location.id())
        .build()?;
    let created = state.employee_service.create(employee).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `POST /employees/upload`
///
/// Accepts a multipart body with a `file` field. The content is drained and
/// discarded; nothing is stored.
pub async fn upload(mut multipart: Multipart) -> Result<&'static str, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(ToOwned::to_owned);
        let file_name = field.file_name().map(ToOwned::to_owned);
        let bytes = field.bytes().await?;
        tracing::debug!(?name, ?file_name, size = bytes.len(), "received upload field");
    }
    Ok("OK")
}

/// `GET /employees`
pub async fn list<ER, LR>(
    State(state): State<AppState<ER, LR>>,
) -> Result<ListResponse, ApiError>
where
    ER: EmployeeRepository + Send + Sync + 'static,
    LR: LocationRepository + Send + Sync + 'static,
{
    let employees = state.employee_service.find_all().await?;
    Ok(ListResponse::Ok(Json(employees)))
}

/// `GET /employees/:id`
pub async fn get<ER, LR>(
    State(state): State<AppState<ER, LR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    ER: EmployeeRepository + Send + Sync + 'static,
    LR: LocationRepository + Send + Sync + 'static,
{
    let employee_id = EmployeeId::parse_v4(&id)?;
    let employee = state.employee_service.find_one(employee_id).await?;
    Ok(GetResponse::Ok(Json(employee)))
}

/// `GET /employees/location/:id`
pub async fn list_by_location<ER, LR>(
    State(state): State<AppState<ER, LR>>,
    Path(id): Path<String>,
) -> Result<ListResponse, ApiError>
where
    ER: EmployeeRepository + Send + Sync + 'static,
    LR: LocationRepository + Send + Sync + 'static,
{
    let location_id: LocationId = id.parse()?;
    let employees = state
        .employee_service
        .find_by_location(location_id)
        .await?;
    Ok(ListResponse::Ok(Json(employees)))
}

/// `PATCH /employees/:id`
pub async fn update<ER, LR>(
    State(state): State<AppState<ER, LR>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateEmployeeRequest>,
) -> Result<GetResponse, ApiError>
where
    ER: EmployeeRepository + Send + Sync + 'static,
    LR: LocationRepository + Send + Sync + 'static,
{
    let employee_id = EmployeeId::parse_v4(&id)?;
    let updated = state
        .employee_service
        .update(employee_id, req.into())
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /employees/:id`
pub async fn delete<ER, LR>(
    State(state): State<AppState<ER, LR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    ER: EmployeeRepository + Send + Sync + 'static,
    LR: LocationRepository + Send + Sync + 'static,
{
    let employee_id = EmployeeId::parse_v4(&id)?;
    state.employee_service.remove(employee_id).await?;
    Ok(DeleteResponse::NoContent)
}

//! HTTP request handlers for the personnel manager API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::PersonnelError;
use crate::models::{Cadre, Ouvrier};

use super::request::{CadreRequest, MonthQuery, NameQuery, OuvrierRequest};
use super::response::{ApiError, ApiErrorResponse, RegistrationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/cadres", post(register_cadre_handler))
        .route("/cadres/:id", get(get_cadre_handler))
        .route("/cadres/:id/salaires", get(cadre_salary_handler))
        .route(
            "/ouvriers",
            post(register_ouvrier_handler).get(find_ouvrier_by_name_handler),
        )
        .route("/ouvriers/:id", get(get_ouvrier_handler))
        .route("/ouvriers/:id/salaires", get(ouvrier_salary_handler))
        .route("/employees", get(list_employees_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, Json(body)).into_response()
}

fn error_response(correlation_id: Uuid, err: PersonnelError) -> Response {
    match &err {
        PersonnelError::BusinessRuleViolation { .. } | PersonnelError::InvalidArgument { .. } => {
            info!(correlation_id = %correlation_id, error = %err, "Registration rejected");
        }
        _ => warn!(correlation_id = %correlation_id, error = %err, "Request failed"),
    }
    ApiErrorResponse::from(err).into_response()
}

/// Maps a JSON body rejection onto the API error format.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the problem
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::new(StatusCode::BAD_REQUEST, error).into_response()
}

/// Handler for POST /cadres.
///
/// A `null` body reaches the service as an absent candidate.
async fn register_cadre_handler(
    State(state): State<AppState>,
    payload: Result<Json<Option<CadreRequest>>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing cadre registration");

    let candidate: Option<Cadre> = match payload {
        Ok(Json(req)) => req.map(Into::into),
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    let id = candidate.as_ref().map(|c| c.id);

    match state.service().register_cadre(candidate) {
        Ok(()) => json_response(
            StatusCode::CREATED,
            id.map(|id| RegistrationResponse { id }),
        ),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /ouvriers.
async fn register_ouvrier_handler(
    State(state): State<AppState>,
    payload: Result<Json<Option<OuvrierRequest>>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing ouvrier registration");

    let candidate: Option<Ouvrier> = match payload {
        Ok(Json(req)) => req.map(Into::into),
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    let id = candidate.as_ref().map(|o| o.id);

    match state.service().register_ouvrier(candidate) {
        Ok(()) => json_response(
            StatusCode::CREATED,
            id.map(|id| RegistrationResponse { id }),
        ),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /cadres/:id.
async fn get_cadre_handler(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.service().find_cadre_by_id(id) {
        Ok(Some(cadre)) => json_response(StatusCode::OK, cadre),
        Ok(None) => ApiErrorResponse::new(StatusCode::NOT_FOUND, ApiError::not_found("cadre", id))
            .into_response(),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /ouvriers/:id.
async fn get_ouvrier_handler(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.service().find_ouvrier_by_id(id) {
        Ok(Some(ouvrier)) => json_response(StatusCode::OK, ouvrier),
        Ok(None) => {
            ApiErrorResponse::new(StatusCode::NOT_FOUND, ApiError::not_found("ouvrier", id))
                .into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /ouvriers?nom=...
async fn find_ouvrier_by_name_handler(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.service().find_ouvrier_by_name(&query.nom) {
        Ok(Some(ouvrier)) => json_response(StatusCode::OK, ouvrier),
        Ok(None) => ApiErrorResponse::new(
            StatusCode::NOT_FOUND,
            ApiError::not_found("ouvrier", &query.nom),
        )
        .into_response(),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /employees.
async fn list_employees_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.service().list_employees() {
        Ok(employes) => {
            info!(
                correlation_id = %correlation_id,
                count = employes.len(),
                "Listed employees"
            );
            json_response(StatusCode::OK, employes)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /cadres/:id/salaires.
async fn cadre_salary_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<MonthQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.service().cadre_salary_for_month(id, query.mois) {
        Ok(salaires) => json_response(StatusCode::OK, salaires),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /ouvriers/:id/salaires.
async fn ouvrier_salary_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<MonthQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.service().ouvrier_salary_for_month(id, query.mois) {
        Ok(salaires) => json_response(StatusCode::OK, salaires),
        Err(err) => error_response(correlation_id, err),
    }
}

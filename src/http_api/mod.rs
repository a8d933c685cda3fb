use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    ClassSession, LayoutSummary, Timetable, TimetableError, TimetableMetadata, week,
};

#[derive(Clone)]
pub struct AppState {
    timetable: Arc<RwLock<Timetable>>,
}

impl AppState {
    pub fn new(timetable: Timetable) -> Self {
        Self {
            timetable: Arc::new(RwLock::new(timetable)),
        }
    }

    pub fn with_shared(timetable: Arc<RwLock<Timetable>>) -> Self {
        Self { timetable }
    }

    fn timetable(&self) -> Arc<RwLock<Timetable>> {
        self.timetable.clone()
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

#[derive(Debug)]
enum ApiError {
    NotFound(String),
    Conflict(String),
    Invalid(String),
    Internal(String),
}

impl ApiError {
    fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    fn invalid(message: impl Into<String>) -> Self {
        ApiError::Invalid(message.into())
    }

    fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }
}

impl From<TimetableError> for ApiError {
    fn from(value: TimetableError) -> Self {
        ApiError::Invalid(value.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => {
                let body = Json(ErrorBody {
                    error: "not_found",
                    message,
                });
                (StatusCode::NOT_FOUND, body).into_response()
            }
            ApiError::Conflict(message) => {
                let body = Json(ErrorBody {
                    error: "conflict",
                    message,
                });
                (StatusCode::CONFLICT, body).into_response()
            }
            ApiError::Invalid(message) => {
                let body = Json(ErrorBody {
                    error: "invalid_request",
                    message,
                });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            ApiError::Internal(message) => {
                let body = Json(ErrorBody {
                    error: "internal_error",
                    message,
                });
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct DayQuery {
    day: Option<u8>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BlockView {
    class_id: i64,
    name: String,
    subject: String,
    teacher_name: String,
    time_slot: String,
    max_students: u32,
    start_slot_index: usize,
    span_slots: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DayView {
    day: u8,
    name: &'static str,
    cells: Vec<Vec<BlockView>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleView {
    slots: Vec<String>,
    days: Vec<DayView>,
    summary: LayoutSummary,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/metadata", get(get_metadata).put(update_metadata))
        .route("/classes", get(list_classes).post(create_class))
        .route(
            "/classes/:id",
            get(get_class).put(update_class).delete(delete_class),
        )
        .route("/schedule", get(get_schedule))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, timetable: Timetable) -> std::io::Result<()> {
    let state = AppState::new(timetable);
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn get_metadata(State(state): State<AppState>) -> Json<TimetableMetadata> {
    let timetable = state.timetable();
    let metadata = {
        let guard = timetable.read();
        guard.metadata().clone()
    };
    Json(metadata)
}

async fn update_metadata(
    State(state): State<AppState>,
    Json(metadata): Json<TimetableMetadata>,
) -> Json<TimetableMetadata> {
    let timetable = state.timetable();
    let current = {
        let mut guard = timetable.write();
        guard.set_metadata(metadata);
        guard.metadata().clone()
    };
    Json(current)
}

async fn list_classes(
    State(state): State<AppState>,
    Query(query): Query<DayQuery>,
) -> Result<Json<Vec<ClassSession>>, ApiError> {
    let timetable = state.timetable();
    let classes = {
        let guard = timetable.read();
        guard
            .classes_by_day(query.day)
            .map_err(ApiError::from)?
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    };
    Ok(Json(classes))
}

async fn get_class(
    State(state): State<AppState>,
    Path(class_id): Path<i64>,
) -> Result<Json<ClassSession>, ApiError> {
    let timetable = state.timetable();
    let result = {
        let guard = timetable.read();
        guard.find_class(class_id).cloned()
    };
    match result {
        Some(class) => Ok(Json(class)),
        None => Err(ApiError::not_found(format!("class {class_id} not found"))),
    }
}

async fn create_class(
    State(state): State<AppState>,
    Json(class): Json<ClassSession>,
) -> Result<(StatusCode, Json<ClassSession>), ApiError> {
    let timetable = state.timetable();
    {
        let mut guard = timetable.write();
        if guard.find_class(class.id).is_some() {
            return Err(ApiError::Conflict(format!(
                "class {} already exists",
                class.id
            )));
        }
        guard.upsert_class(class.clone()).map_err(ApiError::from)?;
    }
    let created = {
        let guard = timetable.read();
        guard
            .find_class(class.id)
            .cloned()
            .ok_or_else(|| ApiError::internal("class not found after creation"))?
    };
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_class(
    State(state): State<AppState>,
    Path(class_id): Path<i64>,
    Json(class): Json<ClassSession>,
) -> Result<Json<ClassSession>, ApiError> {
    if class.id != class_id {
        return Err(ApiError::invalid(
            "class id in payload does not match path parameter",
        ));
    }
    let timetable = state.timetable();
    {
        let mut guard = timetable.write();
        if guard.find_class(class_id).is_none() {
            return Err(ApiError::not_found(format!("class {class_id} not found")));
        }
        guard.upsert_class(class.clone()).map_err(ApiError::from)?;
    }
    let updated = {
        let guard = timetable.read();
        guard
            .find_class(class_id)
            .cloned()
            .ok_or_else(|| ApiError::internal("class not found after update"))?
    };
    Ok(Json(updated))
}

async fn delete_class(
    State(state): State<AppState>,
    Path(class_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let timetable = state.timetable();
    let removed = {
        let mut guard = timetable.write();
        guard.delete_class(class_id)
    };
    if !removed {
        return Err(ApiError::not_found(format!("class {class_id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// The weekly schedule view: per day, one cell list per grid row. A class
/// block appears only in the cell matching its start row; its `spanSlots`
/// tells the consumer how far the block extends downward.
async fn get_schedule(
    State(state): State<AppState>,
    Query(query): Query<DayQuery>,
) -> Result<Json<ScheduleView>, ApiError> {
    if let Some(day) = query.day {
        if !week::is_valid_day(day) {
            return Err(ApiError::from(TimetableError::InvalidDay(day)));
        }
    }

    let timetable = state.timetable();
    let guard = timetable.read();
    let grid = guard.grid();
    let layout = guard.week_layout();

    let slots = grid.rows().iter().map(|row| row.label()).collect();
    let days = week::ALL_DAYS
        .iter()
        .copied()
        .filter(|day| query.day.is_none_or(|wanted| wanted == *day))
        .map(|day| DayView {
            day,
            name: week::day_name(day),
            cells: (0..grid.len())
                .map(|row| {
                    layout
                        .blocks_at(day, row)
                        .iter()
                        .filter_map(|block| {
                            guard.find_class(block.class_id).map(|class| BlockView {
                                class_id: class.id,
                                name: class.name.clone(),
                                subject: class.subject.clone(),
                                teacher_name: class.teacher_name.clone(),
                                time_slot: class.time_slot.clone(),
                                max_students: class.max_students,
                                start_slot_index: block.position.start_slot_index,
                                span_slots: block.position.span_slots,
                            })
                        })
                        .collect()
                })
                .collect(),
        })
        .collect();

    Ok(Json(ScheduleView {
        slots,
        days,
        summary: layout.summary().clone(),
    }))
}

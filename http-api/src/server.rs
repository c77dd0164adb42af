//! HTTP server and route table
//!
//! Builds the axum router over a dependency-injected repository handle and
//! serves it. Handlers are stateless request/response mappings: one
//! repository call each, result serialized as the JSON body.

use axum::{
    extract::{Path, State},
    middleware,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::{net::SocketAddr, sync::Arc};
use tracing::info;

use crate::error::ApiError;
use task_core::{NewTask, Task, TaskRepository, UpdateTask};

/// Shared server state for handlers
#[derive(Clone)]
pub struct AppState<R> {
    pub repository: Arc<R>,
}

/// HTTP server exposing the task collection
pub struct HttpServer<R> {
    repository: Arc<R>,
}

impl<R: TaskRepository + 'static> HttpServer<R> {
    /// Create a new server over the given repository handle
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Start the HTTP server on the given address
    pub async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.create_router();

        let socket_addr: SocketAddr = addr
            .parse()
            .map_err(|e| format!("Invalid address '{addr}': {e}"))?;

        info!("Starting HTTP server on {}", socket_addr);

        let listener = tokio::net::TcpListener::bind(socket_addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Create the router with all endpoints
    pub fn create_router(self) -> Router {
        let state = Arc::new(AppState {
            repository: self.repository,
        });

        Router::new()
            .route("/tasks", get(list_tasks).post(create_task))
            .route(
                "/tasks/:id",
                get(get_task).put(update_task).delete(delete_task),
            )
            .route("/health", get(health))
            .layer(middleware::from_fn(
                crate::request_logger::request_logging_middleware,
            ))
            .with_state(state)
    }
}

async fn create_task<R: TaskRepository>(
    State(state): State<Arc<AppState<R>>>,
    Json(new_task): Json<NewTask>,
) -> Result<Json<Task>, ApiError> {
    let task = state.repository.create(new_task).await?;
    Ok(Json(task))
}

async fn get_task<R: TaskRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<Json<Option<Task>>, ApiError> {
    // Absence serializes as a JSON null body, not as a 404
    let task = state.repository.find_by_id(&id).await?;
    Ok(Json(task))
}

async fn list_tasks<R: TaskRepository>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state.repository.find_all().await?;
    Ok(Json(tasks))
}

async fn update_task<R: TaskRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
    Json(updates): Json<UpdateTask>,
) -> Result<Json<Option<Task>>, ApiError> {
    let task = state.repository.update_by_id(&id, updates).await?;
    Ok(Json(task))
}

async fn delete_task<R: TaskRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.repository.delete_by_id(&id).await?;
    Ok(Json(json!({
        "message": format!("Task with id {id} has been deleted")
    })))
}

async fn health<R: TaskRepository>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<Json<Value>, ApiError> {
    state.repository.health_check().await?;
    Ok(Json(json!({ "status": "ok" })))
}

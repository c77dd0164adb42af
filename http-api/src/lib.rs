//! HTTP API for the task service
//!
//! This crate wires an axum route table onto any [`task_core::TaskRepository`]
//! implementation. Each route performs exactly one repository call and
//! serializes the result as the JSON response body.
//!
//! # Routes
//!
//! - `POST /tasks` - create a task from the request body
//! - `GET /tasks/:id` - fetch one task, `null` when absent
//! - `GET /tasks` - list every task
//! - `PUT /tasks/:id` - merge fields into one task, `null` when absent
//! - `DELETE /tasks/:id` - delete one task, responds with a confirmation
//! - `GET /health` - repository connectivity probe

pub mod error;
pub mod request_logger;
pub mod server;

pub use error::ApiError;
pub use server::HttpServer;

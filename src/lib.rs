//! Taskboard: a small team task-tracking core.
//!
//! This crate provides the task lifecycle and persistence layer for a team
//! task tracker: creating task requests, assigning owner and priority,
//! moving tasks through a fixed status lifecycle, and summarising status
//! counts for a dashboard. Presentation layers (web, CLI, TUI) consume it
//! through the service layer and render forms and tables on top.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`task`]: Task creation, status lifecycle, and durable storage

pub mod task;

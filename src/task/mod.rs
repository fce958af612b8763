//! Task lifecycle management for Taskboard.
//!
//! This module implements the task store: creating task records from
//! validated request data, moving tasks through the `New`, `In Progress`,
//! and `Done` status lifecycle, listing tasks in storage order, and
//! computing dashboard status summaries. Status transitions are
//! unrestricted among the three values; every transition refreshes the
//! task's update timestamp. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

//! Adapter implementations of the task storage port.

pub mod memory;
pub mod sqlite;

//! Step definitions for task status lifecycle behaviour scenarios.


mod given;
mod then;
mod when;

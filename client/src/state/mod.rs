//! Per-component client state.
//!
//! DESIGN
//! ======
//! Each component owns one of these behind its own `RwSignal`. Nothing is
//! shared through context: the schedule board and the converter never read
//! each other's state.

pub mod converter;
pub mod schedule;

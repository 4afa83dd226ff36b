//! Page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component renders strings computed by the `zones` crate and owns its
//! own reactive state.

pub mod manual_converter;
pub mod schedule_board;

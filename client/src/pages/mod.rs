//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns layout and delegates rendering details to `components`.

pub mod home;

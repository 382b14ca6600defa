//! Core traits and types used throughout the library.

pub mod cancel;
pub mod ode;
pub mod status;
pub mod stop;
pub mod trajectory;

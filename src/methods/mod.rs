// Numerical methods

mod stages;

pub mod rk;
pub mod rkf;
pub mod settings;
pub mod tableau;

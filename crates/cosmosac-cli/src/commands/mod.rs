pub mod classify;
pub mod gamma;

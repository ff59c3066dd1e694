//! Application layer — ports and the configuration resolution service.

pub mod ports;
pub mod resolver;

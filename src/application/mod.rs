//! Application layer - Use cases
//! 
//! This layer contains:
//! - Services: The invoker and the scenario that wires it up
//! - Errors: Domain-specific errors

pub mod errors;
pub mod services;

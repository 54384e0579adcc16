//! Domain layer - Core pattern types with no external dependencies
//! 
//! This layer contains:
//! - Entities: Commands and the receiver they delegate to
//! - Traits: Abstractions for infrastructure (Output)

pub mod entities;
pub mod traits;

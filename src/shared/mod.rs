// Shared Kernel - Domain Driven Design
// Following Clean Architecture + Hexagonal Architecture patterns

pub mod application; // Shared application layer patterns
pub mod domain; // Shared domain concepts (events)
pub mod errors; // Shared error types
pub mod infrastructure; // Shared infrastructure (event publishing)
pub mod utils; // Shared utilities

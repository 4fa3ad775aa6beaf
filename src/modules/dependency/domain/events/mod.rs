/// Domain Events for the Dependency bounded context
mod dependency_events;

pub use dependency_events::*;

/// Domain Events for the Learning bounded context
///
/// These events represent state changes in the learning item aggregate that
/// other parts of the system may be interested in.
mod item_events;

pub use item_events::*;

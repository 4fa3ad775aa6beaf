pub mod logging_event_publisher;

pub use logging_event_publisher::LoggingEventPublisher;

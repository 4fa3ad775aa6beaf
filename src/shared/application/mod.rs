pub mod event_publisher;
pub mod use_case;

pub use event_publisher::EventPublisher;
pub use use_case::UseCase;

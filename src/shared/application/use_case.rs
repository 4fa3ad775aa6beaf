use crate::shared::errors::DomainResult;
/// Base trait for all use cases following CQRS pattern
///
/// This trait provides a standard interface for command handlers
/// following the Single Responsibility Principle.
use async_trait::async_trait;

/// Base trait for use cases (command handlers)
#[async_trait]
pub trait UseCase<TCommand, TResult> {
    /// Execute the use case with the given command
    async fn execute(&self, command: TCommand) -> DomainResult<TResult>;
}

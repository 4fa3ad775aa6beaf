pub mod dependency_repository;

pub use dependency_repository::DependencyRepository;

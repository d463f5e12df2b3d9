/// Use cases module containing application business logic orchestration
mod enumerate_dependencies;

pub use enumerate_dependencies::EnumerateDependenciesUseCase;

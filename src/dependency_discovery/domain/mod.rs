pub mod build_environment;
pub mod dependency;
pub mod pin;

pub use build_environment::BuildEnvironment;
pub use dependency::{Dependency, DependencyMetadata};
pub use pin::{PackageResolved, Pin, PinState};

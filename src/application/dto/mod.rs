/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod enumeration_response;
mod output_format;
mod session_config;

pub use enumeration_response::EnumerationResponse;
pub use output_format::OutputFormat;
pub use session_config::SessionConfig;

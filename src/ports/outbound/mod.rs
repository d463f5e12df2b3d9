/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces the source uses to interact with
/// external systems (file system, build tool, console, etc.).
pub mod build_tool;
pub mod formatter;
pub mod lockfile_reader;
pub mod output_presenter;
pub mod progress_reporter;

pub use build_tool::BuildTool;
pub use formatter::DependencyFormatter;
pub use lockfile_reader::LockfileReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;

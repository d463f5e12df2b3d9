/// Mock implementations for testing
mod mock_build_tool;
mod mock_lockfile_reader;
mod mock_progress_reporter;

pub use mock_build_tool::MockBuildTool;
pub use mock_lockfile_reader::MockLockfileReader;
pub use mock_progress_reporter::MockProgressReporter;

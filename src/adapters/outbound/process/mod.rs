/// Process adapters for external build tools
mod xcodebuild;

pub use xcodebuild::{XcodebuildTool, DEFAULT_BUILD_TOOL};

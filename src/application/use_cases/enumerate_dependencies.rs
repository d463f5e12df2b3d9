use crate::application::dto::EnumerationResponse;
use crate::ports::inbound::DependencySource;
use crate::ports::outbound::ProgressReporter;
use crate::shared::Result;
use std::path::Path;

/// EnumerateDependenciesUseCase - Drives one dependency source session
///
/// Probes the source, and when it applies, enumerates its dependencies
/// and warns about every dependency that could not be located.
///
/// # Type Parameters
/// * `S` - DependencySource implementation
/// * `PR` - ProgressReporter implementation
pub struct EnumerateDependenciesUseCase<S, PR> {
    source: S,
    progress_reporter: PR,
}

impl<S, PR> EnumerateDependenciesUseCase<S, PR>
where
    S: DependencySource,
    PR: ProgressReporter,
{
    /// Creates a new EnumerateDependenciesUseCase with injected dependencies
    pub fn new(source: S, progress_reporter: PR) -> Self {
        Self {
            source,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// # Arguments
    /// * `project_root` - Project the source was created for, echoed in the response
    ///
    /// # Returns
    /// An EnumerationResponse; inactive sources yield an empty, inactive response
    ///
    /// # Errors
    /// Returns the source's fatal error if the lockfile cannot be read or parsed
    pub fn execute(&self, project_root: &Path) -> Result<EnumerationResponse> {
        let source_type = self.source.source_type();

        self.progress_reporter.report_waiting(&format!(
            "🔍 Checking whether the {} source applies to: {}",
            source_type,
            project_root.display()
        ));

        if !self.source.is_active() {
            self.progress_reporter.report_completion(&format!(
                "⏭️  The {} source does not apply to this project",
                source_type
            ));
            return Ok(EnumerationResponse::new(
                source_type,
                project_root.to_path_buf(),
                false,
                Vec::new(),
            ));
        }

        self.progress_reporter
            .report("📖 Loading Package.resolved pins...");
        let dependencies = self.source.enumerate_dependencies()?;

        for dependency in dependencies.iter().filter(|d| d.has_errors()) {
            for error in dependency.errors() {
                self.progress_reporter
                    .report_error(&format!("⚠️  Warning: {}: {}", dependency.name(), error));
            }
        }

        let response =
            EnumerationResponse::new(source_type, project_root.to_path_buf(), true, dependencies);

        self.progress_reporter.report_completion(&format!(
            "✅ Detected {} dependency(ies), {} with errors",
            response.dependencies.len(),
            response.error_count()
        ));

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_discovery::domain::{Dependency, DependencyMetadata};
    use crate::shared::error::SourceError;
    use std::cell::RefCell;
    use std::path::PathBuf;

    struct FixedSource {
        active: bool,
        dependencies: Vec<Dependency>,
        fail: bool,
    }

    impl DependencySource for FixedSource {
        fn source_type(&self) -> &'static str {
            "swift"
        }

        fn is_active(&self) -> bool {
            self.active
        }

        fn enumerate_dependencies(&self) -> Result<Vec<Dependency>> {
            if self.fail {
                return Err(SourceError::SourceConfiguration {
                    path: PathBuf::from("Package.resolved"),
                    details: "invalid JSON".to_string(),
                }
                .into());
            }
            Ok(self.dependencies.clone())
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        messages: RefCell<Vec<String>>,
    }

    impl ProgressReporter for RecordingReporter {
        fn report(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }

        fn report_waiting(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }

        fn report_error(&self, message: &str) {
            self.messages.borrow_mut().push(format!("Error: {}", message));
        }

        fn report_completion(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    fn dependency(name: &str, errors: Vec<String>) -> Dependency {
        Dependency::new(
            name.to_string(),
            None,
            None,
            errors,
            DependencyMetadata::new("swift", None),
        )
    }

    #[test]
    fn test_inactive_source() {
        let source = FixedSource {
            active: false,
            dependencies: vec![dependency("a", vec![])],
            fail: false,
        };
        let use_case = EnumerateDependenciesUseCase::new(source, RecordingReporter::default());

        let response = use_case.execute(Path::new("/proj")).unwrap();
        assert!(!response.active);
        assert!(response.dependencies.is_empty());
        assert_eq!(response.source_type, "swift");
    }

    #[test]
    fn test_active_source_reports_dependency_errors() {
        let source = FixedSource {
            active: true,
            dependencies: vec![
                dependency("a", vec![]),
                dependency("b", vec!["Unable to determine project path from b".to_string()]),
            ],
            fail: false,
        };
        let use_case = EnumerateDependenciesUseCase::new(source, RecordingReporter::default());

        let response = use_case.execute(Path::new("/proj")).unwrap();
        assert!(response.active);
        assert_eq!(response.dependencies.len(), 2);
        assert_eq!(response.error_count(), 1);

        let messages = use_case.progress_reporter.messages.borrow();
        assert!(messages
            .iter()
            .any(|m| m.starts_with("Error:") && m.contains("b: Unable to determine project path")));
        assert!(messages.iter().any(|m| m.contains("Detected 2 dependency(ies), 1 with errors")));
    }

    #[test]
    fn test_fatal_source_error_propagates() {
        let source = FixedSource {
            active: true,
            dependencies: vec![],
            fail: true,
        };
        let use_case = EnumerateDependenciesUseCase::new(source, RecordingReporter::default());

        let err = use_case.execute(Path::new("/proj")).unwrap_err();
        assert!(err.to_string().contains("Unable to read the Package.resolved file"));
    }
}

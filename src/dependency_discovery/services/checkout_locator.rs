use crate::dependency_discovery::domain::{BuildEnvironment, Dependency, DependencyMetadata, Pin};
use std::path::{Component, Path, PathBuf};
use url::Url;

const GIT_SUFFIX: &str = ".git";

/// CheckoutLocator - Maps pins to dependencies under an Xcode build directory
///
/// The checkout directory is derived from the last path segment of the pin's
/// location only. Two packages hosted in repositories with the same name map
/// to the same checkout path; SwiftPM itself disambiguates such clones, but
/// the directory name cannot be recovered from `Package.resolved`.
#[derive(Debug, Clone)]
pub struct CheckoutLocator {
    source_type: &'static str,
    checkouts_dir: PathBuf,
}

impl CheckoutLocator {
    pub fn new(source_type: &'static str, build_environment: &BuildEnvironment) -> Self {
        Self {
            source_type,
            checkouts_dir: build_environment.checkouts_dir(),
        }
    }

    /// Builds the dependency for a single pin
    ///
    /// A location without a derivable checkout path still yields a
    /// dependency, carrying one error that names the location.
    pub fn locate(&self, pin: &Pin) -> Dependency {
        let path = self.checkout_path(&pin.location);
        let errors = match path {
            Some(_) => Vec::new(),
            None => vec![format!(
                "Unable to determine project path from {}",
                pin.location
            )],
        };

        Dependency::new(
            pin.identity.clone(),
            pin.version().map(str::to_string),
            path,
            errors,
            DependencyMetadata::new(self.source_type, homepage_for_location(&pin.location)),
        )
    }

    /// Local checkout directory for a package location, if one can be derived
    pub fn checkout_path(&self, location: &str) -> Option<PathBuf> {
        let url = Url::parse(location).ok()?;
        let segment = last_path_segment(&url)?;
        Some(self.checkouts_dir.join(segment))
    }
}

/// Homepage for a package location
///
/// Only `http` and `https` locations have a homepage; the trailing `.git`
/// is dropped. Unparseable locations have none.
pub fn homepage_for_location(location: &str) -> Option<String> {
    let url = Url::parse(location).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    Some(
        location
            .strip_suffix(GIT_SUFFIX)
            .unwrap_or(location)
            .to_string(),
    )
}

fn last_path_segment(url: &Url) -> Option<String> {
    let raw = url
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .last()?;
    let decoded = urlencoding::decode(raw)
        .map(|segment| segment.into_owned())
        .unwrap_or_else(|_| raw.to_string());

    let trimmed = decoded.trim_end();
    let name = trimmed.strip_suffix(GIT_SUFFIX).unwrap_or(trimmed).trim_end();
    if !is_single_directory_name(name) {
        return None;
    }
    Some(name.to_string())
}

/// A decoded segment must stay one directory below the checkouts directory
fn is_single_directory_name(name: &str) -> bool {
    if name.is_empty() || name.contains(['/', '\\', '\0']) {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

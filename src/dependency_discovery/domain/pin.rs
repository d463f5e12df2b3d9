use crate::shared::Result;
use serde::Deserialize;

/// Resolved state of a pin
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PinState {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub revision: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
}

/// One locked package in `Package.resolved`
///
/// Both lockfile layouts are normalized into this shape: version 2/3 pins
/// are read as-is, version 1 pins map `package` to `identity` and
/// `repositoryURL` to `location`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Pin {
    pub identity: String,
    pub location: String,
    #[serde(default)]
    pub state: PinState,
}

impl Pin {
    pub fn new(identity: impl Into<String>, location: impl Into<String>, state: PinState) -> Self {
        Self {
            identity: identity.into(),
            location: location.into(),
            state,
        }
    }

    pub fn version(&self) -> Option<&str> {
        self.state.version.as_deref()
    }
}

#[derive(Debug, Deserialize)]
struct LegacyPin {
    package: String,
    #[serde(rename = "repositoryURL")]
    repository_url: String,
    #[serde(default)]
    state: PinState,
}

#[derive(Debug, Deserialize)]
struct LegacyObject {
    pins: Vec<LegacyPin>,
}

/// Parsed `Package.resolved` document
#[derive(Debug, Deserialize)]
pub struct PackageResolved {
    #[serde(default)]
    pub version: Option<u32>,
    #[serde(default)]
    pins: Option<Vec<Pin>>,
    #[serde(default)]
    object: Option<LegacyObject>,
}

impl PackageResolved {
    /// Parses the JSON content of a `Package.resolved` file
    ///
    /// # Errors
    /// Returns an error if the content is not valid JSON, if a pin is missing
    /// a required field, or if the document has no pin collection at all.
    pub fn parse(content: &str) -> Result<Self> {
        let document: PackageResolved = serde_json::from_str(content)?;
        if document.pins.is_none() && document.object.is_none() {
            anyhow::bail!("no \"pins\" collection found in document");
        }
        Ok(document)
    }

    /// Consumes the document, returning its pins in file order
    pub fn into_pins(self) -> Vec<Pin> {
        if let Some(pins) = self.pins {
            return pins;
        }

        self.object
            .map(|object| {
                object
                    .pins
                    .into_iter()
                    .map(|pin| Pin::new(pin.package, pin.repository_url, pin.state))
                    .collect()
            })
            .unwrap_or_default()
    }
}

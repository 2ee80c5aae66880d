//! File system operations for network and scenario files.
use super::{NetworkFile, Scenario};

use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

/// True if the path has a `.yaml` or `.yml` extension.
fn is_yaml<P: AsRef<Path>>(path: P) -> bool {
    matches!(
        path.as_ref().extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Resolve `relative` against the directory containing `path`.
pub fn sibling_path<P: AsRef<Path>, Q: AsRef<Path>>(path: P, relative: Q) -> PathBuf {
    let mut out = PathBuf::new();
    out.push(path);
    out.pop();
    out.push(relative);
    out
}

impl NetworkFile {
    /// Read a network description. YAML is used for `.yaml`/`.yml` files, JSON otherwise.
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> std::io::Result<NetworkFile> {
        let content = std::fs::read_to_string(&path)?;
        if is_yaml(&path) {
            match serde_yaml::from_str(&content) {
                Ok(network) => Ok(network),
                Err(error) => Err(Error::new(
                    ErrorKind::Other,
                    format!("Failed to parse network YAML: {error}"),
                )),
            }
        } else {
            Ok(serde_json::from_str(&content)?)
        }
    }
}

/// Given a `serde_json::Value`, if it's a string, replace it with the network file it points to,
/// relative to the given `path`.
pub fn read_network_value_from_file<P: AsRef<Path>>(
    value: &mut serde_json::Value,
    path: P,
) -> std::io::Result<bool> {
    if let serde_json::Value::String(s) = value {
        let network_path = sibling_path(path, s.as_str());
        let network = match NetworkFile::read_from_file(&network_path) {
            Ok(network) => network,
            Err(error) => {
                return Err(Error::new(
                    error.kind(),
                    format!(
                        "Failed to read the network ({}): {}",
                        network_path.display(),
                        error
                    ),
                ));
            }
        };
        *value = serde_json::to_value(network)?;
        Ok(true)
    } else {
        Ok(false)
    }
}

impl Scenario {
    /// Read a scenario JSON file. The `network` field may be a path relative to the scenario.
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Scenario> {
        let content = std::fs::read_to_string(&path)?;
        let mut value: serde_json::Value = serde_json::from_str(&content)?;
        if let Some(network) = value.get_mut("network") {
            read_network_value_from_file(network, &path)?;
        }
        let scenario: Scenario = serde_json::from_value(value)?;
        Ok(scenario)
    }
}

// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Loads the provisioning configuration.
//!
//! The configuration is a JSON array of topics, each listing the
//! subscriptions bound to it:
//!
//! ```json
//! [ { "name": "orders", "subscriptions": [ { "name": "orders-worker" } ] } ]
//! ```
//!
//! Missing fields decode as empty values. The loader does not validate names,
//! that is left to the service.

use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

/// Errors returned while loading the configuration file.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    /// The file could not be read.
    #[error("could not read configuration file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file contents are not a JSON array of topics.
    #[error("could not decode configuration file {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A topic to provision, with the subscriptions bound to it.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Topic {
    /// The topic id, relative to the project.
    pub name: String,
    /// The subscriptions to create, in order.
    #[serde(deserialize_with = "null_as_empty")]
    pub subscriptions: Vec<Subscription>,
}

impl Topic {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            subscriptions: Vec::new(),
        }
    }

    /// Adds a subscription bound to this topic.
    pub fn with_subscription<T: Into<String>>(mut self, name: T) -> Self {
        self.subscriptions.push(Subscription::new(name));
        self
    }
}

/// A subscription to provision.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Subscription {
    /// The subscription id, relative to the project.
    pub name: String,
}

impl Subscription {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self { name: name.into() }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Subscription>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Subscription>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads and decodes the configuration file at `path`.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Topic>, ConfigError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let topics = decode(&contents).map_err(|source| ConfigError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), topics = topics.len(), "loaded configuration");
    Ok(topics)
}

/// Decodes an in-memory configuration document.
pub fn parse(contents: &str) -> Result<Vec<Topic>, ConfigError> {
    decode(contents).map_err(|source| ConfigError::Decode {
        path: PathBuf::new(),
        source,
    })
}

fn decode(contents: &str) -> serde_json::Result<Vec<Topic>> {
    serde_json::from_str(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    #[test]
    fn parse_full() -> TestResult {
        let got = parse(
            r#"[
                {"name": "orders", "subscriptions": [{"name": "orders-worker"}, {"name": "orders-audit"}]},
                {"name": "invoices", "subscriptions": []}
            ]"#,
        )?;
        let want = vec![
            Topic::new("orders")
                .with_subscription("orders-worker")
                .with_subscription("orders-audit"),
            Topic::new("invoices"),
        ];
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn parse_missing_fields() -> TestResult {
        let got = parse(r#"[{}, {"subscriptions": [{}]}, {"name": "t", "subscriptions": null}]"#)?;
        let want = vec![
            Topic::default(),
            Topic::default().with_subscription(""),
            Topic::new("t"),
        ];
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn parse_ignores_unknown_fields() -> TestResult {
        let got = parse(r#"[{"name": "t", "labels": {"a": "b"}, "subscriptions": [{"name": "s", "filter": "x"}]}]"#)?;
        assert_eq!(got, vec![Topic::new("t").with_subscription("s")]);
        Ok(())
    }

    #[test]
    fn parse_empty() -> TestResult {
        assert_eq!(parse("[]")?, Vec::<Topic>::new());
        Ok(())
    }

    #[test_case("" ; "empty document")]
    #[test_case("[{\"name\": \"t\"" ; "truncated")]
    #[test_case("{\"name\": \"t\"}" ; "object instead of array")]
    #[test_case("[{\"name\": 42}]" ; "name is not a string")]
    #[test_case("[{\"subscriptions\": {\"name\": \"s\"}}]" ; "subscriptions is not an array")]
    #[test_case("[\"t\"]" ; "topic is not an object")]
    fn parse_malformed(input: &str) {
        let err = parse(input).unwrap_err();
        assert!(matches!(err, ConfigError::Decode { .. }), "{err:?}");
    }

    #[test]
    fn load_file() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(br#"[{"name":"orders","subscriptions":[{"name":"orders-worker"}]}]"#)?;
        let got = load(file.path())?;
        assert_eq!(got, vec![Topic::new("orders").with_subscription("orders-worker")]);
        Ok(())
    }

    #[test]
    fn load_missing_file() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.json");
        let err = load(&path).unwrap_err();
        match err {
            ConfigError::Read { path: got, source } => {
                assert_eq!(got, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            e => panic!("unexpected error {e:?}"),
        }
        Ok(())
    }

    #[test]
    fn load_malformed_file() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"not json")?;
        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Decode { ref path, .. } if path == file.path()), "{err:?}");
        assert!(err.to_string().contains("could not decode"), "{err}");
        Ok(())
    }
}

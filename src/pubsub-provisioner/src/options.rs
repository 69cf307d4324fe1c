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

//! The run configuration.

use crate::{Error, Result};
use std::path::PathBuf;
use std::time::Duration;

/// The configuration file used when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// The acknowledgment deadline for new subscriptions.
pub const DEFAULT_ACK_DEADLINE: Duration = Duration::from_secs(20);

/// The environment variable holding the target project id.
pub const PROJECT_ID_ENV_VAR: &str = "PUBSUB_PROJECT_ID";

/// The environment variable pointing the clients at a Pub/Sub emulator.
pub const EMULATOR_HOST_ENV_VAR: &str = "PUBSUB_EMULATOR_HOST";

/// Everything a provisioning run needs, resolved once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub(crate) config_path: PathBuf,
    pub(crate) project_id: String,
    pub(crate) ack_deadline: Duration,
    pub(crate) emulator_host: Option<String>,
}

impl RunConfig {
    /// Creates a configuration for `project_id` with the default settings.
    ///
    /// Fails with [Error::MissingProjectId] if the project id is empty.
    pub fn new<T: Into<String>>(project_id: T) -> Result<Self> {
        let project_id = project_id.into();
        if project_id.is_empty() {
            return Err(Error::MissingProjectId);
        }
        Ok(Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            project_id,
            ack_deadline: DEFAULT_ACK_DEADLINE,
            emulator_host: None,
        })
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, v: P) -> Self {
        self.config_path = v.into();
        self
    }

    pub fn with_ack_deadline(mut self, v: Duration) -> Self {
        self.ack_deadline = v;
        self
    }

    /// Targets a Pub/Sub emulator at `host` (e.g. `localhost:8085`).
    pub fn with_emulator_host<T: Into<String>>(mut self, v: T) -> Self {
        self.emulator_host = Some(v.into());
        self
    }

    pub fn config_path(&self) -> &std::path::Path {
        &self.config_path
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn ack_deadline(&self) -> Duration {
        self.ack_deadline
    }

    pub fn emulator_host(&self) -> Option<&str> {
        self.emulator_host.as_deref()
    }

    /// The endpoint for the admin clients, if the default is overridden.
    pub(crate) fn endpoint(&self) -> Option<String> {
        self.emulator_host.as_ref().map(|host| {
            if host.starts_with("http://") || host.starts_with("https://") {
                host.clone()
            } else {
                format!("http://{host}")
            }
        })
    }
}

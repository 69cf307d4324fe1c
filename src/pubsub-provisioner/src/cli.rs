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

//! Command-line arguments.

use crate::Result;
use crate::options::{
    DEFAULT_ACK_DEADLINE, DEFAULT_CONFIG_PATH, EMULATOR_HOST_ENV_VAR, PROJECT_ID_ENV_VAR,
    RunConfig,
};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Creates the Pub/Sub topics and subscriptions listed in a JSON file.
///
/// Resources that already exist are left untouched.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The JSON file listing the topics and their subscriptions.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// The project that owns the topics and subscriptions.
    #[arg(long, value_name = "ID", env = PROJECT_ID_ENV_VAR)]
    pub project: Option<String>,

    /// The acknowledgment deadline for new subscriptions.
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_ACK_DEADLINE.as_secs())]
    pub ack_deadline_seconds: u64,

    /// Use the Pub/Sub emulator at this address, e.g. `localhost:8085`.
    #[arg(long, value_name = "HOST", env = EMULATOR_HOST_ENV_VAR)]
    pub emulator_host: Option<String>,
}

impl Cli {
    /// Validates the arguments and converts them into a [RunConfig].
    pub fn into_run_config(self) -> Result<RunConfig> {
        let config = RunConfig::new(self.project.unwrap_or_default())?
            .with_config_path(self.config)
            .with_ack_deadline(Duration::from_secs(self.ack_deadline_seconds));
        let config = match self.emulator_host.filter(|h| !h.is_empty()) {
            Some(host) => config.with_emulator_host(host),
            None => config,
        };
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use scoped_env::ScopedEnv;

    // These tests must run serially because they manipulate the environment.
    #[test]
    #[serial_test::serial]
    fn defaults_from_env() -> anyhow::Result<()> {
        let _p = ScopedEnv::remove(PROJECT_ID_ENV_VAR);
        let _h = ScopedEnv::remove(EMULATOR_HOST_ENV_VAR);
        let _e = ScopedEnv::set(PROJECT_ID_ENV_VAR, "env-project");
        let config = Cli::try_parse_from(["pubsub-provisioner"])?.into_run_config()?;
        assert_eq!(config.project_id(), "env-project");
        assert_eq!(config.config_path(), std::path::Path::new("config.json"));
        assert_eq!(config.ack_deadline(), Duration::from_secs(20));
        assert_eq!(config.emulator_host(), None);
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn flags_override_env() -> anyhow::Result<()> {
        let _p = ScopedEnv::remove(PROJECT_ID_ENV_VAR);
        let _h = ScopedEnv::remove(EMULATOR_HOST_ENV_VAR);
        let _e = ScopedEnv::set(PROJECT_ID_ENV_VAR, "env-project");
        let cli = Cli::try_parse_from([
            "pubsub-provisioner",
            "--project",
            "flag-project",
            "--config",
            "topics.json",
            "--ack-deadline-seconds",
            "45",
            "--emulator-host",
            "localhost:8085",
        ])?;
        let config = cli.into_run_config()?;
        assert_eq!(config.project_id(), "flag-project");
        assert_eq!(config.config_path(), std::path::Path::new("topics.json"));
        assert_eq!(config.ack_deadline(), Duration::from_secs(45));
        assert_eq!(config.emulator_host(), Some("localhost:8085"));
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn emulator_from_env() -> anyhow::Result<()> {
        let _p = ScopedEnv::remove(PROJECT_ID_ENV_VAR);
        let _h = ScopedEnv::remove(EMULATOR_HOST_ENV_VAR);
        let _ep = ScopedEnv::set(PROJECT_ID_ENV_VAR, "p");
        let _eh = ScopedEnv::set(EMULATOR_HOST_ENV_VAR, "localhost:7001");
        let config = Cli::try_parse_from(["pubsub-provisioner"])?.into_run_config()?;
        assert_eq!(config.emulator_host(), Some("localhost:7001"));
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn missing_project() -> anyhow::Result<()> {
        let _p = ScopedEnv::remove(PROJECT_ID_ENV_VAR);
        let _h = ScopedEnv::remove(EMULATOR_HOST_ENV_VAR);
        let err = Cli::try_parse_from(["pubsub-provisioner"])?
            .into_run_config()
            .unwrap_err();
        assert!(matches!(err, Error::MissingProjectId), "{err:?}");
        assert!(err.to_string().contains(PROJECT_ID_ENV_VAR), "{err}");
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn empty_project() -> anyhow::Result<()> {
        let _p = ScopedEnv::remove(PROJECT_ID_ENV_VAR);
        let _h = ScopedEnv::remove(EMULATOR_HOST_ENV_VAR);
        let _e = ScopedEnv::set(PROJECT_ID_ENV_VAR, "");
        let err = Cli::try_parse_from(["pubsub-provisioner"])?
            .into_run_config()
            .unwrap_err();
        assert!(matches!(err, Error::MissingProjectId), "{err:?}");
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn bad_deadline() {
        let _p = ScopedEnv::remove(PROJECT_ID_ENV_VAR);
        let _h = ScopedEnv::remove(EMULATOR_HOST_ENV_VAR);
        let err = Cli::try_parse_from(["pubsub-provisioner", "--ack-deadline-seconds", "soon"]);
        assert!(err.is_err(), "{err:?}");
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

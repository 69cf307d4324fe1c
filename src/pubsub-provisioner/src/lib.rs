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

//! Provision Cloud Pub/Sub topics and subscriptions from a JSON file.
//!
//! The configuration lists topics and, for each topic, the subscriptions
//! bound to it. The provisioner creates each resource in order and accepts
//! resources that already exist, so running it twice is harmless.
//!
//! ```no_run
//! # use pubsub_provisioner::{config, gcp::GcpAdmin, options::RunConfig, provisioner::Provisioner};
//! # async fn sample() -> anyhow::Result<()> {
//! let run = RunConfig::new("my-project")?.with_config_path("config.json");
//! let topics = config::load(run.config_path())?;
//! let admin = GcpAdmin::connect(&run).await?;
//! let report = Provisioner::from_config(&admin, &run).run(&topics).await?;
//! println!("created {} resources", report.created());
//! # Ok(()) }
//! ```

pub mod admin;
pub mod cli;
pub mod config;
mod error;
pub mod gcp;
pub mod logging;
pub mod options;
pub mod provisioner;

pub use error::{Error, Result};

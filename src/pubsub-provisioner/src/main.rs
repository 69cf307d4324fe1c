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

use anyhow::Result;
use clap::Parser;
use pubsub_provisioner::cli::Cli;
use pubsub_provisioner::gcp::GcpAdmin;
use pubsub_provisioner::logging;
use pubsub_provisioner::provisioner::execute;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logging::init()?;
    let run = Cli::parse().into_run_config()?;
    execute(&run, || GcpAdmin::connect(&run)).await?;
    Ok(())
}

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

use crate::admin::AdminError;
use crate::config::ConfigError;
use google_cloud_gax::client_builder;

/// The errors that end a provisioning run.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The configuration file could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The project id was not provided.
    #[error(
        "the project id is not set, use --project or the {} environment variable",
        crate::options::PROJECT_ID_ENV_VAR
    )]
    MissingProjectId,

    /// The admin clients could not be initialized.
    #[error("could not create the Pub/Sub admin clients: {0}")]
    Connect(#[from] client_builder::Error),

    /// Creating a topic failed with an error other than "already exists".
    #[error("could not create topic {topic}: {source}")]
    CreateTopic {
        topic: String,
        #[source]
        source: AdminError,
    },

    /// Creating a subscription failed with an error other than "already exists".
    #[error("could not create subscription {subscription} for {topic}: {source}")]
    CreateSubscription {
        subscription: String,
        topic: String,
        #[source]
        source: AdminError,
    },
}

/// A `Result` alias where the `Err` case is [Error].
pub type Result<T> = std::result::Result<T, Error>;

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

//! The administrative operations the provisioner needs from Pub/Sub.
//!
//! [Admin] is the seam between the provisioning workflow and the service.
//! The production implementation is [GcpAdmin][crate::gcp::GcpAdmin], tests
//! use mocks or in-memory fakes.

use google_cloud_gax as gax;
use gax::error::rpc::Code;
use std::time::Duration;

/// The kind of resource an operation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    Topic,
    Subscription,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Topic => write!(f, "topic"),
            Self::Subscription => write!(f, "subscription"),
        }
    }
}

/// Errors returned by [Admin] operations.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum AdminError {
    /// The resource name is already registered in the project.
    #[error("{kind} {name} already exists")]
    AlreadyExists { kind: ResourceKind, name: String },

    /// Any other failure reported by the service or the transport.
    #[error(transparent)]
    Service(#[from] gax::error::Error),
}

impl AdminError {
    /// Classifies an error returned by a create RPC for `name`.
    ///
    /// Only the `ALREADY_EXISTS` status code maps to
    /// [AdminError::AlreadyExists]; the error message is never inspected.
    pub fn classify<T: Into<String>>(kind: ResourceKind, name: T, error: gax::error::Error) -> Self {
        if error
            .status()
            .is_some_and(|status| status.code == Code::AlreadyExists)
        {
            return Self::AlreadyExists {
                kind,
                name: name.into(),
            };
        }
        Self::Service(error)
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }
}

/// Returns the fully qualified name for a topic.
pub fn topic_name(project_id: &str, topic_id: &str) -> String {
    format!("projects/{project_id}/topics/{topic_id}")
}

/// Returns the fully qualified name for a subscription.
pub fn subscription_name(project_id: &str, subscription_id: &str) -> String {
    format!("projects/{project_id}/subscriptions/{subscription_id}")
}

/// Identifies a topic on the service.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TopicHandle {
    name: String,
}

impl TopicHandle {
    /// Creates a handle from a fully qualified topic name.
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self { name: name.into() }
    }

    /// The fully qualified name, `projects/{project}/topics/{id}`.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for TopicHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// A subscription as reported by the service after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubscriptionHandle {
    /// The fully qualified name, `projects/{project}/subscriptions/{id}`.
    pub name: String,
    /// The fully qualified name of the bound topic.
    pub topic: String,
    pub ack_deadline: Duration,
}

/// The settings for a new subscription.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubscriptionConfig {
    /// The topic the subscription is bound to.
    pub topic: TopicHandle,
    /// How long the service waits for an acknowledgment before redelivery.
    pub ack_deadline: Duration,
}

impl SubscriptionConfig {
    /// The deadline in whole seconds, as the service expects it.
    pub fn ack_deadline_seconds(&self) -> i32 {
        i32::try_from(self.ack_deadline.as_secs()).unwrap_or(i32::MAX)
    }
}

/// The administrative client used to provision resources.
#[async_trait::async_trait]
pub trait Admin: std::fmt::Debug + Send + Sync {
    /// Creates the topic `topic_id` in the client's project.
    async fn create_topic(&self, topic_id: &str) -> Result<TopicHandle, AdminError>;

    /// Creates the subscription `subscription_id`, bound to `config.topic`.
    async fn create_subscription(
        &self,
        subscription_id: &str,
        config: SubscriptionConfig,
    ) -> Result<SubscriptionHandle, AdminError>;

    /// Returns a handle for an existing topic, without contacting the service.
    fn resolve_topic(&self, topic_id: &str) -> TopicHandle;

    /// Releases the client.
    async fn close(&self) -> Result<(), AdminError>;
}

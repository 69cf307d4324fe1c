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

//! [Admin] implemented with the Cloud Pub/Sub admin clients.

use crate::admin::{
    Admin, AdminError, ResourceKind, SubscriptionConfig, SubscriptionHandle, TopicHandle,
    subscription_name, topic_name,
};
use crate::options::RunConfig;
use google_cloud_auth::credentials::anonymous;
use google_cloud_pubsub::client::{SubscriptionAdmin, TopicAdmin};
use std::time::Duration;

/// Provisions resources in a single Google Cloud project.
#[derive(Clone, Debug)]
pub struct GcpAdmin {
    project_id: String,
    topics: TopicAdmin,
    subscriptions: SubscriptionAdmin,
}

impl GcpAdmin {
    /// Builds the admin clients for `config`.
    ///
    /// If the configuration names an emulator the clients use it, with
    /// anonymous credentials. Otherwise the clients use the default endpoint
    /// and [Application Default Credentials].
    ///
    /// [application default credentials]: https://cloud.google.com/docs/authentication#adc
    pub async fn connect(config: &RunConfig) -> crate::Result<Self> {
        let mut topics = TopicAdmin::builder();
        let mut subscriptions = SubscriptionAdmin::builder();
        if let Some(endpoint) = config.endpoint() {
            tracing::info!(%endpoint, "using the Pub/Sub emulator");
            topics = topics
                .with_endpoint(endpoint.clone())
                .with_credentials(anonymous::Builder::new().build());
            subscriptions = subscriptions
                .with_endpoint(endpoint)
                .with_credentials(anonymous::Builder::new().build());
        }
        let topics = topics.build().await?;
        let subscriptions = subscriptions.build().await?;
        Ok(Self::from_clients(config.project_id(), topics, subscriptions))
    }

    /// Wraps existing clients.
    pub fn from_clients<T: Into<String>>(
        project_id: T,
        topics: TopicAdmin,
        subscriptions: SubscriptionAdmin,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            topics,
            subscriptions,
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }
}

#[async_trait::async_trait]
impl Admin for GcpAdmin {
    async fn create_topic(&self, topic_id: &str) -> Result<TopicHandle, AdminError> {
        let topic = self
            .topics
            .create_topic()
            .set_name(topic_name(&self.project_id, topic_id))
            .send()
            .await
            .map_err(|e| AdminError::classify(ResourceKind::Topic, topic_id, e))?;
        Ok(TopicHandle::new(topic.name))
    }

    async fn create_subscription(
        &self,
        subscription_id: &str,
        config: SubscriptionConfig,
    ) -> Result<SubscriptionHandle, AdminError> {
        let subscription = self
            .subscriptions
            .create_subscription()
            .set_name(subscription_name(&self.project_id, subscription_id))
            .set_topic(config.topic.name())
            .set_ack_deadline_seconds(config.ack_deadline_seconds())
            .send()
            .await
            .map_err(|e| AdminError::classify(ResourceKind::Subscription, subscription_id, e))?;
        let seconds = u64::try_from(subscription.ack_deadline_seconds).unwrap_or_default();
        Ok(SubscriptionHandle {
            name: subscription.name,
            topic: subscription.topic,
            ack_deadline: Duration::from_secs(seconds),
        })
    }

    fn resolve_topic(&self, topic_id: &str) -> TopicHandle {
        TopicHandle::new(topic_name(&self.project_id, topic_id))
    }

    async fn close(&self) -> Result<(), AdminError> {
        // The clients release their connections when dropped.
        tracing::debug!(project = %self.project_id, "closing Pub/Sub admin clients");
        Ok(())
    }
}

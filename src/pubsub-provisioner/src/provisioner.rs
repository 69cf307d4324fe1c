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

//! Creates the configured topics and subscriptions.
//!
//! Each resource goes through a single create attempt. A resource that
//! already exists is accepted as-is, its settings are not compared with the
//! configuration. Any other failure stops the run; resources created before
//! the failure are left in place.

use crate::admin::{Admin, AdminError, ResourceKind, SubscriptionConfig, TopicHandle};
use crate::config::{self, Topic};
use crate::options::RunConfig;
use crate::{Error, Result};
use std::future::Future;
use std::time::Duration;

/// The result of provisioning a single resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Created,
    AlreadyExists,
}

/// A resource visited by a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Provisioned {
    pub kind: ResourceKind,
    /// The id from the configuration file.
    pub name: String,
    pub outcome: Outcome,
}

/// Summarizes a successful run, in processing order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    resources: Vec<Provisioned>,
}

impl Report {
    pub fn resources(&self) -> &[Provisioned] {
        &self.resources
    }

    /// The number of resources created by the run.
    pub fn created(&self) -> usize {
        self.count(Outcome::Created)
    }

    /// The number of resources that existed before the run.
    pub fn already_present(&self) -> usize {
        self.count(Outcome::AlreadyExists)
    }

    fn count(&self, outcome: Outcome) -> usize {
        self.resources
            .iter()
            .filter(|r| r.outcome == outcome)
            .count()
    }

    fn push(&mut self, kind: ResourceKind, name: &str, outcome: Outcome) {
        self.resources.push(Provisioned {
            kind,
            name: name.to_string(),
            outcome,
        });
    }
}

/// Runs a complete provisioning pass for `run`.
///
/// The configuration file is loaded before `connect` is called, so a missing
/// or malformed file never reaches the service. Once connected, the client is
/// closed whether or not provisioning succeeds, and the provisioning result is
/// returned.
pub async fn execute<A, C, F>(run: &RunConfig, connect: C) -> Result<Report>
where
    A: Admin,
    C: FnOnce() -> F,
    F: Future<Output = Result<A>>,
{
    let topics = config::load(run.config_path())?;
    let admin = connect().await?;
    let result = Provisioner::from_config(&admin, run).run(&topics).await;
    match admin.close().await {
        Ok(()) => tracing::info!("done with the Pub/Sub admin clients, connections close on drop"),
        Err(e) => tracing::warn!("error closing the Pub/Sub admin clients: {e}"),
    }
    result
}

/// Drives an [Admin] through the configured topics, one call at a time.
#[derive(Debug)]
pub struct Provisioner<'a, A: ?Sized> {
    admin: &'a A,
    ack_deadline: Duration,
}

impl<'a, A> Provisioner<'a, A>
where
    A: Admin + ?Sized,
{
    pub fn new(admin: &'a A, ack_deadline: Duration) -> Self {
        Self {
            admin,
            ack_deadline,
        }
    }

    pub fn from_config(admin: &'a A, config: &RunConfig) -> Self {
        Self::new(admin, config.ack_deadline())
    }

    /// Provisions every topic, and its subscriptions, in order.
    pub async fn run(&self, topics: &[Topic]) -> Result<Report> {
        let mut report = Report::default();
        for topic in topics {
            self.provision_topic(topic, &mut report).await?;
        }
        tracing::info!(
            created = report.created(),
            already_present = report.already_present(),
            "provisioning complete"
        );
        Ok(report)
    }

    /// Provisions one topic and then each of its subscriptions.
    pub async fn provision_topic(&self, topic: &Topic, report: &mut Report) -> Result<()> {
        let (handle, outcome) = self.ensure_topic(&topic.name).await?;
        report.push(ResourceKind::Topic, &topic.name, outcome);
        for subscription in &topic.subscriptions {
            let outcome = self.ensure_subscription(&subscription.name, &handle).await?;
            report.push(ResourceKind::Subscription, &subscription.name, outcome);
        }
        Ok(())
    }

    /// Creates `topic_id`, or resolves it if it already exists.
    pub async fn ensure_topic(&self, topic_id: &str) -> Result<(TopicHandle, Outcome)> {
        match self.admin.create_topic(topic_id).await {
            Ok(handle) => {
                tracing::info!(topic = %handle, "topic created");
                Ok((handle, Outcome::Created))
            }
            Err(AdminError::AlreadyExists { .. }) => {
                tracing::info!(topic = topic_id, "topic already exists");
                Ok((self.admin.resolve_topic(topic_id), Outcome::AlreadyExists))
            }
            Err(source) => Err(Error::CreateTopic {
                topic: topic_id.to_string(),
                source,
            }),
        }
    }

    /// Creates `subscription_id` bound to `topic`, accepting an existing one.
    pub async fn ensure_subscription(
        &self,
        subscription_id: &str,
        topic: &TopicHandle,
    ) -> Result<Outcome> {
        let config = SubscriptionConfig {
            topic: topic.clone(),
            ack_deadline: self.ack_deadline,
        };
        match self.admin.create_subscription(subscription_id, config).await {
            Ok(subscription) => {
                tracing::info!(
                    subscription = %subscription.name,
                    topic = %subscription.topic,
                    ack_deadline_seconds = subscription.ack_deadline.as_secs(),
                    "subscription created"
                );
                Ok(Outcome::Created)
            }
            Err(AdminError::AlreadyExists { .. }) => {
                tracing::info!(
                    subscription = subscription_id,
                    topic = %topic,
                    "subscription already exists"
                );
                Ok(Outcome::AlreadyExists)
            }
            Err(source) => Err(Error::CreateSubscription {
                subscription: subscription_id.to_string(),
                topic: topic.to_string(),
                source,
            }),
        }
    }
}

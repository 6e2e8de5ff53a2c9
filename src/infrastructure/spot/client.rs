// Copyright 2025 Spotctl Team.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::credentials::Credentials;
use crate::domain::group::{Capacity, GroupDetail, GroupId, GroupSummary, RollRequest};
use crate::infrastructure::constants::{API_BASE_URL, ENVIRONMENT_TAG_KEY};
use crate::infrastructure::spot::api::{
    ApiCapacity, ApiEnvelope, ApiGroup, GroupUpdateBody, GroupUpdateRequest, RollRequestBody,
    RollStatus, ScaleResult,
};
use crate::shared::error::SpotError;
use serde::de::DeserializeOwned;
use tracing::debug;

#[async_trait::async_trait]
pub trait ElastigroupClient: Send + Sync {
    async fn list_groups(&self) -> Result<Vec<GroupSummary>, SpotError>;

    async fn get_group(&self, id: &GroupId) -> Result<GroupDetail, SpotError>;

    async fn update_capacity(&self, id: &GroupId, capacity: &Capacity) -> Result<(), SpotError>;

    async fn roll_group(&self, id: &GroupId, roll: &RollRequest) -> Result<RollStatus, SpotError>;

    async fn scale_up(&self, id: &GroupId, adjustment: u32) -> Result<ScaleResult, SpotError>;

    async fn scale_down(&self, id: &GroupId, adjustment: u32) -> Result<ScaleResult, SpotError>;
}

/// `ElastigroupClient` backed by the Spotinst REST API.
pub struct SpotHttpClient {
    http: reqwest::Client,
    base_url: String,
    account: String,
    token: String,
}

impl SpotHttpClient {
    pub fn new(credentials: &Credentials) -> Self {
        Self::with_base_url(credentials, API_BASE_URL)
    }

    /// Point the client at a non-default endpoint (tests, proxies).
    pub fn with_base_url(credentials: &Credentials, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            account: credentials.account.clone(),
            token: credentials.token.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request with auth and account scoping attached, unwrap
    /// the response envelope, and surface non-2xx statuses as errors.
    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        path: &str,
    ) -> Result<Vec<T>, SpotError> {
        debug!(path, account = %self.account, "sending Spotinst API request");

        let response = request
            .bearer_auth(&self.token)
            .query(&[("accountId", self.account.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpotError::Api(format!(
                "{} returned {}: {}",
                path, status, body
            )));
        }

        let envelope: ApiEnvelope<T> = response.json().await?;
        Ok(envelope.response.items)
    }
}

#[async_trait::async_trait]
impl ElastigroupClient for SpotHttpClient {
    async fn list_groups(&self) -> Result<Vec<GroupSummary>, SpotError> {
        let groups: Vec<ApiGroup> = self
            .send(self.http.get(self.url("/group")), "/group")
            .await?;

        Ok(groups.into_iter().map(summary_from_api).collect())
    }

    async fn get_group(&self, id: &GroupId) -> Result<GroupDetail, SpotError> {
        let path = format!("/group/{}", id);
        let groups: Vec<ApiGroup> = self.send(self.http.get(self.url(&path)), &path).await?;

        groups
            .into_iter()
            .next()
            .map(detail_from_api)
            .ok_or_else(|| SpotError::NotFound(id.to_string()))
    }

    async fn update_capacity(&self, id: &GroupId, capacity: &Capacity) -> Result<(), SpotError> {
        let path = format!("/group/{}", id);
        let body = GroupUpdateRequest {
            group: GroupUpdateBody {
                capacity: ApiCapacity {
                    minimum: capacity.minimum,
                    maximum: capacity.maximum,
                    target: capacity.target,
                },
            },
        };

        let _: Vec<serde_json::Value> = self
            .send(self.http.put(self.url(&path)).json(&body), &path)
            .await?;
        Ok(())
    }

    async fn roll_group(&self, id: &GroupId, roll: &RollRequest) -> Result<RollStatus, SpotError> {
        let path = format!("/group/{}/roll", id);
        let body = RollRequestBody {
            batch_size_percentage: roll.batch_percentage,
            grace_period: roll.grace_period_secs,
        };

        let statuses: Vec<RollStatus> = self
            .send(self.http.put(self.url(&path)).json(&body), &path)
            .await?;
        Ok(statuses.into_iter().next().unwrap_or_default())
    }

    async fn scale_up(&self, id: &GroupId, adjustment: u32) -> Result<ScaleResult, SpotError> {
        let path = format!("/group/{}/scale/up", id);
        let request = self
            .http
            .put(self.url(&path))
            .query(&[("adjustment", adjustment.to_string())]);

        let results: Vec<ScaleResult> = self.send(request, &path).await?;
        Ok(results.into_iter().next().unwrap_or_default())
    }

    async fn scale_down(&self, id: &GroupId, adjustment: u32) -> Result<ScaleResult, SpotError> {
        let path = format!("/group/{}/scale/down", id);
        let request = self
            .http
            .put(self.url(&path))
            .query(&[("adjustment", adjustment.to_string())]);

        let results: Vec<ScaleResult> = self.send(request, &path).await?;
        Ok(results.into_iter().next().unwrap_or_default())
    }
}

fn summary_from_api(group: ApiGroup) -> GroupSummary {
    GroupSummary {
        id: group.id,
        name: group.name,
        capacity: Capacity::new(
            group.capacity.minimum,
            group.capacity.maximum,
            group.capacity.target,
        ),
    }
}

fn detail_from_api(group: ApiGroup) -> GroupDetail {
    let launch_spec = group
        .compute
        .as_ref()
        .and_then(|c| c.launch_specification.as_ref());

    // Prefer the tag named "Environment"; fall back to the second tag,
    // which is where older groups carried the environment value.
    let environment = launch_spec.and_then(|spec| {
        spec.tags
            .iter()
            .find(|t| t.tag_key.eq_ignore_ascii_case(ENVIRONMENT_TAG_KEY))
            .or_else(|| spec.tags.get(1))
            .map(|t| t.tag_value.clone())
    });

    let image_id = launch_spec.and_then(|spec| spec.image_id.clone());

    GroupDetail {
        id: group.id,
        name: group.name,
        environment,
        image_id,
        capacity: Capacity::new(
            group.capacity.minimum,
            group.capacity.maximum,
            group.capacity.target,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::spot::api::{ApiCompute, ApiLaunchSpec, ApiTag};

    fn api_group(tags: Vec<ApiTag>) -> ApiGroup {
        ApiGroup {
            id: "sig-abc123".to_string(),
            name: "frontend".to_string(),
            capacity: ApiCapacity {
                minimum: 1,
                maximum: 10,
                target: 5,
            },
            compute: Some(ApiCompute {
                launch_specification: Some(ApiLaunchSpec {
                    image_id: Some("ami-0f00ba11".to_string()),
                    tags,
                }),
            }),
        }
    }

    fn tag(key: &str, value: &str) -> ApiTag {
        ApiTag {
            tag_key: key.to_string(),
            tag_value: value.to_string(),
        }
    }

    #[test]
    fn test_environment_resolved_by_tag_key() {
        let group = api_group(vec![
            tag("Environment", "production"),
            tag("Name", "frontend"),
        ]);
        let detail = detail_from_api(group);
        assert_eq!(detail.environment.as_deref(), Some("production"));
    }

    #[test]
    fn test_environment_falls_back_to_second_tag() {
        let group = api_group(vec![tag("Name", "frontend"), tag("Env", "staging")]);
        let detail = detail_from_api(group);
        assert_eq!(detail.environment.as_deref(), Some("staging"));
    }

    #[test]
    fn test_detail_without_launch_spec() {
        let group = ApiGroup {
            id: "sig-xyz789".to_string(),
            name: "bare".to_string(),
            capacity: ApiCapacity {
                minimum: 0,
                maximum: 1,
                target: 0,
            },
            compute: None,
        };

        let detail = detail_from_api(group);
        assert!(detail.environment.is_none());
        assert!(detail.image_id.is_none());
        assert_eq!(detail.capacity, Capacity::new(0, 1, 0));
    }
}

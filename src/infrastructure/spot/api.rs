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

//! Wire types for the Spotinst AWS Elastigroup REST API.
//!
//! Every endpoint wraps its payload in a `{"response": {"items": [..]}}`
//! envelope; only the fields this tool reads are modelled.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub response: ApiItems<T>,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiItems<T> {
    #[serde(default)]
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ApiCapacity {
    pub minimum: u32,
    pub maximum: u32,
    pub target: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGroup {
    pub id: String,
    pub name: String,
    pub capacity: ApiCapacity,
    #[serde(default)]
    pub compute: Option<ApiCompute>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCompute {
    #[serde(default)]
    pub launch_specification: Option<ApiLaunchSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiLaunchSpec {
    #[serde(default)]
    pub image_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<ApiTag>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTag {
    pub tag_key: String,
    pub tag_value: String,
}

/// Capacity updates go through the generic group-update endpoint,
/// nested as `{"group": {"capacity": {...}}}`.
#[derive(Debug, Serialize)]
pub struct GroupUpdateRequest {
    pub group: GroupUpdateBody,
}

#[derive(Debug, Serialize)]
pub struct GroupUpdateBody {
    pub capacity: ApiCapacity,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RollRequestBody {
    pub batch_size_percentage: u32,
    pub grace_period: u32,
}

/// Status of a started roll, as returned by the roll endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollStatus {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub current_batch: Option<u32>,
    #[serde(default)]
    pub num_of_batches: Option<u32>,
}

/// Instances and spot requests created (or removed) by a scale call.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleResult {
    #[serde(default)]
    pub new_instances: Vec<ScaleInstance>,
    #[serde(default)]
    pub new_spot_requests: Vec<ScaleSpotRequest>,
    #[serde(default)]
    pub victim_instances: Vec<ScaleInstance>,
    #[serde(default)]
    pub victim_spot_requests: Vec<ScaleSpotRequest>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleInstance {
    #[serde(default)]
    pub instance_id: Option<String>,
    #[serde(default)]
    pub availability_zone: Option<String>,
    #[serde(default)]
    pub instance_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleSpotRequest {
    #[serde(default)]
    pub spot_instance_request_id: Option<String>,
    #[serde(default)]
    pub availability_zone: Option<String>,
    #[serde(default)]
    pub instance_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_envelope_round_trip() {
        let json = r#"{
            "response": {
                "items": [{
                    "id": "sig-abc123",
                    "name": "magento-frontend",
                    "capacity": {"minimum": 1, "maximum": 10, "target": 5},
                    "compute": {
                        "launchSpecification": {
                            "imageId": "ami-0f00ba11",
                            "tags": [
                                {"tagKey": "Name", "tagValue": "frontend"},
                                {"tagKey": "Environment", "tagValue": "production"}
                            ]
                        }
                    }
                }]
            }
        }"#;

        let envelope: ApiEnvelope<ApiGroup> = serde_json::from_str(json).unwrap();
        let group = &envelope.response.items[0];
        assert_eq!(group.id, "sig-abc123");
        assert_eq!(group.capacity.target, 5);

        let spec = group
            .compute
            .as_ref()
            .and_then(|c| c.launch_specification.as_ref())
            .unwrap();
        assert_eq!(spec.image_id.as_deref(), Some("ami-0f00ba11"));
        assert_eq!(spec.tags[1].tag_value, "production");
    }

    #[test]
    fn test_group_without_compute() {
        let json = r#"{
            "id": "sig-xyz789",
            "name": "bare",
            "capacity": {"minimum": 0, "maximum": 1, "target": 0}
        }"#;

        let group: ApiGroup = serde_json::from_str(json).unwrap();
        assert!(group.compute.is_none());
    }

    #[test]
    fn test_capacity_update_body_shape() {
        let body = GroupUpdateRequest {
            group: GroupUpdateBody {
                capacity: ApiCapacity {
                    minimum: 1,
                    maximum: 10,
                    target: 5,
                },
            },
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["group"]["capacity"]["minimum"], 1);
        assert_eq!(json["group"]["capacity"]["target"], 5);
    }

    #[test]
    fn test_roll_body_uses_api_field_names() {
        let body = RollRequestBody {
            batch_size_percentage: 20,
            grace_period: 300,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["batchSizePercentage"], 20);
        assert_eq!(json["gracePeriod"], 300);
    }

    #[test]
    fn test_scale_result_tolerates_missing_fields() {
        let result: ScaleResult = serde_json::from_str("{}").unwrap();
        assert!(result.new_instances.is_empty());

        let json = r#"{"newInstances": [{"instanceId": "i-0abc", "availabilityZone": "eu-west-1a"}]}"#;
        let result: ScaleResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.new_instances[0].instance_id.as_deref(), Some("i-0abc"));
    }
}

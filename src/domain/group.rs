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

use crate::infrastructure::constants::{
    GROUP_ID_PATTERN, MAX_BATCH_PERCENTAGE, MAX_CAPACITY, MAX_GRACE_PERIOD_SECS,
};
use crate::shared::error::SpotError;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

fn group_id_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(GROUP_ID_PATTERN).expect("group id pattern is valid"))
}

/// Validated Elastigroup identifier (`sig-` followed by alphanumerics).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupId(String);

impl GroupId {
    /// The pattern alone decides validity. Ids are not length-checked:
    /// Spotinst has issued ids of varying length and the old fixed
    /// 12-character check rejected valid groups.
    pub fn parse(raw: &str) -> Result<Self, SpotError> {
        if group_id_regex().is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(SpotError::InvalidGroupId(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The (minimum, maximum, target) instance-count triple governing a
/// group's size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    pub minimum: u32,
    pub maximum: u32,
    pub target: u32,
}

impl Capacity {
    pub fn new(minimum: u32, maximum: u32, target: u32) -> Self {
        Self {
            minimum,
            maximum,
            target,
        }
    }

    /// Bounds and ordering checks for operator-supplied capacity.
    /// Capacity read back from the API is displayed as-is and never
    /// passes through here.
    pub fn validate(&self) -> Result<(), SpotError> {
        for (name, value) in [
            ("min", self.minimum),
            ("max", self.maximum),
            ("target", self.target),
        ] {
            if value > MAX_CAPACITY {
                return Err(SpotError::validation(format!(
                    "capacity {} must be at most {}, got {}",
                    name, MAX_CAPACITY, value
                )));
            }
        }

        if self.minimum > self.target || self.target > self.maximum {
            return Err(SpotError::validation(format!(
                "capacity must satisfy min <= target <= max, got {}",
                self
            )));
        }

        Ok(())
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min:{} max:{} target:{}",
            self.minimum, self.maximum, self.target
        )
    }
}

/// Parameters for a rolling redeploy of a group's instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollRequest {
    pub batch_percentage: u32,
    pub grace_period_secs: u32,
}

impl RollRequest {
    pub fn new(batch_percentage: u32, grace_period_secs: u32) -> Self {
        Self {
            batch_percentage,
            grace_period_secs,
        }
    }

    pub fn validate(&self) -> Result<(), SpotError> {
        if self.batch_percentage > MAX_BATCH_PERCENTAGE {
            return Err(SpotError::validation(format!(
                "batch percentage must be at most {}, got {}",
                MAX_BATCH_PERCENTAGE, self.batch_percentage
            )));
        }

        if self.grace_period_secs > MAX_GRACE_PERIOD_SECS {
            return Err(SpotError::validation(format!(
                "grace period must be at most {}s, got {}s",
                MAX_GRACE_PERIOD_SECS, self.grace_period_secs
            )));
        }

        Ok(())
    }
}

/// One row of `--list all` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    pub id: String,
    pub name: String,
    pub capacity: Capacity,
}

/// Full view of a single group, as shown by `--list <group-id>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDetail {
    pub id: String,
    pub name: String,
    pub environment: Option<String>,
    pub image_id: Option<String>,
    pub capacity: Capacity,
}

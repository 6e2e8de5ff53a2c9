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

/// Spotinst REST API endpoint for AWS Elastigroups
pub const API_BASE_URL: &str = "https://api.spotinst.io/aws/ec2";

/// Credentials file (netrc format) in the operator's home directory
pub const CREDENTIALS_FILE_NAME: &str = ".netrc";

/// Credential entries are keyed by `<org>-token`, e.g. `magento-token`
pub const TOKEN_KEY_SUFFIX: &str = "-token";

/// Elastigroup id format
pub const GROUP_ID_PATTERN: &str = "^sig-[A-Za-z0-9]+$";

/// Launch specification tag carrying the environment name
pub const ENVIRONMENT_TAG_KEY: &str = "Environment";

/// Upper bounds for numeric arguments. Capacity values and scale
/// adjustments are capped at two digits, roll parameters at three;
/// these are operational limits for our fleet sizes, not API limits.
pub const MAX_CAPACITY: u32 = 99;
pub const MAX_ADJUSTMENT: u32 = 99;
pub const MAX_BATCH_PERCENTAGE: u32 = 999;
pub const MAX_GRACE_PERIOD_SECS: u32 = 999;

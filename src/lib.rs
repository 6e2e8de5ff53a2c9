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

// Core modules
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod shared;

// Re-export commonly used types
pub use cli::{Action, CliArgs, Confirmer, ListTarget, OrgType, TerminalConfirmer};
pub use domain::credentials::Credentials;
pub use domain::group::{Capacity, GroupDetail, GroupId, GroupSummary, RollRequest};
pub use infrastructure::spot::{ElastigroupClient, RollStatus, ScaleResult, SpotHttpClient};
pub use shared::{Result, SpotError};

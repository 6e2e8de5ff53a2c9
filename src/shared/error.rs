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

use thiserror::Error;
pub type Result<T> = std::result::Result<T, SpotError>;

#[derive(Error, Debug)]
pub enum SpotError {
    #[error("Spotinst API error: {0}")]
    Api(String),

    #[error("Credential error: {0}")]
    Credentials(String),

    #[error("Wrong Elastigroup id '{0}', expected sig-<alphanumeric>")]
    InvalidGroupId(String),

    #[error("Elastigroup '{0}' not found")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Nothing to do, no action flag was supplied")]
    NothingToDo,

    #[error("Aborting, request was not confirmed")]
    Aborted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl From<reqwest::Error> for SpotError {
    fn from(err: reqwest::Error) -> Self {
        SpotError::Api(err.to_string())
    }
}

impl SpotError {
    pub fn credentials(context: impl Into<String>) -> Self {
        Self::Credentials(context.into())
    }

    pub fn validation(context: impl Into<String>) -> Self {
        Self::Validation(context.into())
    }
}

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

use crate::infrastructure::constants::CREDENTIALS_FILE_NAME;
use crate::shared::error::SpotError;
use std::path::Path;

/// Account id and API token for one Spotinst organization.
///
/// Sourced either from the operator's netrc-format credentials file
/// (entry `machine <org>-token login <account> password <token>`) or
/// supplied directly via `--pipelines` in CI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub account: String,
    pub token: String,
}

impl Credentials {
    pub fn new(account: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            token: token.into(),
        }
    }

    /// Resolve credentials for one invocation: a `--pipelines`
    /// account/token pair is used verbatim, otherwise the per-user
    /// credentials file is consulted under `token_key`.
    pub fn resolve(pipeline: Option<&[String]>, token_key: &str) -> Result<Self, SpotError> {
        Self::resolve_at(pipeline, token_key, None)
    }

    /// As [`Self::resolve`], with `file` overriding the default
    /// `~/.netrc` location.
    pub fn resolve_at(
        pipeline: Option<&[String]>,
        token_key: &str,
        file: Option<&Path>,
    ) -> Result<Self, SpotError> {
        match pipeline {
            Some(pair) => {
                if pair.len() != 2 {
                    return Err(SpotError::credentials(format!(
                        "expected one <account> <token> pair, got {} values",
                        pair.len()
                    )));
                }
                Ok(Self::new(pair[0].clone(), pair[1].clone()))
            }
            None => match file {
                Some(path) => Self::from_file(path, token_key),
                None => Self::from_user_file(token_key),
            },
        }
    }

    /// Look up `token_key` (e.g. `magento-token`) in `~/.netrc`.
    pub fn from_user_file(token_key: &str) -> Result<Self, SpotError> {
        let home = dirs::home_dir()
            .ok_or_else(|| SpotError::credentials("could not determine home directory"))?;
        Self::from_file(&home.join(CREDENTIALS_FILE_NAME), token_key)
    }

    pub fn from_file(path: &Path, token_key: &str) -> Result<Self, SpotError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            SpotError::credentials(format!(
                "can't read credentials file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_netrc(&contents, token_key)
    }

    /// Minimal netrc scan. Only `machine`, `login` and `password`
    /// tokens are interpreted; everything else (including `default`
    /// entries and macros) is skipped.
    pub fn from_netrc(contents: &str, machine: &str) -> Result<Self, SpotError> {
        let tokens: Vec<&str> = contents.split_whitespace().collect();

        let mut in_target = false;
        let mut account: Option<&str> = None;
        let mut token: Option<&str> = None;

        let mut i = 0;
        while i + 1 < tokens.len() {
            match tokens[i] {
                "machine" => {
                    in_target = tokens[i + 1] == machine;
                    i += 2;
                }
                "login" if in_target => {
                    account = Some(tokens[i + 1]);
                    i += 2;
                }
                "password" if in_target => {
                    token = Some(tokens[i + 1]);
                    i += 2;
                }
                _ => i += 1,
            }
        }

        match (account, token) {
            (Some(account), Some(token)) => Ok(Self::new(account, token)),
            _ => Err(SpotError::credentials(format!(
                "no authenticators for '{}' in credentials file",
                machine
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const NETRC: &str = "\
machine magento-token login act-11111 password tok-aaaaa
machine launches-token
  login act-22222
  password tok-bbbbb
machine github.com login someone password hunter2
";

    #[test]
    fn test_lookup_single_line_entry() {
        let creds = Credentials::from_netrc(NETRC, "magento-token").unwrap();
        assert_eq!(creds.account, "act-11111");
        assert_eq!(creds.token, "tok-aaaaa");
    }

    #[test]
    fn test_lookup_multi_line_entry() {
        let creds = Credentials::from_netrc(NETRC, "launches-token").unwrap();
        assert_eq!(creds.account, "act-22222");
        assert_eq!(creds.token, "tok-bbbbb");
    }

    #[test]
    fn test_missing_machine_errors() {
        let err = Credentials::from_netrc(NETRC, "staging-token").unwrap_err();
        assert!(err.to_string().contains("staging-token"));
    }

    #[test]
    fn test_later_machine_does_not_leak_fields() {
        // Fields of other machines must not satisfy the lookup
        let contents = "machine magento-token login act-1\nmachine other password tok-x\n";
        assert!(Credentials::from_netrc(contents, "magento-token").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", NETRC).unwrap();

        let creds = Credentials::from_file(file.path(), "magento-token").unwrap();
        assert_eq!(creds.account, "act-11111");
    }

    #[test]
    fn test_pipeline_pair_bypasses_credentials_file() {
        let pair = vec!["act-999".to_string(), "tok-zzz".to_string()];

        // Pointing at a nonexistent file proves it is never consulted
        let creds = Credentials::resolve_at(
            Some(&pair),
            "magento-token",
            Some(Path::new("/nonexistent/.netrc")),
        )
        .unwrap();
        assert_eq!(creds, Credentials::new("act-999", "tok-zzz"));
    }

    #[test]
    fn test_resolve_without_pipeline_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", NETRC).unwrap();

        let creds =
            Credentials::resolve_at(None, "launches-token", Some(file.path())).unwrap();
        assert_eq!(creds.account, "act-22222");
        assert_eq!(creds.token, "tok-bbbbb");
    }

    #[test]
    fn test_resolve_rejects_incomplete_pipeline_pair() {
        let values = vec!["act-999".to_string()];
        let err = Credentials::resolve_at(Some(&values), "magento-token", None).unwrap_err();
        assert!(matches!(err, SpotError::Credentials(_)));
    }

    #[test]
    fn test_missing_file_errors() {
        let err = Credentials::from_file(Path::new("/nonexistent/.netrc"), "magento-token")
            .unwrap_err();
        assert!(err.to_string().contains("can't read"));
    }
}

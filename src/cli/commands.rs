// CLI flag definitions

use crate::infrastructure::constants::TOKEN_KEY_SUFFIX;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "spotctl",
    version,
    about = "Managing Spotinst Elastigroup actions",
    long_about = "A CLI tool for basic control over our Elastigroups: list groups, \
                  update capacity, roll new instances, and scale up or down"
)]
pub struct CliArgs {
    /// Organization the credentials belong to; selects the `<type>-token`
    /// entry in the credentials file. e.g. spotctl -t magento --list all
    #[arg(long = "type", short = 't', value_enum)]
    pub org_type: OrgType,

    /// Show information about a single Elastigroup or all of them.
    /// e.g. spotctl -t magento --list all
    #[arg(long, short = 'l', value_name = "GROUP_ID|all")]
    pub list: Option<String>,

    /// Scale up a number of instances for a given Elastigroup.
    /// e.g. --scaleup sig-abc123 3
    #[arg(long, num_args = 2, allow_negative_numbers = true, value_names = ["GROUP_ID", "ADJUSTMENT"])]
    pub scaleup: Option<Vec<String>>,

    /// Scale down a number of instances for a given Elastigroup.
    /// e.g. --scaledown sig-abc123 3
    #[arg(long, num_args = 2, allow_negative_numbers = true, value_names = ["GROUP_ID", "ADJUSTMENT"])]
    pub scaledown: Option<Vec<String>>,

    /// Update capacity values for a given Elastigroup.
    /// e.g. --capacity sig-abc123 1 10 5
    #[arg(long, num_args = 4, allow_negative_numbers = true, value_names = ["GROUP_ID", "MIN", "MAX", "TARGET"])]
    pub capacity: Option<Vec<String>>,

    /// Roll new instances in a single Elastigroup.
    /// e.g. --deploy sig-abc123 20 300
    #[arg(long, short = 'd', num_args = 3, allow_negative_numbers = true, value_names = ["GROUP_ID", "BATCH_PERCENTAGE", "GRACE_PERIOD"])]
    pub deploy: Option<Vec<String>>,

    /// Used only inside CI pipelines: bypass the credentials file and
    /// authenticate with the given account and token. Deploy actions
    /// skip the interactive confirmation in this mode.
    #[arg(long, num_args = 2, value_names = ["ACCOUNT", "TOKEN"])]
    pub pipelines: Option<Vec<String>>,
}

impl CliArgs {
    pub fn pipeline_mode(&self) -> bool {
        self.pipelines.is_some()
    }
}

/// Organizations we hold Spotinst accounts for.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrgType {
    Magento,
    Launches,
}

impl OrgType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrgType::Magento => "magento",
            OrgType::Launches => "launches",
        }
    }

    /// Credentials file key, e.g. `magento-token`.
    pub fn token_key(&self) -> String {
        format!("{}{}", self.as_str(), TOKEN_KEY_SUFFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_is_required() {
        assert!(CliArgs::try_parse_from(["spotctl", "--list", "all"]).is_err());
    }

    #[test]
    fn test_type_values() {
        let args = CliArgs::try_parse_from(["spotctl", "-t", "magento"]).unwrap();
        assert_eq!(args.org_type, OrgType::Magento);

        let args = CliArgs::try_parse_from(["spotctl", "--type", "launches"]).unwrap();
        assert_eq!(args.org_type, OrgType::Launches);

        assert!(CliArgs::try_parse_from(["spotctl", "-t", "unknown"]).is_err());
    }

    #[test]
    fn test_multi_value_flags() {
        let args = CliArgs::try_parse_from([
            "spotctl", "-t", "magento", "--capacity", "sig-abc123", "1", "10", "5",
        ])
        .unwrap();
        assert_eq!(
            args.capacity.as_deref(),
            Some(&["sig-abc123".to_string(), "1".into(), "10".into(), "5".into()][..])
        );

        // Wrong arity is a parse error
        assert!(CliArgs::try_parse_from([
            "spotctl", "-t", "magento", "--capacity", "sig-abc123", "1"
        ])
        .is_err());
    }

    #[test]
    fn test_pipeline_mode() {
        let args = CliArgs::try_parse_from([
            "spotctl", "-t", "magento", "-d", "sig-abc123", "20", "300", "--pipelines",
            "act-123", "tok-456",
        ])
        .unwrap();
        assert!(args.pipeline_mode());
    }

    #[test]
    fn test_token_key() {
        assert_eq!(OrgType::Magento.token_key(), "magento-token");
        assert_eq!(OrgType::Launches.token_key(), "launches-token");
    }
}

//! Argument-to-action mapping and dispatch.
//!
//! The raw flag surface is folded into exactly one validated [`Action`]
//! before any credentials are resolved or any remote call is made.

use crate::cli::commands::CliArgs;
use crate::cli::display::TableRenderer;
use crate::cli::prompt::Confirmer;
use crate::domain::group::{Capacity, GroupId, RollRequest};
use crate::infrastructure::constants::MAX_ADJUSTMENT;
use crate::infrastructure::spot::client::ElastigroupClient;
use crate::shared::error::SpotError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    List(ListTarget),
    Capacity { group: GroupId, capacity: Capacity },
    Deploy { group: GroupId, roll: RollRequest },
    ScaleUp { group: GroupId, adjustment: u32 },
    ScaleDown { group: GroupId, adjustment: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListTarget {
    All,
    Group(GroupId),
}

impl Action {
    /// Fold the parsed flags into exactly one action. Zero actionable
    /// flags or more than one is an error; each invocation performs a
    /// single remote call sequence.
    pub fn from_args(args: &CliArgs) -> Result<Self, SpotError> {
        let mut actions = Vec::new();

        if let Some(target) = &args.list {
            actions.push(parse_list(target)?);
        }
        if let Some(values) = &args.capacity {
            actions.push(parse_capacity(values)?);
        }
        if let Some(values) = &args.deploy {
            actions.push(parse_deploy(values)?);
        }
        if let Some(values) = &args.scaleup {
            actions.push(parse_scale(values, true)?);
        }
        if let Some(values) = &args.scaledown {
            actions.push(parse_scale(values, false)?);
        }

        match actions.len() {
            0 => Err(SpotError::NothingToDo),
            1 => Ok(actions.remove(0)),
            _ => Err(SpotError::validation(
                "exactly one action flag may be supplied per invocation",
            )),
        }
    }
}

fn parse_list(target: &str) -> Result<Action, SpotError> {
    if target == "all" {
        Ok(Action::List(ListTarget::All))
    } else {
        Ok(Action::List(ListTarget::Group(GroupId::parse(target)?)))
    }
}

/// Clap appends the values of repeated flag occurrences into one
/// list, so anything beyond a single occurrence shows up as excess
/// values and is rejected here.
fn expect_arity(flag: &str, values: &[String], expected: usize) -> Result<(), SpotError> {
    if values.len() != expected {
        return Err(SpotError::validation(format!(
            "--{} takes {} values and may be given only once, got {} values",
            flag,
            expected,
            values.len()
        )));
    }
    Ok(())
}

fn parse_capacity(values: &[String]) -> Result<Action, SpotError> {
    expect_arity("capacity", values, 4)?;
    let group = GroupId::parse(&values[0])?;
    let capacity = Capacity::new(
        parse_number("min", &values[1])?,
        parse_number("max", &values[2])?,
        parse_number("target", &values[3])?,
    );
    capacity.validate()?;

    Ok(Action::Capacity { group, capacity })
}

fn parse_deploy(values: &[String]) -> Result<Action, SpotError> {
    expect_arity("deploy", values, 3)?;
    let group = GroupId::parse(&values[0])?;
    let roll = RollRequest::new(
        parse_number("batch percentage", &values[1])?,
        parse_number("grace period", &values[2])?,
    );
    roll.validate()?;

    Ok(Action::Deploy { group, roll })
}

fn parse_scale(values: &[String], up: bool) -> Result<Action, SpotError> {
    expect_arity(if up { "scaleup" } else { "scaledown" }, values, 2)?;
    let group = GroupId::parse(&values[0])?;
    let adjustment = parse_number("adjustment", &values[1])?;
    if adjustment > MAX_ADJUSTMENT {
        return Err(SpotError::validation(format!(
            "adjustment must be at most {}, got {}",
            MAX_ADJUSTMENT, adjustment
        )));
    }

    Ok(if up {
        Action::ScaleUp { group, adjustment }
    } else {
        Action::ScaleDown { group, adjustment }
    })
}

/// Numeric arguments are parsed as unsigned integers, so signs,
/// decimals, and garbage are rejected outright instead of slipping
/// through a string-length check.
fn parse_number(name: &str, raw: &str) -> Result<u32, SpotError> {
    raw.parse().map_err(|_| {
        SpotError::validation(format!(
            "{} must be a non-negative integer, got '{}'",
            name, raw
        ))
    })
}

/// Execute one validated action against the client, printing
/// human-readable results to stdout.
///
/// Mutating actions ask `confirm` before touching the API; the deploy
/// confirmation is skipped in pipeline mode. A declined confirmation
/// surfaces as [`SpotError::Aborted`].
pub async fn run(
    action: Action,
    client: &dyn ElastigroupClient,
    confirm: &dyn Confirmer,
    pipeline_mode: bool,
) -> Result<(), SpotError> {
    let renderer = TableRenderer::new();

    match action {
        Action::List(ListTarget::All) => {
            let groups = client.list_groups().await?;
            println!("{}", renderer.render_groups_list(&groups));
        }

        Action::List(ListTarget::Group(id)) => {
            let detail = client.get_group(&id).await?;
            println!("{}", renderer.render_group_detail(&detail));
        }

        Action::Capacity { group, capacity } => {
            let current = client.get_group(&group).await?;
            println!("Existing capacity is {}", current.capacity);
            println!("Requested capacity is {}", capacity);

            // Unlike deploy, capacity changes always require an
            // operator confirmation, pipeline mode included.
            if !confirm.confirm("Execute the request?") {
                return Err(SpotError::Aborted);
            }

            client.update_capacity(&group, &capacity).await?;
            println!("Capacity of {} updated to {}", group, capacity);
        }

        Action::Deploy { group, roll } => {
            println!(
                "Requested batch percentage is {} and grace period is {}s",
                roll.batch_percentage, roll.grace_period_secs
            );

            if !pipeline_mode && !confirm.confirm("Execute the request?") {
                return Err(SpotError::Aborted);
            }

            let status = client.roll_group(&group, &roll).await?;
            println!("{}", renderer.render_roll_status(&group, &status));
        }

        Action::ScaleUp { group, adjustment } => {
            let result = client.scale_up(&group, adjustment).await?;
            println!("{}", renderer.render_scale_result(&group, &result, true));
        }

        Action::ScaleDown { group, adjustment } => {
            let result = client.scale_down(&group, adjustment).await?;
            println!("{}", renderer.render_scale_result(&group, &result, false));
        }
    }

    Ok(())
}

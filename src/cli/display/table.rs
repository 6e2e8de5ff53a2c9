//! Table rendering for CLI output

use crate::domain::group::{GroupDetail, GroupId, GroupSummary};
use crate::infrastructure::spot::{RollStatus, ScaleResult};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};

/// Table renderer for formatted output
pub struct TableRenderer;

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render all groups as a formatted table, one row per group.
    pub fn render_groups_list(&self, groups: &[GroupSummary]) -> String {
        if groups.is_empty() {
            return "No Elastigroups found".to_string();
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("GROUP").set_alignment(CellAlignment::Left),
                Cell::new("NAME").set_alignment(CellAlignment::Left),
                Cell::new("MIN").set_alignment(CellAlignment::Center),
                Cell::new("MAX").set_alignment(CellAlignment::Center),
                Cell::new("TARGET").set_alignment(CellAlignment::Center),
            ]);

        for group in groups {
            table.add_row(vec![
                Cell::new(&group.id),
                Cell::new(&group.name),
                Cell::new(group.capacity.minimum).set_alignment(CellAlignment::Center),
                Cell::new(group.capacity.maximum).set_alignment(CellAlignment::Center),
                Cell::new(group.capacity.target).set_alignment(CellAlignment::Center),
            ]);
        }

        let mut output = String::new();
        output.push_str(&format!(
            "Elastigroups {}\n",
            format!("[{} groups]", groups.len()).bright_black()
        ));
        output.push_str(&table.to_string());
        output
    }

    /// Render one group's details as a two-column table.
    pub fn render_group_detail(&self, detail: &GroupDetail) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table.add_row(vec![Cell::new("Group name"), Cell::new(&detail.name)]);
        table.add_row(vec![
            Cell::new("Environment"),
            Cell::new(detail.environment.as_deref().unwrap_or("-")),
        ]);
        table.add_row(vec![
            Cell::new("Ami"),
            Cell::new(detail.image_id.as_deref().unwrap_or("-")),
        ]);
        table.add_row(vec![
            Cell::new("Capacity"),
            Cell::new(detail.capacity.to_string()),
        ]);

        format!("{}\n{}", detail.id.bright_black(), table)
    }

    /// One-line summary of a started roll.
    pub fn render_roll_status(&self, group: &GroupId, status: &RollStatus) -> String {
        let mut line = format!("Roll started for {}", group);
        if let Some(id) = &status.id {
            line.push_str(&format!(" (roll id {})", id));
        }
        if let Some(state) = &status.status {
            line.push_str(&format!(", status: {}", state));
        }
        if let (Some(current), Some(total)) = (status.current_batch, status.num_of_batches) {
            line.push_str(&format!(", batch {}/{}", current, total));
        }
        line
    }

    /// Summary of a scale call, listing the affected instances.
    pub fn render_scale_result(
        &self,
        group: &GroupId,
        result: &ScaleResult,
        up: bool,
    ) -> String {
        let direction = if up { "up" } else { "down" };

        let mut affected: Vec<String> = Vec::new();
        for instance in result.new_instances.iter().chain(&result.victim_instances) {
            if let Some(id) = &instance.instance_id {
                affected.push(id.clone());
            }
        }
        for request in result
            .new_spot_requests
            .iter()
            .chain(&result.victim_spot_requests)
        {
            if let Some(id) = &request.spot_instance_request_id {
                affected.push(id.clone());
            }
        }

        if affected.is_empty() {
            format!("Scale {} request accepted for {}", direction, group)
        } else {
            format!(
                "Scaled {} {}: {} instance(s): {}",
                direction,
                group,
                affected.len(),
                affected.join(", ")
            )
        }
    }
}

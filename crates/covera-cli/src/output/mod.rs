//! Command output in the three `--format` modes.
//!
//! JSON and raw modes serialize the response as-is. Table mode goes through
//! [`Tabular`], which each response type implements with its own columns.

use covera_core::responses::{
    FrameworkRow, KnowledgeListEntry, StatusResponse, ValidationResponse,
};
use covera_core::summary::CoverageSummary;
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::ui;

pub mod table;

/// A response that knows how to lay itself out as a table.
pub trait Tabular {
    fn headers(&self) -> Vec<&'static str>;

    fn rows(&self) -> Vec<Vec<String>>;

    /// Line printed under the table.
    fn footer(&self) -> Option<String> {
        None
    }
}

/// Render a response to a string in the requested format.
pub fn render<T: Serialize + Tabular>(
    value: &T,
    format: OutputFormat,
    color: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => {
            let rows = value.rows();
            let mut out = if rows.is_empty() {
                String::from("(no rows)")
            } else {
                table::render(&value.headers(), &rows, color)
            };
            if let Some(footer) = value.footer() {
                out.push_str("\n\n");
                out.push_str(&footer);
            }
            Ok(out)
        }
    }
}

/// Print a response to stdout in the format chosen by the global flags.
pub fn output<T: Serialize + Tabular>(value: &T, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rendered = render(value, flags.format, ui::table_color(flags))?;
    println!("{rendered}");
    Ok(())
}

fn field(key: &'static str, value: impl ToString) -> Vec<String> {
    vec![key.to_string(), value.to_string()]
}

impl Tabular for Vec<KnowledgeListEntry> {
    fn headers(&self) -> Vec<&'static str> {
        vec!["id", "name", "version", "category", "frameworks", "reviewed", "by"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.iter()
            .map(|entry| {
                vec![
                    entry.id.clone(),
                    entry.name.clone(),
                    entry.version.clone(),
                    entry.category.clone(),
                    entry.frameworks.to_string(),
                    entry.reviewed_at.format("%Y-%m-%d").to_string(),
                    entry.reviewed_by.clone(),
                ]
            })
            .collect()
    }
}

impl Tabular for Vec<FrameworkRow> {
    fn headers(&self) -> Vec<&'static str> {
        vec![
            "id", "name", "coverage", "total", "status", "updated", "gaps", "unknown",
        ]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.iter()
            .map(|row| {
                vec![
                    row.id.clone(),
                    row.name.clone(),
                    row.coverage.to_string(),
                    row.total.map_or_else(|| "-".to_string(), |total| total.to_string()),
                    row.status.clone(),
                    row.last_update.clone(),
                    row.gaps.to_string(),
                    row.unknown_criteria.to_string(),
                ]
            })
            .collect()
    }
}

impl Tabular for StatusResponse {
    fn headers(&self) -> Vec<&'static str> {
        vec!["field", "value"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let mut rows = vec![
            field("knowledge", &self.knowledge_id),
            field("reviewed", self.evaluated_at.format("%Y-%m-%d")),
            field("status", &self.status),
        ];
        if let Some(confidence) = &self.confidence {
            rows.push(field("confidence", confidence.confidence));
            rows.push(field("days_since", confidence.days_since));
            rows.push(field("days_until_stale", confidence.days_until_stale));
            rows.push(field("valid_days", confidence.valid_days));
            rows.push(field(
                "reference_date",
                confidence.reference_date.format("%Y-%m-%d"),
            ));
        }
        if let Some(error) = &self.confidence_error {
            rows.push(field("reason", error));
        }
        rows.push(field("review_overdue", self.is_stale));
        rows
    }
}

impl Tabular for CoverageSummary {
    fn headers(&self) -> Vec<&'static str> {
        vec!["field", "value"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let mut rows = vec![
            field("knowledge", &self.knowledge_id),
            field("frameworks", self.framework_count),
            field("average_coverage", self.average_coverage),
            field("with_guidance", self.with_guidance),
        ];
        rows.extend(
            self.by_status
                .iter()
                .map(|(status, count)| vec![status.clone(), count.to_string()]),
        );
        rows.push(field("latest_change", &self.latest_change));
        rows
    }
}

impl Tabular for ValidationResponse {
    fn headers(&self) -> Vec<&'static str> {
        vec!["knowledge", "severity", "code", "subject", "message"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.reports
            .iter()
            .flat_map(|report| {
                report.issues.iter().map(|issue| {
                    vec![
                        report.knowledge_id.clone(),
                        issue.severity.to_string(),
                        issue.code.to_string(),
                        issue.subject.clone(),
                        issue.message.clone(),
                    ]
                })
            })
            .collect()
    }

    fn footer(&self) -> Option<String> {
        Some(format!(
            "{}: {} error(s), {} warning(s){}",
            if self.passed { "passed" } else { "failed" },
            self.errors,
            self.warnings,
            if self.strict { ", strict" } else { "" }
        ))
    }
}

/// Schema names from `covera schema`.
impl Tabular for Vec<&'static str> {
    fn headers(&self) -> Vec<&'static str> {
        vec!["schema"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.iter().map(|name| vec![(*name).to_string()]).collect()
    }
}

/// A single JSON Schema, shown as its top-level properties.
impl Tabular for serde_json::Value {
    fn headers(&self) -> Vec<&'static str> {
        vec!["property", "type", "required"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let required = self["required"]
            .as_array()
            .map(|names| names.iter().filter_map(serde_json::Value::as_str).collect::<Vec<_>>())
            .unwrap_or_default();
        let Some(properties) = self["properties"].as_object() else {
            return Vec::new();
        };

        properties
            .iter()
            .map(|(name, property)| {
                vec![
                    name.clone(),
                    property_type(property),
                    required.contains(&name.as_str()).to_string(),
                ]
            })
            .collect()
    }

    fn footer(&self) -> Option<String> {
        self["title"].as_str().map(|title| format!("schema: {title}"))
    }
}

/// `type` of a schema property, or the name its `$ref` points at.
fn property_type(property: &serde_json::Value) -> String {
    if let Some(kind) = property["type"].as_str() {
        return kind.to_string();
    }
    if let Some(kinds) = property["type"].as_array() {
        return kinds
            .iter()
            .filter_map(serde_json::Value::as_str)
            .collect::<Vec<_>>()
            .join("|");
    }
    property["$ref"]
        .as_str()
        .and_then(|reference| reference.rsplit('/').next())
        .map_or_else(|| "-".to_string(), ToString::to_string)
}

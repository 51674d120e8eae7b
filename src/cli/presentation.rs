//! CLI presentation: transcript and report formatting (text and JSON).

use crate::error::{ApiError, RosterError};
use crate::tree::{compute_digest, render_tree, Digest, Tree};
use crate::verify::Verification;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::Serialize;

const OPENING_RULE: &str = "=========================================";
const OPENING_TITLE: &str = "|--------- Roll Call Verifier ----------|";
const CLOSING_RULE: &str = "========================================================";
const CLOSING_TITLE: &str = "|--------------- Verification Completed ---------------|";

/// Verdict of a verify run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerifyStatus {
    Verified,
    NotFound,
    /// The identifier could not be resolved from the roster table
    Rejected,
}

/// Everything the verify transcript reports
#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    pub identifier: String,
    pub name: Option<String>,
    pub status: VerifyStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub root_digest: Option<Digest>,
    pub query_digest: Digest,
    pub leaf_count: usize,
    pub height: usize,
    pub tree: Vec<String>,
}

impl VerifyReport {
    /// Report for an identifier the roster table could not resolve
    pub fn rejected(identifier: &str, err: &RosterError) -> Self {
        Self {
            identifier: identifier.to_string(),
            name: None,
            status: VerifyStatus::Rejected,
            error: Some(err.notice().to_string()),
            root_digest: None,
            query_digest: compute_digest(identifier.as_bytes()),
            leaf_count: 0,
            height: 0,
            tree: Vec::new(),
        }
    }

    /// Report for a resolved identifier checked against `tree`
    pub fn checked(
        identifier: &str,
        name: String,
        tree: Option<&Tree>,
        verification: Verification,
    ) -> Self {
        Self {
            identifier: identifier.to_string(),
            name: Some(name),
            status: if verification.present {
                VerifyStatus::Verified
            } else {
                VerifyStatus::NotFound
            },
            error: None,
            root_digest: tree.map(|t| t.root_digest().clone()),
            query_digest: verification.query_digest,
            leaf_count: tree.map_or(0, Tree::leaf_count),
            height: tree.map_or(0, Tree::height),
            tree: render_tree(tree),
        }
    }
}

/// Summary of the roster tree
#[derive(Debug, Clone, Serialize)]
pub struct TreeReport {
    pub root_digest: Option<Digest>,
    pub leaf_count: usize,
    pub height: usize,
    pub node_count: usize,
    pub tree: Vec<String>,
}

impl TreeReport {
    pub fn new(tree: Option<&Tree>) -> Self {
        Self {
            root_digest: tree.map(|t| t.root_digest().clone()),
            leaf_count: tree.map_or(0, Tree::leaf_count),
            height: tree.map_or(0, Tree::height),
            node_count: tree.map_or(0, Tree::node_count),
            tree: render_tree(tree),
        }
    }
}

fn push_tree(out: &mut Vec<String>, tree: &[String]) {
    if tree.is_empty() {
        out.push("(empty roster, nothing to check)".to_string());
    } else {
        out.extend(tree.iter().cloned());
    }
}

fn root_line(root_digest: Option<&Digest>) -> String {
    match root_digest {
        Some(digest) => format!("Root Hash: {}", digest),
        None => "Root Hash: -".to_string(),
    }
}

/// Console transcript of a verify run
pub fn format_verify_text(report: &VerifyReport, color: bool) -> String {
    let mut out = vec![
        OPENING_RULE.to_string(),
        OPENING_TITLE.to_string(),
        OPENING_RULE.to_string(),
        format!("->Registration Number: {}", report.identifier),
        "->Verification process initiated...".to_string(),
    ];

    if report.status == VerifyStatus::Rejected {
        let notice = report.error.as_deref().unwrap_or("Not found");
        out.push(format!("->Name: {}", notice));
        out.push("Exiting: Invalid registration number.".to_string());
        return out.join("\n");
    }

    let name = report.name.as_deref().unwrap_or_default();
    out.push(format!("->Name: {}", name));
    out.push(String::new());
    out.push("->Hash Tree Structure:".to_string());
    push_tree(&mut out, &report.tree);
    out.push(String::new());
    out.push(root_line(report.root_digest.as_ref()));
    out.push(String::new());
    out.push("Verifying....".to_string());
    out.push(format!(
        "->Registration Number {} (Hash: {})",
        report.identifier, report.query_digest
    ));
    out.push(format!("->Name: {}", name));

    let verdict = match (report.status, color) {
        (VerifyStatus::Verified, true) => "<---Verified--->".green().bold().to_string(),
        (VerifyStatus::Verified, false) => "<---Verified--->".to_string(),
        (_, true) => "<---Not Found--->".red().bold().to_string(),
        (_, false) => "<---Not Found--->".to_string(),
    };
    out.push(format!("->Status: {}", verdict));
    out.push(String::new());
    out.push(CLOSING_RULE.to_string());
    out.push(CLOSING_TITLE.to_string());
    out.push(CLOSING_RULE.to_string());
    out.join("\n")
}

pub fn format_verify_json(report: &VerifyReport) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Rendered tree followed by a summary table
pub fn format_tree_text(report: &TreeReport) -> String {
    let mut out = Vec::new();
    push_tree(&mut out, &report.tree);
    out.push(String::new());
    out.push(root_line(report.root_digest.as_ref()));
    out.push(String::new());

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Leaves", "Height", "Nodes"]);
    table.add_row(vec![
        report.leaf_count.to_string(),
        report.height.to_string(),
        report.node_count.to_string(),
    ]);
    out.push(table.to_string());
    out.join("\n")
}

pub fn format_tree_json(report: &TreeReport) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(report)?)
}

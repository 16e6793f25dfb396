//! The debug command: load a stylesheet and an optional tree, then print,
//! query or compute styles.

use frameskin_style::parser::{ParseOptions, UnknownPropertyPolicy, parse_selector_list, parse_stylesheet_with};
use frameskin_style::print::render;
use frameskin_style::selector::query;
use frameskin_style::tree::{AdhocTree, NodeId};
use frameskin_style::{StyleTree, Stylesheet};

use crate::cli::Cli;
use crate::error::DebugError;

/// Run every requested operation and return the combined output.
///
/// Nothing is returned on failure, so a caller never prints partial output.
pub fn run(cli: &Cli) -> Result<String, DebugError> {
    let options = ParseOptions::new().with_unknown_properties(if cli.accept_unknown_properties {
        UnknownPropertyPolicy::Accept
    } else {
        UnknownPropertyPolicy::Reject
    });

    let sheet = match &cli.css_file {
        Some(path) => Stylesheet::from_file_with(path, &options)?,
        None => parse_stylesheet_with(cli.css.as_deref().unwrap_or_default(), &options)?,
    };
    let tree = cli.tree.as_deref().map(AdhocTree::parse).transpose()?;
    tracing::debug!(
        "loaded {} rules{}",
        sheet.len(),
        if tree.is_some() { " and a tree" } else { "" }
    );

    let mut output = String::new();

    if cli.print_css {
        output.push_str(&render(&sheet));
    }

    if cli.print_tree {
        let tree = tree.as_ref().ok_or(DebugError::MissingTree("--print-tree requires"))?;
        output.push_str(&format!("{}\n", tree));
    }

    if let Some(selector) = cli.query_tree_indices.as_deref().filter(|s| !s.is_empty()) {
        let tree = tree.as_ref().ok_or(DebugError::MissingTree("selector queries require"))?;
        let list = parse_selector_list(selector)?;
        for node in query(tree, tree.root(), &list) {
            output.push_str(&match_line(tree, node));
        }
    }

    if let Some(path) = &cli.compute_style {
        let tree = tree.as_ref().ok_or(DebugError::MissingTree("--compute-style requires"))?;
        let node = tree
            .node_at_path(path)
            .ok_or_else(|| DebugError::InvalidTreeIndex(path.clone()))?;
        output.push_str(&sheet.compute_style(tree, node).to_string());
    }

    Ok(output)
}

/// `match:` followed by the node's child indices, one space before each.
fn match_line(tree: &AdhocTree, node: NodeId) -> String {
    let mut line = String::from("match:");
    for index in tree.path(node) {
        line.push_str(&format!(" {}", index));
    }
    tracing::trace!("matched {:?} ({:?})", node, tree.element_name(node));
    line.push('\n');
    line
}

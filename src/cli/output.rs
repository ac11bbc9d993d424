//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;
use itertools::Itertools;

use crate::domain::{RtfNodeType, RtfTreeNode};

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print plain output (no color, for data consumed by scripts)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Print one node as a row: index, kind, key and (optionally) parameter.
pub fn node_row(index: usize, node: &RtfTreeNode, show_parameters: bool) {
    println!("{}", format_node_row(index, node, show_parameters));
}

pub fn format_node_row(index: usize, node: &RtfTreeNode, show_parameters: bool) -> String {
    let kind = match node.node_type {
        RtfNodeType::Keyword => node.node_type.to_string().green(),
        RtfNodeType::Control => node.node_type.to_string().yellow(),
        RtfNodeType::Text => node.node_type.to_string().normal(),
        _ => node.node_type.to_string().dimmed(),
    };
    let mut columns = vec![format!("{:>4}", index), format!("{:<8}", kind), format!("{:?}", node.key)];
    if show_parameters && node.has_parameter {
        columns.push(node.parameter.to_string().cyan().to_string());
    }
    columns.iter().join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_keyword_with_parameter_when_formatted_then_has_all_columns() {
        colored::control::set_override(false);
        let row = format_node_row(2, &RtfTreeNode::keyword("fs", Some(24)), true);
        assert_eq!(row, "   2  keyword   \"fs\"  24");
    }

    #[test]
    fn given_parameters_hidden_when_formatted_then_drops_parameter() {
        colored::control::set_override(false);
        let row = format_node_row(0, &RtfTreeNode::keyword("fs", Some(24)), false);
        assert_eq!(row, "   0  keyword   \"fs\"");
    }
}

//! Text, table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use navtree_entity::tree::{Tree, TreeNode};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Indented outline
    #[default]
    Text,
    /// Human-readable table
    Table,
    /// JSON output
    Json,
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
            println!("{}", json);
        }
        _ => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                println!("{}", Table::new(items));
            }
        }
    }
}

/// Print a single item in the selected format
pub fn print_item<T: Serialize + std::fmt::Debug>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
            println!("{}", json);
        }
        _ => println!("{:#?}", item),
    }
}

/// Print a tree as an indented outline.
///
/// `▾`/`▸` mark expanded/collapsed nodes with children, `[x]`/`[ ]` a
/// checkbox, `*` a selected node and `-` a node that cannot be selected.
pub fn print_tree(tree: &Tree) {
    if tree.roots.is_empty() {
        println!("(empty tree)");
        return;
    }
    for visit in tree.iter() {
        println!("{}{}", "  ".repeat(visit.level - 1), outline_line(visit.node));
    }
}

fn outline_line(node: &TreeNode) -> String {
    let fold = match (node.has_children, node.expanded) {
        (false, _) => ' ',
        (true, true) => '▾',
        (true, false) => '▸',
    };
    let mut line = format!("{fold} ");
    if node.show_checkbox {
        line.push_str(if node.selected { "[x] " } else { "[ ] " });
    }
    line.push_str(&node.text);
    line.push_str(&format!(" ({})", node.data_id));
    if node.selected {
        line.push_str(" *");
    }
    if !node.selectable {
        line.push_str(" -");
    }
    if let Some(url) = &node.navigate_url {
        line.push_str(&format!(" -> {url}"));
    }
    line
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{}:", key), value);
}

//! Tree building CLI command.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use navtree_auth::{RbacPolicies, RolePermissionOracle};
use navtree_core::config::AppConfig;
use navtree_core::error::AppError;
use navtree_core::types::{ContainerId, ScopeId};
use navtree_entity::tree::Tree;
use navtree_service::{BuildOptions, RegexSanitizer, TracingErrorSink, TreeBuilder};
use navtree_store::GalleryFixture;

/// Arguments for the tree command
#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Gallery fixture (JSON) to build from
    #[arg(long)]
    pub fixture: PathBuf,
    /// Build for this user (anonymous when omitted)
    #[arg(short, long)]
    pub user: Option<String>,
    /// Build from a single root container
    #[arg(short, long)]
    pub root: Option<ContainerId>,
    /// Render the root container itself as the top node
    #[arg(long, requires = "root")]
    pub include_root: bool,
    /// Scopes to include (all fixture scopes when omitted)
    #[arg(short, long = "scope", conflicts_with = "root")]
    pub scopes: Vec<ScopeId>,
    /// Levels to materialize (config default when omitted)
    #[arg(short, long)]
    pub depth: Option<u32>,
    /// Containers to pin open and select
    #[arg(short, long = "pin")]
    pub pins: Vec<ContainerId>,
    /// Navigation link template, e.g. `/album/{ContainerId}`
    #[arg(long)]
    pub navigate_url: Option<String>,
    /// Render checkboxes on selectable nodes
    #[arg(long)]
    pub checkboxes: bool,
}

/// Tree node display row
#[derive(Debug, Serialize, Tabled)]
struct NodeRow {
    /// Depth in the tree
    level: usize,
    /// Container ID
    id: String,
    /// Display text
    text: String,
    /// Selectable
    selectable: bool,
    /// Checkbox shown
    checkbox: bool,
    /// Selected
    selected: bool,
    /// Expanded
    expanded: bool,
    /// Has children
    children: bool,
    /// Link target
    url: String,
}

/// Execute the tree command
pub async fn execute(
    args: &TreeArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let fixture = GalleryFixture::load(&args.fixture)?;

    let repo = Arc::new(fixture.to_repository());
    let oracle = RolePermissionOracle::new(
        RbacPolicies::from_fixture(&fixture),
        config.access.clone(),
    );
    let subject = oracle.subject_for(args.user.as_deref());

    let builder = TreeBuilder::new(
        repo,
        Arc::new(oracle),
        Arc::new(RegexSanitizer),
        Arc::new(TracingErrorSink),
    );

    let options = build_options(args, config, &fixture);
    let tree = builder.build(&options, &subject).await?;

    match format {
        OutputFormat::Text => output::print_tree(&tree),
        OutputFormat::Table => output::print_list(&rows(&tree), format),
        OutputFormat::Json => output::print_item(&tree, format),
    }

    Ok(())
}

/// Merge the command line over the configured tree defaults.
fn build_options(args: &TreeArgs, config: &AppConfig, fixture: &GalleryFixture) -> BuildOptions {
    let mut options = BuildOptions::from_config(&config.tree);

    options = match args.root {
        Some(root) => options.with_root(root, args.include_root),
        None if args.scopes.is_empty() => options.with_scopes(fixture.scopes.iter().map(|s| s.id)),
        None => options.with_scopes(args.scopes.iter().copied()),
    };
    if let Some(depth) = args.depth {
        options = options.with_depth(depth);
    }
    if let Some(template) = &args.navigate_url {
        options = options.with_navigate_url(template.clone());
    }
    if args.checkboxes {
        options = options.with_checkboxes(true);
    }
    options.with_pinned(args.pins.iter().copied())
}

fn rows(tree: &Tree) -> Vec<NodeRow> {
    tree.iter()
        .map(|visit| NodeRow {
            level: visit.level,
            id: visit.node.data_id.clone(),
            text: visit.node.text.clone(),
            selectable: visit.node.selectable,
            checkbox: visit.node.show_checkbox,
            selected: visit.node.selected,
            expanded: visit.node.expanded,
            children: visit.node.has_children,
            url: visit.node.navigate_url.clone().unwrap_or_default(),
        })
        .collect()
}

//! Forest root resolution and top-level node construction.

use std::collections::HashSet;

use tracing::debug;

use navtree_core::error::{AppError, ErrorKind};
use navtree_core::result::AppResult;
use navtree_entity::container::Container;
use navtree_entity::tree::{CSS_FOREST_TOP, TreeNode};

use crate::options::BuildOptions;

use super::attributes::expand_root_label;
use super::{BuildContext, TreeBuilder};

impl TreeBuilder {
    /// Resolves the containers that become forest roots, in order.
    ///
    /// With a root container the forest is that container or its children.
    /// Otherwise it is the top container of each scope; scopes without one,
    /// or whose lookup fails, are skipped and a top container is never
    /// listed twice. Only a root container that cannot be loaded is fatal.
    pub async fn resolve_forest_roots(&self, options: &BuildOptions) -> AppResult<Vec<Container>> {
        if let Some(root_id) = options.root_container_id {
            let root = self.repo.load(root_id, true).await.map_err(|err| {
                if err.is(ErrorKind::NotFound) {
                    AppError::with_source(
                        ErrorKind::Configuration,
                        format!("Root container {root_id} does not exist"),
                        err,
                    )
                } else {
                    err
                }
            })?;

            if options.include_root_container {
                return Ok(vec![root]);
            }
            return Ok(root.child_containers());
        }

        let mut seen = HashSet::new();
        let mut roots = Vec::with_capacity(options.scopes.len());
        for scope_id in &options.scopes {
            let lookup = self.repo.top_container(*scope_id).await;
            let top = self.absorb(lookup, *scope_id, || {
                format!("top container of scope {scope_id}")
            });
            match top {
                Some(top) if seen.insert(top.id) => roots.push(top),
                Some(top) => debug!(
                    scope_id = %scope_id,
                    container_id = %top.id,
                    "Top container already in forest"
                ),
                None => debug!(scope_id = %scope_id, "Scope has no top container, skipping"),
            }
        }
        Ok(roots)
    }

    /// Builds the node of a forest root, or `None` when the subject may not
    /// view it. A pinned root is opened one level even at depth 1.
    pub(super) async fn build_root_node(
        &self,
        ctx: &BuildContext<'_>,
        container: Container,
    ) -> Option<TreeNode> {
        if !self.can_view(ctx, &container) {
            return None;
        }

        let depth = ctx.options.depth;
        let pinned = ctx.options.is_pinned(container.id);
        let label = self.root_label(ctx, &container).await;
        let mut node = TreeNode::new(container.id, label);
        node.expanded = depth > 1 || pinned;
        if container.is_root() {
            node.add_css_class(CSS_FOREST_TOP);
        }
        self.apply_selection(ctx, &container, &mut node, false);
        node.selected = pinned;

        if depth == 1 && !pinned {
            if !ctx.single_root() && container.is_root() {
                // Scope tops always hold albums in practice; skip the probe.
                node.has_children = true;
            } else {
                let probe = self.repo.has_any_child_container(container.id).await;
                node.has_children = self.absorb(probe, container.scope_id, || {
                    format!("child probe of forest root {}", container.id)
                });
            }
            return Some(node);
        }

        let children = if container.is_inflated() {
            container.child_containers()
        } else {
            let listing = self.repo.child_containers(container.id, true).await;
            self.absorb(listing, container.scope_id, || {
                format!("children of forest root {}", container.id)
            })
        };
        node.has_children = !children.is_empty();
        self.attach_children(ctx, children, &mut node, depth > 2, depth.saturating_sub(2))
            .await;

        Some(node)
    }

    /// Label of a top-level node: the scope prefix followed by the title.
    ///
    /// A scope that cannot be read contributes an empty description.
    async fn root_label(&self, ctx: &BuildContext<'_>, container: &Container) -> String {
        let template = &ctx.options.root_label_template;
        let prefix = if template.is_empty() {
            String::new()
        } else {
            let lookup = self.repo.scope(container.scope_id).await;
            let description = self
                .absorb(lookup, container.scope_id, || {
                    format!("scope of forest root {}", container.id)
                })
                .map(|scope| scope.description)
                .unwrap_or_default();
            expand_root_label(template, container.scope_id, &description)
        };
        self.sanitizer
            .strip_markup(&format!("{prefix}{}", container.title))
    }
}

//! Bounded-depth child materialization.

use futures::FutureExt;
use futures::future::BoxFuture;
use tracing::debug;

use navtree_entity::container::Container;
use navtree_entity::tree::TreeNode;

use super::{BuildContext, TreeBuilder};

impl TreeBuilder {
    /// Appends a node for every viewable container in `containers` to
    /// `parent`, in the given order.
    ///
    /// `budget` is the number of further levels to materialize below the
    /// new nodes; nodes whose children get materialized are `expand`ed.
    /// Pinned containers are forced open and selected, and get one more
    /// level of children even when the budget is spent.
    pub(super) fn attach_children<'a>(
        &'a self,
        ctx: &'a BuildContext<'a>,
        containers: Vec<Container>,
        parent: &'a mut TreeNode,
        expand: bool,
        budget: u32,
    ) -> BoxFuture<'a, ()> {
        async move {
            let parent_shows_checkbox = parent.show_checkbox;

            for container in containers {
                if !self.can_view(ctx, &container) {
                    continue;
                }

                let mut node = TreeNode::new(container.id, self.node_text(&container));
                node.expanded = expand;
                self.apply_selection(ctx, &container, &mut node, parent_shows_checkbox);

                let pinned = ctx.options.is_pinned(container.id);
                if pinned {
                    node.expanded = true;
                    node.selected = true;
                }

                if budget > 0 || pinned {
                    let listing = self.repo.child_containers(container.id, true).await;
                    let children = self.absorb(listing, container.scope_id, || {
                        format!("children of {}", container.id)
                    });
                    node.has_children = !children.is_empty();

                    let next_budget = budget.saturating_sub(1);
                    self.attach_children(ctx, children, &mut node, next_budget > 0, next_budget)
                        .await;
                } else {
                    let probe = self.repo.has_any_child_container(container.id).await;
                    node.has_children = self.absorb(probe, container.scope_id, || {
                        format!("child probe of {}", container.id)
                    });
                }

                debug!(
                    container_id = %container.id,
                    selectable = node.selectable,
                    has_children = node.has_children,
                    children = node.children.len(),
                    "Attached node"
                );
                parent.push_child(node);
            }
        }
        .boxed()
    }
}

//! Pinned-path reconciliation.
//!
//! After the bounded tree exists, every pinned container that is not yet in
//! it is spliced in:
//! - load the pinned container and walk up through its ancestors until one
//!   of them already has a node;
//! - fetch the full child list of every node on the path that has none yet,
//!   so siblings stay visible;
//! - walk back down from that node attaching those lists, open every node on
//!   the path and leave the pinned node selected.
//!
//! All queries run before the tree is touched. A pin whose path cannot be
//! read is recorded (a vanished container as a stale reference) and skipped
//! with the tree unchanged. A path that never meets the tree, or that
//! crosses a container the subject may not view, is dropped without a trace.
//! Only an inconsistent hierarchy aborts the build.

use std::collections::HashMap;

use tracing::{debug, warn};

use navtree_core::error::{AppError, ErrorKind};
use navtree_core::result::AppResult;
use navtree_core::types::ContainerId;
use navtree_entity::container::Container;
use navtree_entity::tree::Tree;

use super::{BuildContext, TreeBuilder};

/// What happened to one pinned id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PinOutcome {
    /// The path was spliced into the tree.
    Spliced,
    /// No ancestor of the container is part of the tree.
    Unreachable,
    /// The subject may not view some container on the path.
    Hidden,
}

impl TreeBuilder {
    /// Splices every missing pinned container into the tree.
    pub(super) async fn reconcile_pinned(
        &self,
        ctx: &BuildContext<'_>,
        tree: &mut Tree,
    ) -> AppResult<()> {
        for &pinned_id in &ctx.options.pinned_ids {
            if tree.contains(&pinned_id.to_string()) {
                continue;
            }

            match self.splice_pinned_path(ctx, tree, pinned_id).await {
                Ok(outcome) => {
                    debug!(
                        pinned_id = %pinned_id,
                        outcome = ?outcome,
                        "Reconciled pinned container"
                    );
                }
                Err(err) if err.is(ErrorKind::Consistency) => return Err(err),
                Err(err) => {
                    warn!(
                        pinned_id = %pinned_id,
                        kind = %err.kind,
                        "Pinned path could not be read, skipping"
                    );
                    self.errors.record_error(&err, None);
                }
            }
        }
        Ok(())
    }

    async fn splice_pinned_path(
        &self,
        ctx: &BuildContext<'_>,
        tree: &mut Tree,
        pinned_id: ContainerId,
    ) -> AppResult<PinOutcome> {
        let pinned = self
            .load_for_pin(pinned_id, pinned_id, "loading the pinned container")
            .await?;

        // Ancestor chain, pinned container first, nearest tree member last.
        let mut chain = vec![pinned];
        let anchor_id = loop {
            let Some(parent_id) = chain.last().and_then(|c| c.parent_id) else {
                return Ok(PinOutcome::Unreachable);
            };
            let parent = self
                .load_for_pin(parent_id, pinned_id, "walking up the ancestor chain")
                .await?;
            chain.push(parent);
            if tree.contains(&parent_id.to_string()) {
                break parent_id;
            }
        };
        chain.pop();

        if chain.iter().any(|container| !self.can_view(ctx, container)) {
            return Ok(PinOutcome::Hidden);
        }

        // Nodes below the anchor are not in the tree yet, so they always need
        // their listing. The pinned node itself is never listed.
        let anchor_listed = tree
            .find_node_by_data_id(&anchor_id.to_string())
            .is_some_and(|node| !node.children.is_empty());
        let parents = (!anchor_listed)
            .then_some(anchor_id)
            .into_iter()
            .chain(chain.iter().skip(1).map(|container| container.id));
        let mut listings = HashMap::new();
        for parent_id in parents {
            let siblings = self
                .repo
                .child_containers(parent_id, true)
                .await
                .map_err(|err| annotate_pin_error(err, parent_id, pinned_id, "listing siblings"))?;
            listings.insert(parent_id, siblings);
        }

        let mut current_id = anchor_id;
        let mut current = tree
            .find_node_by_data_id_mut(&anchor_id.to_string())
            .ok_or_else(|| missing_in_tree(anchor_id, pinned_id))?;
        current.expanded = true;

        while let Some(container) = chain.pop() {
            if let Some(siblings) = listings.remove(&current_id) {
                current.has_children |= !siblings.is_empty();
                self.attach_children(ctx, siblings, current, false, 0).await;
            }

            current = current
                .child_mut(&container.id.to_string())
                .ok_or_else(|| missing_in_tree(container.id, pinned_id))?;
            current.expanded = true;
            current_id = container.id;
        }

        // The walk always ends on the pinned node, which stays open.
        current.selected = true;

        Ok(PinOutcome::Spliced)
    }

    /// Loads a container on a pinned path.
    async fn load_for_pin(
        &self,
        id: ContainerId,
        pinned_id: ContainerId,
        step: &str,
    ) -> AppResult<Container> {
        self.repo
            .load(id, false)
            .await
            .map_err(|err| annotate_pin_error(err, id, pinned_id, step))
    }
}

/// Annotates an error met on a pinned path with the pinned id and the step
/// that hit it. A not-found error becomes a stale reference.
fn annotate_pin_error(
    err: AppError,
    id: ContainerId,
    pinned_id: ContainerId,
    step: &str,
) -> AppError {
    let err = if err.is(ErrorKind::NotFound) {
        AppError::stale_reference(
            format!("Container {id} vanished while reconciling pinned container {pinned_id}"),
            err,
        )
    } else {
        err
    };
    err.with_note(format!("pinned_id={pinned_id}"))
        .with_note(format!("step={step}"))
}

fn missing_in_tree(id: ContainerId, pinned_id: ContainerId) -> AppError {
    AppError::consistency(format!(
        "Container {id} is missing under its parent's node while splicing pinned container \
         {pinned_id}"
    ))
}

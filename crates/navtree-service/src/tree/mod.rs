//! Navigation tree building.
//!
//! A build runs in three phases:
//! 1. Root resolution: a single root container (or its children), or the
//!    top container of each requested scope.
//! 2. Bounded descent: children are materialized down to `depth` levels,
//!    omitting every container the subject may not view.
//! 3. Pinned-path reconciliation: pinned containers deeper than `depth` are
//!    spliced in by walking up to the nearest node already in the tree and
//!    materializing the sibling-inclusive path back down.

mod attributes;
mod descent;
mod pinned;
mod roots;

use std::fmt;
use std::sync::Arc;

use tracing::{Instrument, info, info_span};
use uuid::Uuid;
use validator::Validate;

use navtree_auth::PermissionOracle;
use navtree_core::error::{AppError, ErrorKind};
use navtree_core::result::AppResult;
use navtree_core::traits::{ErrorSink, Sanitizer};
use navtree_core::types::{ScopeId, Subject};
use navtree_entity::tree::Tree;
use navtree_store::ContainerRepository;

use crate::options::BuildOptions;

/// Builds permission-filtered navigation trees.
///
/// Stateless across builds; every collaborator is read-only while a build
/// runs, so one builder can serve concurrent requests.
#[derive(Clone)]
pub struct TreeBuilder {
    /// Container access.
    repo: Arc<dyn ContainerRepository>,
    /// Authorization answers.
    oracle: Arc<dyn PermissionOracle>,
    /// Display text cleanup.
    sanitizer: Arc<dyn Sanitizer>,
    /// Destination for absorbed errors.
    errors: Arc<dyn ErrorSink>,
}

/// Inputs shared by every step of one build.
#[derive(Debug, Clone, Copy)]
struct BuildContext<'a> {
    options: &'a BuildOptions,
    subject: &'a Subject,
}

impl BuildContext<'_> {
    /// Whether the forest hangs off an explicitly requested container.
    fn single_root(&self) -> bool {
        self.options.root_container_id.is_some()
    }
}

impl TreeBuilder {
    /// Creates a new tree builder.
    pub fn new(
        repo: Arc<dyn ContainerRepository>,
        oracle: Arc<dyn PermissionOracle>,
        sanitizer: Arc<dyn Sanitizer>,
        errors: Arc<dyn ErrorSink>,
    ) -> Self {
        Self {
            repo,
            oracle,
            sanitizer,
            errors,
        }
    }

    /// Builds the navigation tree for a subject.
    ///
    /// Fails only when the options are invalid, the requested root container
    /// cannot be loaded, or the containment hierarchy turns out to be
    /// inconsistent. Any other failed repository query is recorded through
    /// the error sink and the affected container or pin is left out.
    pub async fn build(&self, options: &BuildOptions, subject: &Subject) -> AppResult<Tree> {
        options.validate()?;

        let span = info_span!(
            "tree_build",
            build_id = %Uuid::new_v4(),
            depth = options.depth,
            root = ?options.root_container_id,
            pinned = options.pinned_ids.len(),
        );

        async move {
            let ctx = BuildContext { options, subject };
            let mut tree = Tree::empty(options.checkbox_mode_enabled);

            for container in self.resolve_forest_roots(options).await? {
                if let Some(node) = self.build_root_node(&ctx, container).await {
                    tree.roots.push(node);
                }
            }

            if !options.pinned_ids.is_empty() {
                self.reconcile_pinned(&ctx, &mut tree).await?;
            }

            info!(
                roots = tree.roots.len(),
                nodes = tree.node_count(),
                "Built navigation tree"
            );
            Ok(tree)
        }
        .instrument(span)
        .await
    }

    /// Records a failed per-container query and substitutes an empty answer.
    ///
    /// A not-found answer for an already-referenced container becomes a
    /// stale reference; any other failure is recorded with its own kind.
    fn absorb<T: Default>(
        &self,
        result: AppResult<T>,
        scope_id: ScopeId,
        note: impl FnOnce() -> String,
    ) -> T {
        match result {
            Ok(value) => value,
            Err(err) => {
                let err = if err.is(ErrorKind::NotFound) {
                    AppError::stale_reference("Container vanished during tree build", err)
                } else {
                    err
                };
                self.errors.record_error(&err.with_note(note()), Some(scope_id));
                T::default()
            }
        }
    }
}

impl fmt::Debug for TreeBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeBuilder").finish_non_exhaustive()
    }
}

//! Node attribute rules: labels, links, visibility and selectability.

use navtree_auth::AuthorizationRequest;
use navtree_core::types::{Capability, ContainerId, MatchMode, ScopeId};
use navtree_entity::container::Container;
use navtree_entity::tree::{CSS_DISABLED, TreeNode};

use super::{BuildContext, TreeBuilder};

const VIEW: &[Capability] = &[Capability::ViewAlbumOrMediaObject];

impl TreeBuilder {
    /// Whether the subject may see the container at all.
    pub(super) fn can_view(&self, ctx: &BuildContext<'_>, container: &Container) -> bool {
        self.oracle.is_authorized(&AuthorizationRequest::for_container(
            VIEW,
            ctx.subject,
            container,
            MatchMode::AnyOf,
        ))
    }

    /// Whether the subject holds the capabilities that make a node selectable.
    fn holds_required(&self, ctx: &BuildContext<'_>, container: &Container) -> bool {
        self.oracle.is_authorized(&AuthorizationRequest::for_container(
            &ctx.options.required_capabilities,
            ctx.subject,
            container,
            ctx.options.capability_match,
        ))
    }

    /// Markup-free display text for a non-root node.
    pub(super) fn node_text(&self, container: &Container) -> String {
        self.sanitizer.strip_markup(&container.title)
    }

    /// Applies the link/selection rule to a fresh node.
    ///
    /// A linked node is always selectable and never shows a checkbox. An
    /// unlinked node is selectable when the container is real and the
    /// subject holds the required capabilities; it shows a checkbox only in
    /// checkbox mode and only when its parent does not show one.
    pub(super) fn apply_selection(
        &self,
        ctx: &BuildContext<'_>,
        container: &Container,
        node: &mut TreeNode,
        parent_shows_checkbox: bool,
    ) {
        if let Some(url) = navigate_url(ctx.options.navigate_url_template.as_deref(), container) {
            node.navigate_url = Some(url);
            node.selectable = true;
            node.show_checkbox = false;
            return;
        }

        node.selectable = !container.is_virtual && self.holds_required(ctx, container);
        node.show_checkbox =
            node.selectable && ctx.options.checkbox_mode_enabled && !parent_shows_checkbox;
        if !node.selectable {
            node.add_css_class(CSS_DISABLED);
        }
    }
}

/// Expands the navigation template for a container.
///
/// Virtual containers never link. `{ContainerId}` is substituted; a template
/// without the token gets an `aid` query parameter.
pub(super) fn navigate_url(template: Option<&str>, container: &Container) -> Option<String> {
    let template = template.filter(|t| !t.trim().is_empty())?;
    if container.is_virtual {
        return None;
    }
    Some(link_for(template, container.id))
}

fn link_for(template: &str, id: ContainerId) -> String {
    if template.contains("{ContainerId}") {
        return template.replace("{ContainerId}", &id.to_string());
    }
    let separator = if template.contains('?') { '&' } else { '?' };
    format!("{template}{separator}aid={id}")
}

/// Substitutes the scope tokens of a root label template.
pub(super) fn expand_root_label(template: &str, scope_id: ScopeId, description: &str) -> String {
    template
        .replace("{ScopeId}", &scope_id.to_string())
        .replace("{ScopeDescription}", description)
}

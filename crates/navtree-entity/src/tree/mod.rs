//! Navigation tree structures for hierarchical display.

pub mod node;
pub mod view;

pub use node::{CSS_DISABLED, CSS_FOREST_TOP, TreeNode};
pub use view::{NodeVisit, Tree};

//! Pruner Service
//!
//! Applies configured prune rules to a flattened tree in place.

use crate::domain::entities::{NodeId, Vfs};
use crate::domain::value_objects::PruneRule;

/// Apply `rules` in order under `root`. Rules whose path does not exist are
/// skipped; nothing is created. Returns the number of removed children.
pub fn apply_prune_rules(vfs: &mut Vfs, root: NodeId, rules: &[PruneRule]) -> usize {
    let mut removed = 0;
    for rule in rules {
        let Some(target) = vfs.find_path(root, &rule.path) else {
            tracing::debug!(path = %rule.path, "prune target not found, skipping rule");
            continue;
        };
        let count = vfs.remove_children_where(target, |name| rule.removes(name));
        tracing::debug!(path = %rule.path, removed = count, "applied prune rule");
        removed += count;
    }
    removed
}

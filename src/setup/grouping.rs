//! Grouping of available payment methods
//!
//! Methods sharing a group type collapse into one merged method. Ungrouped
//! methods get a key of their own so they never merge with each other.

use crate::payment_method::Groupable;
use std::collections::HashMap;
use tracing::trace;

/// Key a payment method is grouped under
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
    /// Shared group type
    Type(String),
    /// Ungrouped method at this position in the decoded sequence
    Unique(usize),
}

impl GroupKey {
    /// Key for the method at `index`
    pub fn of<M: Groupable>(index: usize, method: &M) -> Self {
        match method.group_type() {
            Some(group_type) => GroupKey::Type(group_type.to_string()),
            None => GroupKey::Unique(index),
        }
    }
}

/// Partition methods by group key, in order of each key's first occurrence
pub fn partition<M: Groupable>(methods: Vec<M>) -> Vec<(GroupKey, Vec<M>)> {
    let mut groups: Vec<(GroupKey, Vec<M>)> = Vec::new();
    let mut positions: HashMap<GroupKey, usize> = HashMap::new();

    for (index, method) in methods.into_iter().enumerate() {
        let key = GroupKey::of(index, &method);
        match positions.get(&key) {
            Some(&position) => groups[position].1.push(method),
            None => {
                positions.insert(key.clone(), groups.len());
                groups.push((key, vec![method]));
            }
        }
    }

    groups
}

/// Partition, merge every multi-member group, and flatten
///
/// Singleton groups keep their member as-is. Groups `merge` refuses are
/// dropped.
pub fn group_methods<M, F>(methods: Vec<M>, mut merge: F) -> Vec<M>
where
    M: Groupable,
    F: FnMut(Vec<M>) -> Option<M>,
{
    partition(methods)
        .into_iter()
        .filter_map(|(key, mut members)| {
            if members.len() == 1 {
                return members.pop();
            }
            let size = members.len();
            let merged = merge(members);
            if merged.is_none() {
                trace!(?key, size, "Dropped payment method group that could not be merged");
            }
            merged
        })
        .collect()
}

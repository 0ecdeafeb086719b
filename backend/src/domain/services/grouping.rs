//! Partition flat child rows into per-parent lists.
//!
//! Every hydrated field depends on this step: rows arrive from the store as
//! one flat list per relation, already sorted by the relation's order key,
//! and are split into parent-keyed sub-lists here without reordering.

use std::collections::HashMap;
use std::hash::Hash;

/// Child rows grouped by the key of their owning parent.
///
/// Keys with no rows are absent; [`GroupedRows::get`] returns an empty slice
/// for them, so callers never need to special-case a missing relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedRows<K: Eq + Hash, R> {
    groups: HashMap<K, Vec<R>>,
}

impl<K: Eq + Hash, R> Default for GroupedRows<K, R> {
    fn default() -> Self {
        Self {
            groups: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, R> GroupedRows<K, R> {
    /// Rows owned by `key`, in input order. Empty when the key has none.
    #[must_use]
    pub fn get(&self, key: &K) -> &[R] {
        self.groups.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether at least one row was grouped under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.groups.contains_key(key)
    }

    /// Number of distinct keys with at least one row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no rows were grouped at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate over the keys that own rows. Iteration order is unspecified.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.keys()
    }

    /// Transform every row while keeping keys and per-key order.
    pub fn map_rows<T>(self, mut f: impl FnMut(R) -> T) -> GroupedRows<K, T> {
        GroupedRows {
            groups: self
                .groups
                .into_iter()
                .map(|(key, rows)| (key, rows.into_iter().map(&mut f).collect()))
                .collect(),
        }
    }

    /// Consume the index and return the underlying map.
    #[must_use]
    pub fn into_inner(self) -> HashMap<K, Vec<R>> {
        self.groups
    }
}

/// Group `rows` by `key_of`, preserving input order within each group.
///
/// The caller is responsible for sorting beforehand; rows are appended to
/// their group in the order they are yielded.
///
/// # Examples
/// ```
/// use studio_backend::domain::services::group_by;
///
/// let rows = vec![(1, "a"), (2, "b"), (1, "c")];
/// let grouped = group_by(rows, |row| row.0);
/// assert_eq!(grouped.get(&1), &[(1, "a"), (1, "c")]);
/// assert!(grouped.get(&3).is_empty());
/// ```
pub fn group_by<K, R>(
    rows: impl IntoIterator<Item = R>,
    key_of: impl Fn(&R) -> K,
) -> GroupedRows<K, R>
where
    K: Eq + Hash,
{
    let mut groups: HashMap<K, Vec<R>> = HashMap::new();
    for row in rows {
        groups.entry(key_of(&row)).or_default().push(row);
    }
    GroupedRows { groups }
}

use std::{collections::HashMap, fmt::Debug, hash::Hash};

use indexmap::{map, IndexMap};

use crate::{error::KeyNotFound, pair};

pub type Items<'a, T> = std::iter::Chain<map::Iter<'a, T, T>, map::Iter<'a, T, T>>;

/// Bidirectional map where left and right elements share one type and one
/// lookup namespace.
///
/// Every association `l -> r` is stored twice: once in `left2right` and once,
/// inverted, in `right2left`. Lookups try the forward direction first, so a
/// right element that also appears as a left key is shadowed by the forward
/// entry. [`BiMap::len`] and [`BiMap::items`] see both directions, which means
/// each association is counted and yielded twice. Both stores keep insertion
/// order.
///
/// Serialized as the forward store alone; deserializing rebuilds the backward
/// store with [`BiMap::from_pairs`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(
    from = "IndexMap<T, T>",
    into = "IndexMap<T, T>",
    bound(
        serialize = "T: serde::Serialize + Clone",
        deserialize = "T: serde::Deserialize<'de> + Clone"
    )
)]
pub struct BiMap<T: Eq + Hash> {
    left2right: IndexMap<T, T>,
    right2left: IndexMap<T, T>,
}

impl<T: Eq + Hash> Default for BiMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> BiMap<T> {
    pub fn new() -> Self {
        Self {
            left2right: Default::default(),
            right2left: Default::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            left2right: IndexMap::with_capacity(capacity),
            right2left: IndexMap::with_capacity(capacity),
        }
    }

    pub fn get(&self, x: &T) -> Option<&T> {
        self.left2right.get(x).or_else(|| self.right2left.get(x))
    }

    pub fn get_or<'a>(&'a self, x: &T, default: &'a T) -> &'a T {
        self.get(x).unwrap_or(default)
    }

    pub fn contains(&self, x: &T) -> bool {
        self.left2right.contains_key(x) || self.right2left.contains_key(x)
    }

    /// Forward plus backward entry count, i.e. twice the number of
    /// associations while both directions agree.
    pub fn len(&self) -> usize {
        self.left2right.len() + self.right2left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        log::trace!("clearing {} entries", self.len());
        self.left2right.clear();
        self.right2left.clear();
    }

    /// Forward entries, then backward entries, each in insertion order.
    pub fn items(&self) -> Items<'_, T> {
        self.left2right.iter().chain(self.right2left.iter())
    }

    pub fn iter(&self) -> Items<'_, T> {
        self.items()
    }

    pub fn keys(&self) -> impl Iterator<Item = &T> + Clone + '_ {
        self.items().map(pair::fst)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + Clone + '_ {
        self.items().map(pair::snd)
    }
}

impl<T: Eq + Hash + Clone> BiMap<T> {
    /// Builds the forward direction from `pairs`, where a repeated left
    /// element keeps its last right element, then inverts it in insertion
    /// order, so a repeated right element points back at the last left
    /// element paired with it.
    pub fn from_pairs<I: IntoIterator<Item = (T, T)>>(pairs: I) -> Self {
        let left2right: IndexMap<T, T> = pairs.into_iter().collect();
        let right2left = left2right
            .iter()
            .map(|(l, r)| (r.clone(), l.clone()))
            .collect();
        Self {
            left2right,
            right2left,
        }
    }

    /// New map rebuilt from [`BiMap::items`], so both orientations of every
    /// association become forward entries of the copy.
    pub fn copy(&self) -> Self {
        Self::from_pairs(self.items().map(|(l, r)| (l.clone(), r.clone())))
    }
}

impl<T: Eq + Hash + Clone + Debug> BiMap<T> {
    pub fn lookup(&self, x: &T) -> Result<&T, KeyNotFound<T>> {
        self.get(x).ok_or_else(|| KeyNotFound(x.clone()))
    }

    /// Associates `left` with `right` and returns the right element `left`
    /// was previously associated with.
    ///
    /// The backward entry of the previous right element is dropped. If
    /// `right` was already associated with another left element, that left
    /// element keeps its forward entry.
    pub fn insert(&mut self, left: T, right: T) -> Option<T> {
        let previous = self.left2right.insert(left.clone(), right.clone());
        if let Some(previous) = &previous {
            log::trace!("{left:?} moves from {previous:?} to {right:?}");
            self.right2left.shift_remove(previous);
        }
        self.right2left.insert(right, left);
        previous
    }

    /// Merges `other` into both directions without dropping the backward
    /// entries of displaced right elements.
    pub fn update<I: IntoIterator<Item = (T, T)>>(&mut self, other: I) {
        let mut merged = 0usize;
        for (left, right) in other {
            self.right2left.insert(right.clone(), left.clone());
            self.left2right.insert(left, right);
            merged += 1;
        }
        log::trace!("merged {merged} pairs");
    }
}

impl<T: Eq + Hash> std::ops::Index<&T> for BiMap<T> {
    type Output = T;

    fn index(&self, x: &T) -> &T {
        match self.get(x) {
            Some(y) => y,
            None => panic!("key not found in BiMap"),
        }
    }
}

impl<T: Eq + Hash + Clone> FromIterator<(T, T)> for BiMap<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl<T: Eq + Hash + Clone> From<HashMap<T, T>> for BiMap<T> {
    fn from(left2right: HashMap<T, T>) -> Self {
        Self::from_pairs(left2right)
    }
}

impl<T: Eq + Hash + Clone> From<IndexMap<T, T>> for BiMap<T> {
    fn from(left2right: IndexMap<T, T>) -> Self {
        Self::from_pairs(left2right)
    }
}

impl<T: Eq + Hash> From<BiMap<T>> for IndexMap<T, T> {
    fn from(map: BiMap<T>) -> Self {
        map.left2right
    }
}

impl<T: Eq + Hash + Clone, const N: usize> From<[(T, T); N]> for BiMap<T> {
    fn from(pairs: [(T, T); N]) -> Self {
        Self::from_pairs(pairs)
    }
}

impl<T: Eq + Hash + Clone + Debug> Extend<(T, T)> for BiMap<T> {
    fn extend<I: IntoIterator<Item = (T, T)>>(&mut self, iter: I) {
        for (left, right) in iter {
            self.insert(left, right);
        }
    }
}

impl<'a, T: Eq + Hash> IntoIterator for &'a BiMap<T> {
    type Item = (&'a T, &'a T);
    type IntoIter = Items<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items()
    }
}

#[test]
fn test_lookup_both_directions() {
    let map = BiMap::from([("a", "1"), ("b", "2")]);
    assert_eq!(map.lookup(&"a"), Ok(&"1"));
    assert_eq!(map.lookup(&"2"), Ok(&"b"));
    assert_eq!(map.lookup(&"c"), Err(KeyNotFound("c")));
    assert_eq!(map.get_or(&"c", &"none"), &"none");
    assert_eq!(map[&"1"], "a");
    assert_eq!(map.len(), 4);
}

#[test]
fn test_forward_lookup_shadows_backward() {
    // "x" is both a right element (of "y") and a left key (of "z")
    let mut map = BiMap::new();
    map.insert("y", "x");
    map.insert("x", "z");
    assert_eq!(map.get(&"x"), Some(&"z"));
    assert_eq!(map.get(&"z"), Some(&"x"));
    assert_eq!(map.get(&"y"), Some(&"x"));
}

#[test]
fn test_from_pairs_last_left_wins() {
    let map = BiMap::from_pairs([(1, 10), (1, 20)]);
    assert_eq!(map.get(&1), Some(&20));
    assert_eq!(map.get(&20), Some(&1));
    assert_eq!(map.get(&10), None);
    assert_eq!(map.len(), 2);
}

#[test]
fn test_from_pairs_repeated_right_points_at_last_left() {
    for _ in 0..50 {
        let map = BiMap::from_pairs([(1, 10), (2, 10)]);
        assert_eq!(map.get(&10), Some(&2));
        assert_eq!(map.len(), 3);
    }
}

#[test]
fn test_insert_drops_stale_backward_entry() {
    let mut map = BiMap::from([(1, 10)]);
    assert_eq!(map.insert(1, 20), Some(10));
    assert_eq!(map.get(&1), Some(&20));
    assert_eq!(map.get(&20), Some(&1));
    assert!(!map.contains(&10));
    assert_eq!(map.len(), 2);
}

#[test]
fn test_insert_keeps_stale_forward_entry() {
    let mut map = BiMap::from([(1, 10)]);
    assert_eq!(map.insert(2, 10), None);
    assert_eq!(map.get(&10), Some(&2));
    assert_eq!(map.get(&1), Some(&10));
    assert_eq!(map.len(), 3);

    // moving 1 away drops the only backward entry of 10
    map.insert(1, 11);
    assert_eq!(map.get(&10), None);
    assert_eq!(map.get(&2), Some(&10));
    assert_eq!(map.get(&11), Some(&1));
}

#[test]
fn test_update_skips_stale_cleanup() {
    let mut map = BiMap::from([(1, 10)]);
    map.update([(1, 20), (3, 30)]);
    assert_eq!(map.get(&1), Some(&20));
    assert_eq!(map.get(&20), Some(&1));
    assert_eq!(map.get(&30), Some(&3));
    // backward entry of the displaced right element survives
    assert_eq!(map.get(&10), Some(&1));
    assert_eq!(map.len(), 5);
}

#[test]
fn test_extend_cleans_up_like_insert() {
    let mut map = BiMap::from([(1, 10)]);
    map.extend([(1, 20)]);
    assert!(!map.contains(&10));
    assert_eq!(map.len(), 2);
}

#[test]
fn test_clear() {
    let mut map = BiMap::from([(1, 2), (3, 4)]);
    map.clear();
    assert!(map.is_empty());
    assert!(!map.contains(&1));
    assert!(map.lookup(&2).is_err());
}

#[test]
fn test_items_restartable() {
    let map = BiMap::from([(1, 2)]);
    let items = map.items();
    assert_eq!(items.clone().count(), 2);
    assert_eq!(items.count(), 2);
    let pairs = (&map).into_iter().collect::<Vec<_>>();
    assert_eq!(pairs, vec![(&1, &2), (&2, &1)]);
}

#[test]
fn test_copy_is_independent() {
    let map = BiMap::from([(1, 2)]);
    let mut copy = map.copy();
    let mut original_items = map.items().collect::<Vec<_>>();
    let mut copied_items = copy.items().collect::<Vec<_>>();
    original_items.sort();
    copied_items.sort();
    copied_items.dedup();
    assert_eq!(original_items, copied_items);

    copy.insert(5, 6);
    assert!(copy.contains(&5));
    assert!(!map.contains(&5));
}

#[test]
fn test_copy_after_insert_keeps_items() {
    let mut map = BiMap::from([(1, 10)]);
    map.insert(2, 10);
    let items = map.items().collect::<Vec<_>>();
    assert_eq!(items, vec![(&1, &10), (&2, &10), (&10, &2)]);
    for _ in 0..50 {
        let copy = map.copy();
        let original = map.items().collect::<std::collections::HashSet<_>>();
        let copied = copy.items().collect::<std::collections::HashSet<_>>();
        assert_eq!(original, copied);
    }
}

#[test]
fn test_serde_roundtrip() {
    let map = BiMap::from([(1, 2), (3, 4)]);
    let json = serde_json::to_string(&map).unwrap();
    let back: BiMap<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(map, back);
}

#[test]
fn test_serde_keeps_forward_store_only() {
    let map = BiMap::from([(1, 2), (3, 4)]);
    assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"1":2,"3":4}"#);

    let rebuilt: BiMap<i32> = serde_json::from_str(r#"{"1":10,"2":10}"#).unwrap();
    assert_eq!(rebuilt.get(&10), Some(&2));
    assert_eq!(rebuilt.len(), 3);
}

use std::collections::HashSet;

use funkit::{BiMap, KeyNotFound};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Atom {
    Sym(&'static str),
    Num(i64),
}
use Atom::*;

fn sample() -> BiMap<Atom> {
    BiMap::from([(Sym("a"), Num(1)), (Sym("b"), Num(2))])
}

#[test]
fn test_construct_and_lookup() {
    let map = sample();
    assert_eq!(map.lookup(&Sym("a")), Ok(&Num(1)));
    assert_eq!(map.lookup(&Num(1)), Ok(&Sym("a")));
    assert_eq!(map.lookup(&Num(2)), Ok(&Sym("b")));
    assert_eq!(map.len(), 4);
    assert!(map.contains(&Sym("b")));
    assert!(!map.contains(&Num(3)));
    assert_eq!(map.get_or(&Num(3), &Sym("none")), &Sym("none"));
}

#[test]
fn test_construct_last_pair_wins() {
    let map = BiMap::from_pairs([(Sym("k"), Num(10)), (Sym("k"), Num(20))]);
    assert_eq!(map.lookup(&Sym("k")), Ok(&Num(20)));
    assert_eq!(map.lookup(&Num(20)), Ok(&Sym("k")));
    assert!(map.lookup(&Num(10)).is_err());
    assert_eq!(map.len(), 2);
}

#[test]
fn test_set_replaces_association() {
    let mut map = sample();
    map.insert(Sym("a"), Num(42));
    assert_eq!(map.lookup(&Sym("a")), Ok(&Num(42)));
    assert_eq!(map.lookup(&Num(42)), Ok(&Sym("a")));
    assert_eq!(map.lookup(&Num(1)), Err(KeyNotFound(Num(1))));
    assert_eq!(map.len(), 4);
}

#[test]
fn test_set_twice() {
    let mut map = BiMap::new();
    map.insert(Sym("k"), Num(1));
    map.insert(Sym("k"), Num(2));
    assert_eq!(map.lookup(&Sym("k")), Ok(&Num(2)));
    assert_eq!(map.lookup(&Num(2)), Ok(&Sym("k")));
    assert!(map.lookup(&Num(1)).is_err());
}

#[test]
fn test_len_counts_both_directions() {
    let map: BiMap<i64> = (0..10).map(|i| (i, i + 100)).collect();
    assert_eq!(map.len(), 20);
}

#[test]
fn test_clear() {
    let mut map = sample();
    map.clear();
    assert_eq!(map.len(), 0);
    assert!(!map.contains(&Sym("a")));
    assert!(map.lookup(&Num(1)).is_err());
}

#[test]
fn test_keys_and_values() {
    let map = sample();
    let atoms = [Sym("a"), Sym("b"), Num(1), Num(2)];
    let everything: HashSet<_> = atoms.iter().collect();
    assert_eq!(map.keys().collect::<HashSet<_>>(), everything);
    assert_eq!(map.values().collect::<HashSet<_>>(), everything);
    assert_eq!(map.keys().count(), 4);
}

#[test]
fn test_copy() {
    let map = sample();
    let mut copy = map.copy();
    assert_eq!(
        map.items().collect::<HashSet<_>>(),
        copy.items().collect::<HashSet<_>>()
    );
    copy.insert(Sym("c"), Num(3));
    copy.clear();
    assert_eq!(map, sample());
}

#[test]
fn test_copy_of_map_with_shared_right() {
    let mut map = BiMap::from([(Sym("a"), Num(1))]);
    map.insert(Sym("b"), Num(1));
    let copy = map.copy();
    assert_eq!(
        map.items().collect::<HashSet<_>>(),
        copy.items().collect::<HashSet<_>>()
    );
    assert_eq!(copy.lookup(&Num(1)), Ok(&Sym("b")));
}

#[test]
fn test_update() {
    let mut map = sample();
    map.update([(Sym("c"), Num(3))]);
    assert_eq!(map.lookup(&Num(3)), Ok(&Sym("c")));
    assert_eq!(map.len(), 6);
}

#[test]
fn test_missing_key_message() {
    let err = sample().lookup(&Sym("zzz")).unwrap_err();
    assert_eq!(err.to_string(), "key not found: Sym(\"zzz\")");
}

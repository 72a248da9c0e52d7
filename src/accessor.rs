//! Constructors for extractor closures, so `xs.iter().map(index(0))` can be
//! written instead of spelling out `|x| &x[0]`.

use std::{
    borrow::Borrow,
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
    ops::Index,
};

pub trait Record {
    type Value;

    fn field(&self, name: &str) -> Option<&Self::Value>;
}

impl<K, V, S> Record for HashMap<K, V, S>
where
    K: Borrow<str> + Eq + Hash,
    S: BuildHasher,
{
    type Value = V;

    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<K: Borrow<str> + Ord, V> Record for BTreeMap<K, V> {
    type Value = V;

    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

/// Extractor for the field called `name`; `None` where the record lacks it.
pub fn field<R: Record + ?Sized>(name: impl Into<String>) -> impl Fn(&R) -> Option<&R::Value> {
    let name = name.into();
    move |record| record.field(&name)
}

/// Extractor for `container[key]`. Panics like `C` does for a missing key.
pub fn index<C, K>(key: K) -> impl Fn(&C) -> &C::Output
where
    C: Index<K> + ?Sized,
    K: Clone,
{
    move |container| &container[key.clone()]
}

pub fn by_ref<T: ?Sized, U: ?Sized, F: Fn(&T) -> &U>(f: F) -> F {
    f
}

/// Extractor borrowing a struct field: `field!(Point, x)` is `|p: &Point| &p.x`.
#[macro_export]
macro_rules! field {
    ($ty:ty, $name:tt) => {
        $crate::accessor::by_ref(|x: &$ty| &x.$name)
    };
}

#[test]
fn test_field() {
    let record: HashMap<&str, i32> = [("foo", 42)].into_iter().collect();
    let foo = field::<HashMap<&str, i32>>("foo");
    let bar = field::<HashMap<&str, i32>>("bar");
    assert_eq!(foo(&record), Some(&42));
    assert_eq!(bar(&record), None);

    let ordered: BTreeMap<String, &str> = [("name".to_string(), "x")].into_iter().collect();
    assert_eq!(field::<BTreeMap<String, &str>>("name")(&ordered), Some(&"x"));
}

#[test]
fn test_index() {
    let first = index::<Vec<i32>, _>(0);
    assert_eq!(*first(&vec![42, 1, 2, 3]), 42);

    let rows = vec![vec![1, 2], vec![3, 4]];
    let second = index::<Vec<i32>, _>(1);
    assert_eq!(rows.iter().map(second).copied().collect::<Vec<_>>(), vec![2, 4]);

    let scores: HashMap<&str, i32> = [("foo", 42)].into_iter().collect();
    assert_eq!(*index::<HashMap<&str, i32>, _>(&"foo")(&scores), 42);
}

#[test]
fn test_field_macro() {
    struct Named {
        x: &'static str,
        foo: u32,
    }
    struct Pair(u8, char);

    let items = [Named { x: "derp", foo: 42 }, Named { x: "a", foo: 1 }];
    let foos = items.iter().map(field!(Named, foo)).collect::<Vec<_>>();
    assert_eq!(foos, vec![&42, &1]);
    assert_eq!(field!(Named, x)(&items[0]), &"derp");
    assert_eq!(*field!(Pair, 1)(&Pair(0, 'z')), 'z');
}

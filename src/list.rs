mod group;
use std::hash::Hash;

use itertools::Itertools;

pub use group::{group, group_by, GroupBy};

pub fn flatten<I>(xss: I) -> impl Iterator<Item = <I::Item as IntoIterator>::Item>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    xss.into_iter().flatten()
}

pub fn flat_map<I, J, F>(f: F, xs: I) -> impl Iterator<Item = J::Item>
where
    I: IntoIterator,
    J: IntoIterator,
    F: FnMut(I::Item) -> J,
{
    xs.into_iter().flat_map(f)
}

/// Pairwise `f` over two sequences, stopping at the end of the shorter one.
pub fn zip_with<I, J, B, F>(mut f: F, xs: I, ys: J) -> impl Iterator<Item = B>
where
    I: IntoIterator,
    J: IntoIterator,
    F: FnMut(I::Item, J::Item) -> B,
{
    xs.into_iter().zip(ys).map(move |(x, y)| f(x, y))
}

pub fn xmap<I, B, F>(f: F, xs: I) -> Vec<B>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> B,
{
    xs.into_iter().map(f).collect_vec()
}

pub fn take<I: IntoIterator>(n: usize, xs: I) -> std::iter::Take<I::IntoIter> {
    xs.into_iter().take(n)
}

pub fn drop<I: IntoIterator>(n: usize, xs: I) -> std::iter::Skip<I::IntoIter> {
    xs.into_iter().skip(n)
}

pub fn head<I: IntoIterator>(xs: I) -> Option<I::Item> {
    xs.into_iter().next()
}

pub fn tail<I: IntoIterator>(xs: I) -> std::iter::Skip<I::IntoIter> {
    drop(1, xs)
}

pub fn uncons<I: IntoIterator>(xs: I) -> Option<(I::Item, I::IntoIter)> {
    let mut rest = xs.into_iter();
    let first = rest.next()?;
    Some((first, rest))
}

pub fn cons<T, I: IntoIterator<Item = T>>(x: T, xs: I) -> Vec<T> {
    std::iter::once(x).chain(xs).collect_vec()
}

pub fn find<I, P>(mut pred: P, xs: I) -> Option<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    xs.into_iter().find(|x| pred(x))
}

pub fn find_index<I, P>(mut pred: P, xs: I) -> Option<usize>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    xs.into_iter().position(|x| pred(&x))
}

/// Longest prefix satisfying `pred`, and everything after it. The first
/// element failing `pred` starts the second half.
pub fn span<I, P>(mut pred: P, xs: I) -> (Vec<I::Item>, Vec<I::Item>)
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut rest = xs.into_iter().peekable();
    let prefix = rest.peeking_take_while(|x| pred(x)).collect_vec();
    (prefix, rest.collect_vec())
}

/// Rows become columns. Columns past the end of the shortest row are dropped.
pub fn transpose<I>(rows: I) -> Vec<Vec<<I::Item as IntoIterator>::Item>>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    let mut rows = rows.into_iter().map(IntoIterator::into_iter).collect_vec();
    let mut columns = Vec::new();
    if rows.is_empty() {
        return columns;
    }
    loop {
        let mut column = Vec::with_capacity(rows.len());
        for row in rows.iter_mut() {
            match row.next() {
                Some(x) => column.push(x),
                None => return columns,
            }
        }
        columns.push(column);
    }
}

pub fn nub<I>(xs: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Clone + Eq + Hash,
{
    xs.into_iter().unique().collect_vec()
}

/// `x, f(x), f(f(x)), ...` without end.
pub fn iterate<T, F: FnMut(&T) -> T>(f: F, x: T) -> itertools::Iterate<T, F> {
    itertools::iterate(x, f)
}

/// Number of elements of a sequence of unknown length, found by walking it.
pub fn length<I: IntoIterator>(xs: I) -> usize {
    xs.into_iter().count()
}

/// Number of elements of a sequence whose size is known up front.
pub fn known_length<I>(xs: I) -> usize
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
{
    xs.into_iter().len()
}

pub fn empty<I: IntoIterator>(xs: I) -> bool {
    xs.into_iter().next().is_none()
}

pub fn index<I: IntoIterator>(i: usize, xs: I) -> Option<I::Item> {
    xs.into_iter().nth(i)
}

#[test]
fn test_flatten_and_flat_map() {
    assert_eq!(
        flatten([vec![1, 2], vec![3, 4], vec![5, 6]]).collect_vec(),
        vec![1, 2, 3, 4, 5, 6]
    );
    assert_eq!(
        flat_map(|x| [x, 1], [1, 2, 3]).collect_vec(),
        vec![1, 1, 2, 1, 3, 1]
    );
}

#[test]
fn test_zip_with() {
    let sums = zip_with(|a, b| a + b, [1, 2, 3], [10, 20]);
    assert_eq!(sums.collect_vec(), vec![11, 22]);
    assert_eq!(xmap(|x| x * x, 1..4), vec![1, 4, 9]);
}

#[test]
fn test_slicing() {
    assert_eq!(take(2, 1..).collect_vec(), vec![1, 2]);
    assert_eq!(drop(2, [1, 2, 3]).collect_vec(), vec![3]);
    assert_eq!(head([7, 8]), Some(7));
    assert_eq!(head(Vec::<u8>::new()), None);
    assert_eq!(tail([7, 8, 9]).collect_vec(), vec![8, 9]);
    let (x, rest) = uncons(vec![1, 2, 3]).unwrap();
    assert_eq!((x, rest.collect_vec()), (1, vec![2, 3]));
    assert!(uncons(Vec::<u8>::new()).is_none());
    assert_eq!(cons(0, [1, 2]), vec![0, 1, 2]);
}

#[test]
fn test_find() {
    assert_eq!(find(|x| x % 2 == 0, [1, 3, 4, 6]), Some(4));
    assert_eq!(find(|x| *x > 10, [1, 3]), None);
    assert_eq!(find_index(|x| x % 2 == 0, [1, 3, 4, 6]), Some(2));
    assert_eq!(find_index(|c| c.is_whitespace(), "abc".chars()), None);
}

#[test]
fn test_span() {
    assert_eq!(
        span(|x| x % 2 == 0, [2, 4, 5, 6]),
        (vec![2, 4], vec![5, 6])
    );
    assert_eq!(span(|x| *x > 0, [1, 2]), (vec![1, 2], vec![]));
    assert_eq!(span(|x| *x > 5, [1, 9]), (vec![], vec![1, 9]));
}

#[test]
fn test_transpose() {
    assert_eq!(
        transpose(vec![vec![1, 2, 3], vec![4, 5]]),
        vec![vec![1, 4], vec![2, 5]]
    );
    assert!(transpose(Vec::<Vec<u8>>::new()).is_empty());
}

#[test]
fn test_nub() {
    assert_eq!(nub([3, 1, 3, 2, 1]), vec![3, 1, 2]);
}

#[test]
fn test_iterate() {
    assert_eq!(
        take(5, iterate(|x| x * 2, 1)).collect_vec(),
        vec![1, 2, 4, 8, 16]
    );
}

#[test]
fn test_length_and_index() {
    assert_eq!(known_length(vec![1, 2, 3]), 3);
    assert_eq!(known_length(&[1, 2][..]), 2);
    assert_eq!(length(vec![1, 2, 3]), 3);
    assert_eq!(length((0..10).filter(|x| x % 3 == 0)), 4);
    assert_eq!(length("héllo".chars()), 5);
    assert!(empty(Vec::<u8>::new()));
    assert!(!empty(0..1));
    assert_eq!(index(1, [10, 20, 30]), Some(20));
    assert_eq!(index(2, (0..).map(|x| x * x)), Some(4));
    assert_eq!(index(5, 0..3), None);
}

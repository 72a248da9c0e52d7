use crate::function::flip;

pub fn foldl<I, B, F>(f: F, xs: I, init: B) -> B
where
    I: IntoIterator,
    F: FnMut(B, I::Item) -> B,
{
    xs.into_iter().fold(init, f)
}

/// Left fold seeded with the first element; `None` for empty input.
pub fn foldl1<I, F>(f: F, xs: I) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    xs.into_iter().reduce(f)
}

/// Right fold seeded with the last element: `foldr1(f, [a, b, c]) == f(a, f(b, c))`.
pub fn foldr1<I, F>(f: F, xs: I) -> Option<I::Item>
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
    F: Fn(I::Item, I::Item) -> I::Item,
{
    xs.into_iter().rev().reduce(flip(f))
}

pub fn scanl1<I, F>(mut f: F, xs: I) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    xs.into_iter().scan(None, move |acc: &mut Option<I::Item>, x| {
        let next = match acc.take() {
            Some(prev) => f(prev, x),
            None => x,
        };
        *acc = Some(next.clone());
        Some(next)
    })
}

pub fn product<I>(xs: I) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: std::ops::Mul<Output = I::Item>,
{
    foldl1(|a, b| a * b, xs)
}

#[test]
fn test_foldl() {
    assert_eq!(foldl(|acc, x| acc - x, [1, 2, 3], 10), 4);
    assert_eq!(foldl(|acc: String, c| acc + c, ["a", "b"], String::new()), "ab");
}

#[test]
fn test_foldl1() {
    assert_eq!(foldl1(|a, b| a - b, [1, 2, 3]), Some(-4));
    assert_eq!(foldl1(|a: i32, b| a - b, []), None);
}

#[test]
fn test_foldr1() {
    assert_eq!(foldr1(|a, b| a - b, [1, 2, 3]), Some(2));
    let words = ["x", "y", "z"].map(String::from);
    assert_eq!(
        foldr1(|a, b| format!("({a}{b})"), words),
        Some("(x(yz))".to_string())
    );
    assert_eq!(foldr1(|a: i32, b| a + b, Vec::new()), None);
}

#[test]
fn test_scanl1() {
    assert_eq!(
        scanl1(|a, b| a + b, [1, 2, 3, 4]).collect::<Vec<_>>(),
        vec![1, 3, 6, 10]
    );
    assert_eq!(scanl1(|a: i32, b| a + b, []).count(), 0);
}

#[test]
fn test_product() {
    assert_eq!(product([2, 3, 7]), Some(42));
    assert_eq!(product(Vec::<u8>::new()), None);
}

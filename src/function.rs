pub fn flip<A, B, C>(f: impl Fn(A, B) -> C) -> impl Fn(B, A) -> C {
    move |y, x| f(x, y)
}

/// `compose(f, g)(x) == f(g(x))`
pub fn compose<A, B, C>(f: impl Fn(B) -> C, g: impl Fn(A) -> B) -> impl Fn(A) -> C {
    move |x| f(g(x))
}

#[test]
fn test_flip() {
    let sub = |a: i32, b: i32| a - b;
    assert_eq!(flip(sub)(1, 10), 9);
}

#[test]
fn test_compose() {
    let inc_then_double = compose(|x: i32| x * 2, |x: i32| x + 1);
    assert_eq!(inc_then_double(4), 10);
    let len_of_trimmed = compose(str::len, str::trim);
    assert_eq!(len_of_trimmed("  ab "), 2);
}

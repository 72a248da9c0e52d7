pub fn fst<A, B>((a, _): (A, B)) -> A {
    a
}

pub fn snd<A, B>((_, b): (A, B)) -> B {
    b
}

pub fn map_fst<A, B, C>(f: impl FnOnce(A) -> C, (a, b): (A, B)) -> (C, B) {
    (f(a), b)
}

pub fn map_snd<A, B, C>(f: impl FnOnce(B) -> C, (a, b): (A, B)) -> (A, C) {
    (a, f(b))
}

pub fn swap_pair<A, B>((a, b): (A, B)) -> (B, A) {
    (b, a)
}

#[test]
fn test_pairs() {
    assert_eq!(fst((1, "a")), 1);
    assert_eq!(snd((1, "a")), "a");
    assert_eq!(map_fst(|x| x * 2, (21, "a")), (42, "a"));
    assert_eq!(map_snd(str::len, (1, "abc")), (1, 3));
    assert_eq!(swap_pair((1, "a")), ("a", 1));
}

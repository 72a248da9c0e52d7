use itertools::Itertools;

/// Splits on `'\n'` only; a trailing newline yields a trailing empty line.
pub fn lines(s: &str) -> Vec<&str> {
    s.split('\n').collect_vec()
}

pub fn unlines<I>(xs: I) -> String
where
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    xs.into_iter().join("\n")
}

pub fn words(s: &str) -> Vec<&str> {
    s.split_whitespace().collect_vec()
}

pub fn unwords<I>(xs: I) -> String
where
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    xs.into_iter().join(" ")
}

#[test]
fn test_lines() {
    assert_eq!(lines("a\nb\n"), vec!["a", "b", ""]);
    assert_eq!(lines(""), vec![""]);
    assert_eq!(unlines(["a", "b"]), "a\nb");
}

#[test]
fn test_words() {
    assert_eq!(words("  the  quick\tfox\n"), vec!["the", "quick", "fox"]);
    assert!(words("   ").is_empty());
    assert_eq!(unwords(["the", "fox"]), "the fox");
}

/// Iterator over runs of adjacent elements, see [`group_by`].
#[derive(Debug, Clone)]
pub struct GroupBy<I: Iterator, F> {
    iter: I,
    same_group: F,
    pending: Option<I::Item>,
}

impl<I, F> Iterator for GroupBy<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.pending.take().or_else(|| self.iter.next())?;
        let mut group = vec![first];
        for x in self.iter.by_ref() {
            if group.last().is_some_and(|last| (self.same_group)(&x, last)) {
                group.push(x);
            } else {
                self.pending = Some(x);
                break;
            }
        }
        Some(group)
    }
}

/// Splits `xs` into runs where every element satisfies
/// `same_group(element, previous element)`.
///
/// Each element is compared with its direct predecessor, not with the first
/// element of the run.
pub fn group_by<I, F>(same_group: F, xs: I) -> GroupBy<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    GroupBy {
        iter: xs.into_iter(),
        same_group,
        pending: None,
    }
}

pub fn group<I>(xs: I) -> GroupBy<I::IntoIter, fn(&I::Item, &I::Item) -> bool>
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    let same: fn(&I::Item, &I::Item) -> bool = |x, last| x == last;
    group_by(same, xs)
}

#[test]
fn test_group() {
    let groups = group("aabccca".chars()).collect::<Vec<_>>();
    assert_eq!(
        groups,
        vec![vec!['a', 'a'], vec!['b'], vec!['c', 'c', 'c'], vec!['a']]
    );
    assert_eq!(group(Vec::<u8>::new()).count(), 0);
}

#[test]
fn test_group_by_compares_adjacent() {
    let runs = group_by(|x: &i32, last: &i32| *x == last + 1, [1, 2, 3, 5, 6, 8]);
    assert_eq!(
        runs.collect::<Vec<_>>(),
        vec![vec![1, 2, 3], vec![5, 6], vec![8]]
    );
}

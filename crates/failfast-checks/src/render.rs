use std::fmt::Debug;

const SUMMARY_EDGE: usize = 5;

pub(crate) fn show<T: Debug + ?Sized>(value: &T) -> String {
    format!("{value:?}")
}

/// Renders a sequence for failure messages.
///
/// Sequences of up to ten items are shown whole; longer ones show the first
/// and last five items around `...`.
pub fn summarize<T: Debug>(items: &[T]) -> String {
    if items.len() <= SUMMARY_EDGE * 2 {
        return show(items);
    }
    let head: Vec<String> = items[..SUMMARY_EDGE].iter().map(|item| show(item)).collect();
    let tail: Vec<String> = items[items.len() - SUMMARY_EDGE..]
        .iter()
        .map(|item| show(item))
        .collect();
    format!("[{}, ..., {}]", head.join(", "), tail.join(", "))
}

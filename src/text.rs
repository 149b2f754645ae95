//! Erasure over character storage.
//!
//! Text is contiguous too, but its elements are variable-width, so the partition runs over encoded characters and
//! the removal count is in characters, not bytes.

use super::*;

/// Storage of encoded characters that can be filtered in a single in-place pass.
pub trait CharStorage {
    /// The number of characters stored (not the number of bytes).
    fn char_count(&self) -> usize;

    /// Keep only the characters for which `keep` returns `true`, in their original order.
    ///
    /// `keep` must be called exactly once per character, front to back.
    fn retain_chars(&mut self, keep: impl FnMut(char) -> bool);
}

impl CharStorage for String {
    #[inline(always)]
    fn char_count(&self) -> usize {
        self.chars().count()
    }

    #[inline(always)]
    fn retain_chars(&mut self, keep: impl FnMut(char) -> bool) {
        self.retain(keep)
    }
}

impl Erasable for String {
    type Category = Text;
}

pub(crate) fn erase_where<S, E>(
    text: &mut S,
    mut test: impl FnMut(char) -> Result<bool, E>,
) -> Result<usize, Interrupted<E>>
where
    S: CharStorage + ?Sized,
{
    let before = text.char_count();
    if before == 0 {
        return Ok(0);
    }
    let mut sweep = Sweep::new();
    text.retain_chars(|c| sweep.keep(|| test(c)));
    debug_assert_eq!(text.char_count() + sweep.removed(), before);
    sweep.finish()
}

impl<S> EraseValue<S> for Text
where
    S: CharStorage + ?Sized,
{
    type Value = char;

    fn erase_value(text: &mut S, value: &char) -> usize {
        unwrap_infallible(erase_where(text, |c| Ok::<_, Infallible>(c == *value)))
    }
}

impl<S, F, R> EraseWhere<S, F> for Text
where
    S: CharStorage + ?Sized,
    F: FnMut(char) -> R,
    R: Verdict,
{
    type Error = R::Error;

    fn erase_where(text: &mut S, mut pred: F) -> Result<usize, Interrupted<R::Error>> {
        erase_where(text, |c| pred(c).into_result())
    }
}

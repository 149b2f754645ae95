use super::*;

/// Bookkeeping for strategies that delegate the actual removal to a container's own `retain`.
///
/// `retain` cannot be stopped early, so once the predicate fails every remaining element is kept and the predicate
/// is not called again.
pub(crate) struct Sweep<E> {
    removed: usize,
    failure: Option<E>,
}

impl<E> Sweep<E> {
    pub(crate) fn new() -> Self {
        Self {
            removed: 0,
            failure: None,
        }
    }

    /// Decide whether to keep an element, given a way to ask the predicate about it.
    #[inline]
    pub(crate) fn keep(&mut self, verdict: impl FnOnce() -> Result<bool, E>) -> bool {
        if self.failure.is_some() {
            return true;
        }
        match verdict() {
            Ok(true) => {
                self.removed += 1;
                false
            }
            Ok(false) => true,
            Err(err) => {
                self.failure = Some(err);
                true
            }
        }
    }

    pub(crate) fn removed(&self) -> usize {
        self.removed
    }

    pub(crate) fn finish(self) -> Result<usize, Interrupted<E>> {
        match self.failure {
            None => Ok(self.removed),
            Some(err) => Err(Interrupted::new(self.removed, err)),
        }
    }
}

/// Extract the removal count from a sweep whose predicate cannot fail.
#[inline(always)]
#[allow(unreachable_code)]
pub(crate) fn unwrap_infallible(res: Result<usize, Interrupted<Infallible>>) -> usize {
    match res {
        Ok(removed) => removed,
        Err(err) => match err.into_error() {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_everything_after_failure() {
        let mut sweep = Sweep::new();
        let kept = [Ok(true), Ok(false), Err("bad"), Ok(true)]
            .into_iter()
            .map(|v| sweep.keep(|| v))
            .collect::<Vec<_>>();
        assert_eq!(kept, [false, true, true, true]);
        assert_eq!(sweep.finish(), Err(Interrupted::new(1, "bad")));
    }

    #[test]
    fn infallible_count_passes_through() {
        assert_eq!(unwrap_infallible(Ok(3)), 3);
    }
}

use criterion::Criterion;

#[cfg(unix)]
pub fn make_criterion() -> Criterion {
    use pprof::criterion::{Output, PProfProfiler};
    Criterion::default()
        .sample_size(50)
        .with_profiler(PProfProfiler::new(1000, Output::Flamegraph(None)))
        .configure_from_args()
}

#[cfg(not(unix))]
pub fn make_criterion() -> Criterion {
    Criterion::default().sample_size(50).configure_from_args()
}

/// A deterministic mix of values in `0..16`, so every eighth-ish element matches a given target.
pub fn sample(len: usize) -> Vec<u32> {
    (0..len as u32).map(|i| i.wrapping_mul(2_654_435_761) >> 28).collect()
}

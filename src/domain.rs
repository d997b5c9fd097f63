use crate::numeric::Element;

/// Number of samples in the canonical sequence.
pub const DEFAULT_SAMPLES: usize = 10_000_000;
/// Left endpoint of the sampled interval, included.
pub const DEFAULT_START: f64 = -10.0;
/// Right endpoint of the sampled interval, excluded.
pub const DEFAULT_END: f64 = 10.0;

/// Shape of the input domain every representation is benchmarked over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainConfig {
    pub samples: usize,
    pub start: f64,
    pub end: f64,
}

impl DomainConfig {
    pub fn new(samples: usize, start: f64, end: f64) -> Self {
        Self { samples, start, end }
    }

    /// Distance between two neighbouring samples.
    pub fn step(&self) -> f64 {
        (self.end - self.start) / self.samples as f64
    }
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLES, DEFAULT_START, DEFAULT_END)
    }
}

/// Generate the canonical 64-bit float sequence.
///
/// The first element is `start` and every following one adds `step` to its
/// predecessor, so rounding accumulates along the sequence.
pub fn canonical(config: &DomainConfig) -> Vec<f64> {
    let step = config.step();
    let mut items = Vec::with_capacity(config.samples);
    let mut x = config.start;

    for _ in 0..config.samples {
        items.push(x);
        x += step;
    }

    tracing::debug!(
        samples = config.samples,
        start = config.start,
        end = config.end,
        step,
        "generated canonical domain"
    );

    items
}

/// Convert the canonical sequence into the representation `T`.
pub fn cast<T: Element>(canonical: &[f64]) -> Vec<T> {
    canonical.iter().map(|&x| T::from_f64(x)).collect()
}

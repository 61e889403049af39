//! Ordered sequence of cubic box sizes over which spectra are evaluated

use crate::numeric::Float;

/// Evenly spaced box sizes in [start, end), in fermi
///
/// Like a numerical `arange`, this holds `ceil((end - start) / step)` values
/// and computes the i-th one as `start + i * step`, so that rounding errors do
/// not accumulate along the sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxSizes {
    /// First box size
    pub start: Float,

    /// Upper bound of box sizes (exclusive)
    pub end: Float,

    /// Spacing between consecutive box sizes
    pub step: Float,
}
//
impl BoxSizes {
    /// Describe a sequence of box sizes
    pub fn new(start: Float, end: Float, step: Float) -> Self {
        Self { start, end, step }
    }

    /// Number of box sizes in the sequence
    pub fn len(&self) -> usize {
        let span = (self.end - self.start) / self.step;
        if span > 0. {
            span.ceil() as usize
        } else {
            0
        }
    }

    /// Truth that the sequence contains no box size
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the box sizes, in increasing order
    ///
    /// The iterator borrows nothing, so the sequence can be walked as many
    /// times as needed and always yields the same values.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Float> + Clone {
        let Self { start, step, .. } = *self;
        (0..self.len()).map(move |i| start + (i as Float) * step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plot_range() {
        let sizes = BoxSizes::new(6., 30., 0.2);
        assert_eq!(sizes.len(), 120);
        let all = sizes.iter().collect::<Vec<_>>();
        assert_eq!(all.len(), 120);
        assert_eq!(all[0], 6.);
        assert!((all[1] - 6.2).abs() < 1e-4);
        assert!((all[119] - 29.8).abs() < 1e-4);
        assert!(all.windows(2).all(|w| w[1] > w[0]));
        assert!(all.iter().all(|&l| l < 30.));
    }

    #[test]
    fn restartable() {
        let sizes = BoxSizes::new(6., 30., 0.2);
        let first = sizes.iter().collect::<Vec<_>>();
        let second = sizes.iter().collect::<Vec<_>>();
        assert_eq!(first, second);
    }

    #[test]
    fn partial_last_step() {
        // 0, 0.75, 1.5 and nothing at 2.25
        let sizes = BoxSizes::new(0., 2., 0.75);
        assert_eq!(sizes.len(), 3);
    }

    #[test]
    fn empty_when_reversed() {
        assert!(BoxSizes::new(30., 6., 0.2).is_empty());
        assert!(BoxSizes::new(6., 6., 0.2).is_empty());
        assert_eq!(BoxSizes::new(30., 6., 0.2).iter().count(), 0);
    }
}

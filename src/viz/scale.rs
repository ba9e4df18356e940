//! Position scales: categorical bands for labels, linear for durations.
//!
//! Each chart builds its own pair, so rendering one chart never observes the
//! domain of another.

/// Upper bound used when every bucket is zero, so the domain never collapses.
pub const DEGENERATE_DOMAIN_MAX: f64 = 3600.0;

/// Evenly spaced bands over an ordered list of labels.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// Bands over `[0, width]` with the same inner and outer padding ratio, centred.
    pub fn new<I, S>(labels: I, width: f64, padding: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_options(labels, (0.0, width), padding, padding, 0.5)
    }

    pub fn with_options<I, S>(
        labels: I,
        range: (f64, f64),
        padding_inner: f64,
        padding_outer: f64,
        align: f64,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let domain: Vec<String> = labels.into_iter().map(Into::into).collect();
        let n = domain.len() as f64;
        let (r0, r1) = range;
        let step = (r1 - r0) / (n - padding_inner + padding_outer * 2.0).max(1.0);
        let start = r0 + (r1 - r0 - step * (n - padding_inner)) * align;
        let bandwidth = step * (1.0 - padding_inner);
        Self {
            domain,
            start,
            step,
            bandwidth,
        }
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Left edge of the `i`-th band.
    pub fn position_at(&self, i: usize) -> f64 {
        self.start + self.step * i as f64
    }

    /// Left edge of the band for `label`; `None` if it is not in the domain.
    pub fn position(&self, label: &str) -> Option<f64> {
        self.domain
            .iter()
            .position(|l| l == label)
            .map(|i| self.position_at(i))
    }
}

/// Linear map from a numeric domain to a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Duration scale `[0, max_seconds]` onto `[height, 0]`, so longer times draw taller bars.
    /// An all-zero input widens the domain to [`DEGENERATE_DOMAIN_MAX`].
    pub fn for_durations(max_seconds: u64, height: f64) -> Self {
        let upper = if max_seconds == 0 {
            log::warn!(
                "all durations are zero; widening the time axis to {}s",
                DEGENERATE_DOMAIN_MAX
            );
            DEGENERATE_DOMAIN_MAX
        } else {
            max_seconds as f64
        };
        Self::new((0.0, upper), (height, 0.0))
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn scale(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (v - d0) / (d1 - d0) * (r1 - r0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn band_geometry_with_padding() {
        // two labels over 1150px, padding 0.1: step = 1150 / 2.1
        let x = BandScale::new(["Mon", "Tue"], 1150.0, 0.1);
        let step = 1150.0 / 2.1;
        assert!(close(x.step(), step));
        assert!(close(x.bandwidth(), step * 0.9));
        assert!(close(x.position("Mon").unwrap(), step * 0.1));
        assert!(close(x.position("Tue").unwrap(), step * 1.1));
        assert_eq!(x.position("Wed"), None);
        // last band ends one outer padding before the range end
        let end = x.position_at(1) + x.bandwidth();
        assert!(close(1150.0 - end, step * 0.1));
    }

    #[test]
    fn band_without_padding_tiles_the_range() {
        let x = BandScale::new(["a", "b", "c", "d"], 400.0, 0.0);
        assert!(close(x.bandwidth(), 100.0));
        assert!(close(x.position_at(0), 0.0));
        assert!(close(x.position_at(3), 300.0));
    }

    #[test]
    fn linear_is_inverted() {
        let y = LinearScale::for_durations(3661, 260.0);
        assert!(close(y.scale(0.0), 260.0));
        assert!(close(y.scale(3661.0), 0.0));
        assert!(close(y.scale(3661.0 / 2.0), 130.0));
    }

    #[test]
    fn all_zero_domain_is_widened() {
        let y = LinearScale::for_durations(0, 260.0);
        assert_eq!(y.domain(), (0.0, DEGENERATE_DOMAIN_MAX));
        assert!(close(y.scale(0.0), 260.0));
    }
}

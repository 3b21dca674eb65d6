//! Expectation backends for the oscillatory score
//!
//! The scorer reduces its inputs to a single rotation angle `theta`; a
//! backend turns that angle into an expectation value in [-1, 1]. The
//! default backend evaluates `sin(theta)` directly. An alternative backend
//! may obtain the same quantity empirically, e.g. by preparing a
//! single-qubit rotation parameterized by `theta` and measuring it on real
//! or simulated hardware. Any substitute must stay value-compatible: same
//! angle domain, same [-1, 1] range.

/// Maps a rotation angle to an expectation value in [-1, 1]
pub trait ExpectationBackend {
    fn expectation(&self, theta: f64) -> f64;

    /// Short label for display and logging
    fn name(&self) -> &'static str {
        "backend"
    }
}

/// Deterministic trigonometric backend: `sin(theta)`.
///
/// Bit-for-bit reproducible across calls with identical inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrigBackend;

impl ExpectationBackend for TrigBackend {
    fn expectation(&self, theta: f64) -> f64 {
        theta.sin()
    }

    fn name(&self) -> &'static str {
        "trig"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_trig_backend_is_sine() {
        let backend = TrigBackend;
        assert_relative_eq!(backend.expectation(0.0), 0.0);
        assert_relative_eq!(backend.expectation(std::f64::consts::FRAC_PI_2), 1.0);
        assert_relative_eq!(
            backend.expectation(std::f64::consts::PI),
            0.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_trig_backend_reproducible() {
        let backend = TrigBackend;
        let theta = 1.234_567_89;
        assert_eq!(
            backend.expectation(theta).to_bits(),
            backend.expectation(theta).to_bits()
        );
    }
}

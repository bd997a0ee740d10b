//! Device orientation events.

/// Orientation angles in degrees, as delivered by the host sensor.
///
/// Any angle may be missing when the device cannot supply it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrientationEvent {
    /// Rotation around the z axis (compass heading), `0..360`.
    pub alpha: Option<f64>,
    /// Front-to-back tilt, `-180..180`.
    pub beta: Option<f64>,
    /// Left-to-right tilt, `-90..90`.
    pub gamma: Option<f64>,
    /// Whether the angles are relative to the earth frame.
    pub absolute: bool,
}

impl OrientationEvent {
    /// Event carrying only a heading.
    pub fn with_alpha(alpha: f64) -> Self {
        Self {
            alpha: Some(alpha),
            ..Self::default()
        }
    }

    /// Event where the sensor reported no heading.
    pub fn without_alpha() -> Self {
        Self::default()
    }

    /// The heading to rotate by, or `None` if the sensor gave no heading.
    ///
    /// A reported NaN or negative zero collapses to `0.0`.
    pub fn heading(&self) -> Option<f64> {
        self.alpha
            .map(|alpha| if alpha.is_nan() || alpha == 0.0 { 0.0 } else { alpha })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_present() {
        assert_eq!(OrientationEvent::with_alpha(47.0).heading(), Some(47.0));
    }

    #[test]
    fn test_heading_missing() {
        assert_eq!(OrientationEvent::without_alpha().heading(), None);
    }

    #[test]
    fn test_heading_nan_is_zero() {
        assert_eq!(OrientationEvent::with_alpha(f64::NAN).heading(), Some(0.0));
    }

    #[test]
    fn test_heading_negative_zero_is_zero() {
        let heading = OrientationEvent::with_alpha(-0.0).heading();
        assert_eq!(heading, Some(0.0));
        assert!(heading.is_some_and(|degrees| degrees.is_sign_positive()));
    }
}

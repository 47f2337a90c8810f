use crate::error::{parse_field, ValidationError};

/// A single plotted coordinate. Angle is stored in radians; user input is
/// taken in degrees and converted on entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarPoint {
    pub angle: f64,
    pub radius: f64,
}

/// Ordered collection of user-entered polar points plus the derived radial
/// display bound.
///
/// Radius is accepted as-is, including zero and negative values; a negative
/// radius simply plots through the opposite angle.
pub struct PointStore {
    points: Vec<PolarPoint>,
    default_bound: f64,
    padding: f64,
}

impl PointStore {
    pub fn new(default_bound: f64, padding: f64) -> Self {
        Self {
            points: Vec::new(),
            default_bound,
            padding,
        }
    }

    /// Validate and append a point from raw field text (angle in degrees).
    ///
    /// Both fields are parsed before anything is stored, so a failure leaves
    /// the store untouched.
    pub fn add(&mut self, angle_text: &str, radius_text: &str) -> Result<PolarPoint, ValidationError> {
        let radius = parse_field("radius", radius_text)?;
        let angle_deg = parse_field("angle", angle_text)?;

        let point = PolarPoint {
            angle: angle_deg.to_radians(),
            radius,
        };
        self.points.push(point);
        Ok(point)
    }

    /// Drop every point. The bound falls back to the default.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Largest stored radius, or 0 for an empty store.
    pub fn max_radius(&self) -> f64 {
        self.points.iter().map(|p| p.radius).fold(0.0, f64::max)
    }

    /// Radial extent the display should use: max radius plus padding, or the
    /// default bound while the store is empty.
    pub fn current_bound(&self) -> f64 {
        if self.points.is_empty() {
            self.default_bound
        } else {
            self.max_radius() + self.padding
        }
    }

    pub fn points(&self) -> &[PolarPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> PointStore {
        PointStore::new(10.0, 1.0)
    }

    #[test]
    fn add_appends_in_order() {
        let mut s = store();
        s.add("0", "5").unwrap();
        s.add("90", "2").unwrap();
        s.add("45", "7.5").unwrap();

        assert_eq!(s.len(), 3);
        assert_eq!(s.points()[0].radius, 5.0);
        assert_eq!(s.points()[1].radius, 2.0);
        assert_eq!(s.points()[2].radius, 7.5);
        assert!((s.points()[1].angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn add_converts_degrees_to_radians() {
        let mut s = store();
        let p = s.add("180", "1").unwrap();
        assert!((p.angle - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn invalid_input_leaves_store_unchanged() {
        let mut s = store();
        s.add("0", "5").unwrap();

        assert!(s.add("north", "5").is_err());
        assert!(s.add("0", "").is_err());
        assert!(s.add("0", "inf").is_err());
        assert_eq!(s.len(), 1);
        assert_eq!(s.points()[0].radius, 5.0);
    }

    #[test]
    fn negative_and_zero_radius_accepted() {
        let mut s = store();
        s.add("0", "0").unwrap();
        s.add("0", "-4").unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(s.points()[1].radius, -4.0);
    }

    #[test]
    fn bound_is_default_when_empty() {
        assert_eq!(store().current_bound(), 10.0);
    }

    #[test]
    fn bound_tracks_largest_radius() {
        let mut s = store();
        s.add("90", "10").unwrap();
        s.add("180", "3").unwrap();
        assert_eq!(s.current_bound(), 11.0);
    }

    #[test]
    fn bound_with_only_negative_radii_uses_zero_floor() {
        let mut s = store();
        s.add("0", "-4").unwrap();
        // max_radius floors at 0, so the bound is just the padding.
        assert_eq!(s.current_bound(), 1.0);
    }

    #[test]
    fn clear_resets_everything() {
        let mut s = store();
        s.add("10", "8").unwrap();
        s.add("20", "2").unwrap();
        s.clear();

        assert!(s.is_empty());
        assert_eq!(s.current_bound(), 10.0);
    }
}

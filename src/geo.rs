use chrono::{DateTime, Local};

use crate::error::{parse_field, ValidationError};
use crate::plot::PolarPoint;

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Reference coordinate the plotted points are projected around. Supplied
/// fresh at export time and validated finite on construction, so a value of
/// this type is always usable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoOrigin {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoOrigin {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        if !latitude.is_finite() {
            return Err(ValidationError::NotFinite { field: "latitude" });
        }
        if !longitude.is_finite() {
            return Err(ValidationError::NotFinite { field: "longitude" });
        }
        Ok(Self { latitude, longitude })
    }

    /// Build an origin from raw field text.
    pub fn parse(lat_text: &str, lon_text: &str) -> Result<Self, ValidationError> {
        let latitude = parse_field("latitude", lat_text)?;
        let longitude = parse_field("longitude", lon_text)?;
        Self::new(latitude, longitude)
    }
}

/// One exportable map annotation, derived from a stored point at projection
/// time and discarded after the map is written.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub distance_km: f64,
    pub generated_at: DateTime<Local>,
}

/// Projects polar points onto approximate geographic coordinates around an
/// origin.
///
/// This is a flat-earth local approximation: `offset_scale` converts radius
/// units straight into degrees of latitude/longitude. It is a visualization
/// convenience, only reasonable for radii small against Earth's curvature;
/// the reported distance, by contrast, is a proper great-circle value.
pub struct GeoProjector {
    offset_scale: f64,
}

impl GeoProjector {
    pub fn new(offset_scale: f64) -> Self {
        Self { offset_scale }
    }

    /// Map every point to a marker, preserving order. All markers from one
    /// call share a single wall-clock timestamp.
    pub fn project(&self, points: &[PolarPoint], origin: GeoOrigin) -> Vec<GeoMarker> {
        let generated_at = Local::now();

        points
            .iter()
            .map(|point| {
                let latitude = origin.latitude + point.radius * point.angle.sin() * self.offset_scale;
                let longitude = origin.longitude + point.radius * point.angle.cos() * self.offset_scale;
                GeoMarker {
                    latitude,
                    longitude,
                    distance_km: great_circle_km(origin.latitude, origin.longitude, latitude, longitude),
                    generated_at,
                }
            })
            .collect()
    }
}

/// Haversine great-circle distance in kilometres over a spherical Earth.
pub fn great_circle_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat * 0.5).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon * 0.5).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Geographic coordinates in degrees.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LatLngCoords {
    pub lat: f64,
    pub lng: f64,
}

impl LatLngCoords {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

use crate::{geo::LatLngCoords, id::Id};

/// A visitable point of interest (monument, museum, viewpoint, ...).
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub id          : Id,
    pub name        : String,
    pub city        : Id,
    pub country     : Id,
    /// Free-form classification, e.g. "museum".
    pub site_type   : String,
    pub description : String,
    pub coordinates : LatLngCoords,
    pub image_url   : String,
    /// Payload of the QR code mounted at the site, used to verify visits.
    pub qr_code     : String,
}

use crate::{geo::LatLngCoords, id::Id};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub id          : Id,
    pub name        : String,
    /// Reference to the country this city belongs to.
    pub country     : Id,
    pub coordinates : Option<LatLngCoords>,
}

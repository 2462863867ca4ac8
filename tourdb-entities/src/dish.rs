use crate::id::Id;

/// A typical dish served at a site.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Dish {
    pub id          : Id,
    pub name        : String,
    pub country     : Id,
    pub site        : Id,
    pub description : String,
    pub price       : f64,
    pub image_url   : String,
}

use crate::id::Id;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct FamousPerson {
    pub id                : Id,
    pub name              : String,
    pub last_name         : Option<String>,
    pub city_of_birth     : Id,
    pub country_of_origin : Id,
    /// Free-form classification, e.g. "writer".
    pub category          : String,
    pub description       : String,
    pub image_url         : String,
}

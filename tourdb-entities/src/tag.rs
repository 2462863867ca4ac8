use crate::{geo::LatLngCoords, id::Id, time::Timestamp};

/// A user-generated tag/comment attached to a famous person.
///
/// Multiple tags per person and user are allowed.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct FamousPersonTag {
    pub id            : Id,
    /// The user who authored the tag.
    pub user          : Id,
    pub famous_person : Id,
    pub tag           : String,
    pub created_at    : Timestamp,
    pub photo_url     : String,
    pub coordinates   : LatLngCoords,
}

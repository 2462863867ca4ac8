use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{geo::LatLngCoords, id::Id, time::Timestamp};

/// A verified visit of a user at a site.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Visit {
    pub id          : Id,
    /// The user who recorded the visit.
    pub user        : Id,
    pub site        : Id,
    pub method      : VerificationMethod,
    /// Only present for photo-verified visits.
    pub photo_url   : Option<String>,
    pub coordinates : Option<LatLngCoords>,
    pub created_at  : Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationMethod {
    QrScan,
    PhotoUpload,
}

impl VerificationMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::QrScan => "QR_SCAN",
            Self::PhotoUpload => "PHOTO_UPLOAD",
        }
    }
}

#[derive(Debug, Error)]
#[error("Invalid verification method")]
pub struct VerificationMethodParseError;

impl FromStr for VerificationMethod {
    type Err = VerificationMethodParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "QR_SCAN" => Ok(Self::QrScan),
            "PHOTO_UPLOAD" => Ok(Self::PhotoUpload),
            _ => Err(VerificationMethodParseError),
        }
    }
}

impl fmt::Display for VerificationMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

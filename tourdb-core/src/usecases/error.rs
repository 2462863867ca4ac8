use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("The country code must consist of exactly 2 characters")]
    CountryCode,
    #[error("Invalid e-mail address")]
    EmailAddress,
    #[error("Invalid password")]
    Password,
    #[error("Invalid verification method")]
    VerificationMethod,
    #[error("A photo URL is required for photo-verified visits")]
    PhotoUrlRequired,
    #[error("Invalid coordinates")]
    Coordinates,
    #[error("Invalid identifier")]
    InvalidId,
    #[error("Invalid user role")]
    InvalidRole,
    #[error("Invalid credentials")]
    Credentials,
    #[error("This is not allowed without authentication")]
    Unauthorized,
    #[error("This is not allowed")]
    Forbidden,
    #[error("A country with this name or code already exists")]
    CountryExists,
    #[error("A city with this name already exists in this country")]
    CityExists,
    #[error("A site with this name already exists in this city and country")]
    SiteExists,
    #[error("A dish with this name already exists at this site")]
    DishExists,
    #[error("A famous person with this name and place of origin already exists")]
    FamousPersonExists,
    #[error("A user with this e-mail address already exists")]
    UserExists,
    #[error("The referenced country does not exist")]
    CountryNotFound,
    #[error("The referenced city does not exist")]
    CityNotFound,
    #[error("The referenced site does not exist")]
    SiteNotFound,
    #[error("The referenced famous person does not exist")]
    FamousPersonNotFound,
    #[error("The referenced user does not exist")]
    UserNotFound,
    #[error("The {0} is still referenced by dependent records")]
    StillReferenced(&'static str),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<tourdb_entities::password::ParseError> for Error {
    fn from(_: tourdb_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<tourdb_entities::email::EmailAddressParseError> for Error {
    fn from(_: tourdb_entities::email::EmailAddressParseError) -> Self {
        Self::EmailAddress
    }
}

impl From<tourdb_entities::country::CountryCodeParseError> for Error {
    fn from(_: tourdb_entities::country::CountryCodeParseError) -> Self {
        Self::CountryCode
    }
}

impl From<tourdb_entities::visit::VerificationMethodParseError> for Error {
    fn from(_: tourdb_entities::visit::VerificationMethodParseError) -> Self {
        Self::VerificationMethod
    }
}

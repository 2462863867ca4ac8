// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};
use num_traits::{FromPrimitive as _, ToPrimitive as _};

use tourdb_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod city;
mod country;
mod dish;
mod famous_person;
mod famous_person_tag;
mod site;
mod user;
mod visit;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn role_into_i16(role: Role) -> i16 {
    // Infallible, the enum only has small discriminants.
    role.to_i16().unwrap_or_default()
}

fn load_role(role: i16) -> Result<Role> {
    Role::from_i16(role).ok_or_else(|| anyhow!("Invalid user role: {role}").into())
}

fn load_verification_method(method: &str) -> Result<VerificationMethod> {
    method
        .parse()
        .map_err(|_| anyhow!("Invalid verification method: {method}").into())
}

fn load_user(from: models::UserEntity) -> Result<User> {
    let models::UserEntity {
        id,
        email,
        password,
        role,
        created_at,
    } = from;
    Ok(User {
        id: id.into(),
        email: EmailAddress::new_unchecked(email),
        password: password.into(),
        role: load_role(role)?,
        created_at: created_at.into(),
    })
}

fn load_visit(from: models::VisitEntity) -> Result<Visit> {
    let models::VisitEntity {
        id,
        user,
        site,
        method,
        photo_url,
        lat,
        lng,
        created_at,
    } = from;
    Ok(Visit {
        id: id.into(),
        user: user.into(),
        site: site.into(),
        method: load_verification_method(&method)?,
        photo_url,
        coordinates: match (lat, lng) {
            (Some(lat), Some(lng)) => Some(LatLngCoords { lat, lng }),
            _ => None,
        },
        created_at: created_at.into(),
    })
}

// Case-insensitive substring filter for LIKE.
fn substring_pattern(filter: &str) -> String {
    format!("%{filter}%")
}

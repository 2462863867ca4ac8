mod authorize;
mod cities;
mod countries;
mod dishes;
mod error;
mod famous_people;
mod famous_person_tags;
mod login;
mod register;
mod sites;
mod users;
mod visits;

#[cfg(test)]
pub mod tests;

pub use self::{
    authorize::*, cities::*, countries::*, dishes::*, error::Error, famous_people::*,
    famous_person_tags::*, login::*, register::*, sites::*, users::*, visits::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::Error as RepoError, repositories::*};
}
use self::prelude::*;

/// Parses an entity key received as a path or query parameter.
///
/// Malformed keys are rejected before any repository lookup.
pub fn parse_id_param(s: &str) -> Result<Id> {
    let id = Id::from(s);
    if !id.is_valid() {
        return Err(Error::InvalidId);
    }
    Ok(id)
}

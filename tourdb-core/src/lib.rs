//! # tourdb-core
//!
//! Repository abstractions and use cases (validation, relational integrity,
//! authorization) of the tourdb backend.

pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use tourdb_entities::{
        city::*, country::*, dish::*, email::*, famous_person::*, geo::*, id::*, password::*,
        site::*, tag::*, time::*, user::*, visit::*,
    };
}

#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # tourdb-entities
//!
//! Reusable, agnostic domain entities for tourdb.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod city;
pub mod country;
pub mod dish;
pub mod email;
pub mod famous_person;
pub mod geo;
pub mod id;
pub mod password;
pub mod site;
pub mod tag;
pub mod time;
pub mod user;
pub mod visit;

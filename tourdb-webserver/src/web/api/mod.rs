use std::{fmt::Display, result};

use rocket::{
    self, delete, get,
    http::Status,
    post, put,
    response::{self, status::Custom, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    Route, State,
};

use super::guards::*;
use crate::{
    adapters::json::{self, from_json},
    web::{jwt, sqlite},
};
use tourdb_core::{
    entities::*,
    repositories::{CityQuery, DishQuery, FamousPersonQuery, SiteQuery, TagQuery, VisitQuery},
    usecases,
};

mod auth;
mod cities;
mod countries;
mod dishes;
mod error;
mod famous_people;
mod famous_person_tags;
mod sites;
mod users;
mod visits;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;
type CreatedResult<T> = result::Result<Custom<Json<T>>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

fn created<T>(body: T) -> Custom<Json<T>> {
    Custom(Status::Created, Json(body))
}

fn deleted(what: &str) -> Json<json::ResponseMessage> {
    Json(json::ResponseMessage {
        message: format!("{what} deleted successfully"),
    })
}

pub fn routes() -> Vec<Route> {
    routes![
        // ---   auth   --- //
        auth::post_register,
        auth::post_login,
        auth::post_logout,
        auth::get_me,
        // ---   countries   --- //
        countries::post_country,
        countries::get_countries,
        countries::get_country,
        countries::put_country,
        countries::delete_country,
        // ---   cities   --- //
        cities::post_city,
        cities::get_cities,
        cities::get_city,
        cities::put_city,
        cities::delete_city,
        // ---   sites   --- //
        sites::post_site,
        sites::get_sites,
        sites::get_site,
        sites::put_site,
        sites::delete_site,
        // ---   dishes   --- //
        dishes::post_dish,
        dishes::get_dishes,
        dishes::get_dish,
        dishes::put_dish,
        dishes::delete_dish,
        // ---   famous people   --- //
        famous_people::post_famous_person,
        famous_people::get_famous_people,
        famous_people::get_famous_person,
        famous_people::put_famous_person,
        famous_people::delete_famous_person,
        // ---   famous person tags   --- //
        famous_person_tags::post_tag,
        famous_person_tags::get_tags,
        famous_person_tags::get_tag,
        famous_person_tags::put_tag,
        famous_person_tags::delete_tag,
        // ---   visits   --- //
        visits::post_visit,
        visits::get_visits,
        visits::get_visit,
        visits::put_visit,
        visits::delete_visit,
        // ---   users   --- //
        users::get_users,
        users::get_user,
        users::put_user,
        users::delete_user,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    Json(json::ResponseMessage { message })
        .respond_to(req)
        .map(|mut res| {
            res.set_status(status);
            res
        })
}

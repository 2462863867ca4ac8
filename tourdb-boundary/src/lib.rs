//! Serializable, anemic data structures of the JSON API.

use serde::{Deserialize, Serialize};

mod conv;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// Reduced projection of a referenced record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: String,
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub name: String,
    pub country: EntityRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: String,
    pub name: String,
    pub city: EntityRef,
    pub country: EntityRef,
    #[serde(rename = "type")]
    pub site_type: String,
    pub description: String,
    pub coordinates: Coordinate,
    pub image_url: String,
    pub qr_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub country: EntityRef,
    pub site: EntityRef,
    pub description: String,
    pub price: f64,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamousPerson {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub city_of_birth: EntityRef,
    pub country_of_origin: EntityRef,
    pub category: String,
    pub description: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamousPersonTag {
    pub id: String,
    /// The author, projected with their e-mail address.
    pub user: EntityRef,
    pub famous_person: EntityRef,
    pub tag: String,
    pub created_at: i64,
    pub photo_url: String,
    pub coordinates: Coordinate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    pub id: String,
    pub user: EntityRef,
    pub site: EntityRef,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinate>,
    pub created_at: i64,
}

/// Public view of an account, the password hash never leaves
/// the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    CommonUser,
}

/// Response of a successful registration or login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSuccess {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseMessage {
    pub message: String,
}

// -- Request bodies --
//
// All fields are optional so that missing ones can be reported
// individually instead of failing deserialization wholesale.

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountryRequest {
    pub name: Option<String>,
    pub code: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CityRequest {
    pub name: Option<String>,
    pub country: Option<String>,
    pub coordinates: Option<Coordinate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteRequest {
    pub name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    #[serde(rename = "type")]
    pub site_type: Option<String>,
    pub description: Option<String>,
    pub coordinates: Option<Coordinate>,
    pub image_url: Option<String>,
    pub qr_code: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishRequest {
    pub name: Option<String>,
    pub country: Option<String>,
    pub site: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamousPersonRequest {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub city_of_birth: Option<String>,
    pub country_of_origin: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamousPersonTagRequest {
    pub famous_person: Option<String>,
    pub tag: Option<String>,
    pub photo_url: Option<String>,
    pub coordinates: Option<Coordinate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitRequest {
    pub site: Option<String>,
    pub method: Option<String>,
    pub photo_url: Option<String>,
    pub coordinates: Option<Coordinate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in seconds.

use super::schema::*;
use tourdb_core::entities as e;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = countries)]
pub struct NewCountry<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub code: &'a str,
}

#[derive(Queryable)]
pub struct CountryEntity {
    pub id: String,
    pub name: String,
    pub code: String,
}

impl From<CountryEntity> for e::Country {
    fn from(from: CountryEntity) -> Self {
        let CountryEntity { id, name, code } = from;
        Self {
            id: id.into(),
            name,
            // Codes are validated before they are persisted.
            code: e::CountryCode::new_unchecked(code),
        }
    }
}

impl<'a> From<&'a e::Country> for NewCountry<'a> {
    fn from(from: &'a e::Country) -> Self {
        Self {
            id: from.id.as_str(),
            name: &from.name,
            code: from.code.as_str(),
        }
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = cities)]
pub struct NewCity<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub country: &'a str,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Queryable)]
pub struct CityEntity {
    pub id: String,
    pub name: String,
    pub country: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl From<CityEntity> for e::City {
    fn from(from: CityEntity) -> Self {
        let CityEntity {
            id,
            name,
            country,
            lat,
            lng,
        } = from;
        Self {
            id: id.into(),
            name,
            country: country.into(),
            coordinates: match (lat, lng) {
                (Some(lat), Some(lng)) => Some(e::LatLngCoords { lat, lng }),
                _ => None,
            },
        }
    }
}

impl<'a> From<&'a e::City> for NewCity<'a> {
    fn from(from: &'a e::City) -> Self {
        Self {
            id: from.id.as_str(),
            name: &from.name,
            country: from.country.as_str(),
            lat: from.coordinates.map(|c| c.lat),
            lng: from.coordinates.map(|c| c.lng),
        }
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = sites)]
pub struct NewSite<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub city: &'a str,
    pub country: &'a str,
    pub site_type: &'a str,
    pub description: &'a str,
    pub lat: f64,
    pub lng: f64,
    pub image_url: &'a str,
    pub qr_code: &'a str,
}

#[derive(Queryable)]
pub struct SiteEntity {
    pub id: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub site_type: String,
    pub description: String,
    pub lat: f64,
    pub lng: f64,
    pub image_url: String,
    pub qr_code: String,
}

impl From<SiteEntity> for e::Site {
    fn from(from: SiteEntity) -> Self {
        let SiteEntity {
            id,
            name,
            city,
            country,
            site_type,
            description,
            lat,
            lng,
            image_url,
            qr_code,
        } = from;
        Self {
            id: id.into(),
            name,
            city: city.into(),
            country: country.into(),
            site_type,
            description,
            coordinates: e::LatLngCoords { lat, lng },
            image_url,
            qr_code,
        }
    }
}

impl<'a> From<&'a e::Site> for NewSite<'a> {
    fn from(from: &'a e::Site) -> Self {
        Self {
            id: from.id.as_str(),
            name: &from.name,
            city: from.city.as_str(),
            country: from.country.as_str(),
            site_type: &from.site_type,
            description: &from.description,
            lat: from.coordinates.lat,
            lng: from.coordinates.lng,
            image_url: &from.image_url,
            qr_code: &from.qr_code,
        }
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = dishes)]
pub struct NewDish<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub country: &'a str,
    pub site: &'a str,
    pub description: &'a str,
    pub price: f64,
    pub image_url: &'a str,
}

#[derive(Queryable)]
pub struct DishEntity {
    pub id: String,
    pub name: String,
    pub country: String,
    pub site: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
}

impl From<DishEntity> for e::Dish {
    fn from(from: DishEntity) -> Self {
        let DishEntity {
            id,
            name,
            country,
            site,
            description,
            price,
            image_url,
        } = from;
        Self {
            id: id.into(),
            name,
            country: country.into(),
            site: site.into(),
            description,
            price,
            image_url,
        }
    }
}

impl<'a> From<&'a e::Dish> for NewDish<'a> {
    fn from(from: &'a e::Dish) -> Self {
        Self {
            id: from.id.as_str(),
            name: &from.name,
            country: from.country.as_str(),
            site: from.site.as_str(),
            description: &from.description,
            price: from.price,
            image_url: &from.image_url,
        }
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = famous_people)]
pub struct NewFamousPerson<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub last_name: Option<&'a str>,
    pub city_of_birth: &'a str,
    pub country_of_origin: &'a str,
    pub category: &'a str,
    pub description: &'a str,
    pub image_url: &'a str,
}

#[derive(Queryable)]
pub struct FamousPersonEntity {
    pub id: String,
    pub name: String,
    pub last_name: Option<String>,
    pub city_of_birth: String,
    pub country_of_origin: String,
    pub category: String,
    pub description: String,
    pub image_url: String,
}

impl From<FamousPersonEntity> for e::FamousPerson {
    fn from(from: FamousPersonEntity) -> Self {
        let FamousPersonEntity {
            id,
            name,
            last_name,
            city_of_birth,
            country_of_origin,
            category,
            description,
            image_url,
        } = from;
        Self {
            id: id.into(),
            name,
            last_name,
            city_of_birth: city_of_birth.into(),
            country_of_origin: country_of_origin.into(),
            category,
            description,
            image_url,
        }
    }
}

impl<'a> From<&'a e::FamousPerson> for NewFamousPerson<'a> {
    fn from(from: &'a e::FamousPerson) -> Self {
        Self {
            id: from.id.as_str(),
            name: &from.name,
            last_name: from.last_name.as_deref(),
            city_of_birth: from.city_of_birth.as_str(),
            country_of_origin: from.country_of_origin.as_str(),
            category: &from.category,
            description: &from.description,
            image_url: &from.image_url,
        }
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = famous_person_tags)]
pub struct NewFamousPersonTag<'a> {
    pub id: &'a str,
    pub user: &'a str,
    pub famous_person: &'a str,
    pub tag: &'a str,
    pub created_at: i64,
    pub photo_url: &'a str,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Queryable)]
pub struct FamousPersonTagEntity {
    pub id: String,
    pub user: String,
    pub famous_person: String,
    pub tag: String,
    pub created_at: i64,
    pub photo_url: String,
    pub lat: f64,
    pub lng: f64,
}

impl From<FamousPersonTagEntity> for e::FamousPersonTag {
    fn from(from: FamousPersonTagEntity) -> Self {
        let FamousPersonTagEntity {
            id,
            user,
            famous_person,
            tag,
            created_at,
            photo_url,
            lat,
            lng,
        } = from;
        Self {
            id: id.into(),
            user: user.into(),
            famous_person: famous_person.into(),
            tag,
            created_at: created_at.into(),
            photo_url,
            coordinates: e::LatLngCoords { lat, lng },
        }
    }
}

impl<'a> From<&'a e::FamousPersonTag> for NewFamousPersonTag<'a> {
    fn from(from: &'a e::FamousPersonTag) -> Self {
        Self {
            id: from.id.as_str(),
            user: from.user.as_str(),
            famous_person: from.famous_person.as_str(),
            tag: &from.tag,
            created_at: from.created_at.as_secs(),
            photo_url: &from.photo_url,
            lat: from.coordinates.lat,
            lng: from.coordinates.lng,
        }
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = visits)]
#[diesel(treat_none_as_null = true)]
pub struct NewVisit<'a> {
    pub id: &'a str,
    pub user: &'a str,
    pub site: &'a str,
    pub method: &'a str,
    pub photo_url: Option<&'a str>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct VisitEntity {
    pub id: String,
    pub user: String,
    pub site: String,
    pub method: String,
    pub photo_url: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub created_at: i64,
}

impl<'a> From<&'a e::Visit> for NewVisit<'a> {
    fn from(from: &'a e::Visit) -> Self {
        Self {
            id: from.id.as_str(),
            user: from.user.as_str(),
            site: from.site.as_str(),
            method: from.method.as_str(),
            photo_url: from.photo_url.as_deref(),
            lat: from.coordinates.map(|c| c.lat),
            lng: from.coordinates.map(|c| c.lng),
            created_at: from.created_at.as_secs(),
        }
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub role: i16,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: String,
    pub email: String,
    pub password: String,
    pub role: i16,
    pub created_at: i64,
}

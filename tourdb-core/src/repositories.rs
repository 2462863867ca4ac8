// Low-level database access traits.
// Each repository is responsible for a single entity kind and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait CountryRepo {
    fn create_country(&self, country: &Country) -> Result<()>;
    fn update_country(&self, country: &Country) -> Result<()>;
    fn delete_country(&self, id: &Id) -> Result<()>;

    fn get_country(&self, id: &Id) -> Result<Country>;
    fn all_countries(&self) -> Result<Vec<Country>>;

    fn try_get_country_by_name(&self, name: &str) -> Result<Option<Country>>;
    fn try_get_country_by_code(&self, code: &CountryCode) -> Result<Option<Country>>;
}

#[derive(Clone, Debug, Default)]
pub struct CityQuery {
    pub country: Option<Id>,
}

pub trait CityRepo {
    fn create_city(&self, city: &City) -> Result<()>;
    fn update_city(&self, city: &City) -> Result<()>;
    fn delete_city(&self, id: &Id) -> Result<()>;

    fn get_city(&self, id: &Id) -> Result<City>;
    fn query_cities(&self, query: &CityQuery) -> Result<Vec<City>>;

    fn try_get_city_by_name_and_country(&self, name: &str, country: &Id)
        -> Result<Option<City>>;
    fn count_cities_of_country(&self, country: &Id) -> Result<usize>;
}

#[derive(Clone, Debug, Default)]
pub struct SiteQuery {
    pub city: Option<Id>,
    pub country: Option<Id>,
    /// Case-insensitive substring match.
    pub site_type: Option<String>,
}

pub trait SiteRepo {
    fn create_site(&self, site: &Site) -> Result<()>;
    fn update_site(&self, site: &Site) -> Result<()>;
    fn delete_site(&self, id: &Id) -> Result<()>;

    fn get_site(&self, id: &Id) -> Result<Site>;
    fn query_sites(&self, query: &SiteQuery) -> Result<Vec<Site>>;

    fn try_get_site_by_name_city_country(
        &self,
        name: &str,
        city: &Id,
        country: &Id,
    ) -> Result<Option<Site>>;
    fn count_sites_of_city(&self, city: &Id) -> Result<usize>;
    fn count_sites_of_country(&self, country: &Id) -> Result<usize>;
}

#[derive(Clone, Debug, Default)]
pub struct DishQuery {
    pub country: Option<Id>,
    pub site: Option<Id>,
    /// Case-insensitive substring match.
    pub name: Option<String>,
}

pub trait DishRepo {
    fn create_dish(&self, dish: &Dish) -> Result<()>;
    fn update_dish(&self, dish: &Dish) -> Result<()>;
    fn delete_dish(&self, id: &Id) -> Result<()>;

    fn get_dish(&self, id: &Id) -> Result<Dish>;
    fn query_dishes(&self, query: &DishQuery) -> Result<Vec<Dish>>;

    fn try_get_dish_by_name_and_site(&self, name: &str, site: &Id) -> Result<Option<Dish>>;
    fn count_dishes_of_site(&self, site: &Id) -> Result<usize>;
    fn count_dishes_of_country(&self, country: &Id) -> Result<usize>;
}

#[derive(Clone, Debug, Default)]
pub struct FamousPersonQuery {
    /// Case-insensitive substring match.
    pub category: Option<String>,
    pub city_of_birth: Option<Id>,
    pub country_of_origin: Option<Id>,
}

/// The combination of fields that identifies a duplicate person record.
#[derive(Clone, Debug)]
pub struct FamousPersonIdentity<'a> {
    pub name: &'a str,
    pub last_name: Option<&'a str>,
    pub city_of_birth: &'a Id,
    pub country_of_origin: &'a Id,
}

pub trait FamousPersonRepo {
    fn create_famous_person(&self, person: &FamousPerson) -> Result<()>;
    fn update_famous_person(&self, person: &FamousPerson) -> Result<()>;
    fn delete_famous_person(&self, id: &Id) -> Result<()>;

    fn get_famous_person(&self, id: &Id) -> Result<FamousPerson>;
    fn query_famous_people(&self, query: &FamousPersonQuery) -> Result<Vec<FamousPerson>>;

    fn try_get_famous_person_by_identity(
        &self,
        identity: &FamousPersonIdentity,
    ) -> Result<Option<FamousPerson>>;
    fn count_famous_people_of_city(&self, city: &Id) -> Result<usize>;
    fn count_famous_people_of_country(&self, country: &Id) -> Result<usize>;
}

#[derive(Clone, Debug, Default)]
pub struct TagQuery {
    pub user: Option<Id>,
    pub famous_person: Option<Id>,
}

pub trait FamousPersonTagRepo {
    fn create_tag(&self, tag: &FamousPersonTag) -> Result<()>;
    fn update_tag(&self, tag: &FamousPersonTag) -> Result<()>;
    fn delete_tag(&self, id: &Id) -> Result<()>;

    fn get_tag(&self, id: &Id) -> Result<FamousPersonTag>;
    fn query_tags(&self, query: &TagQuery) -> Result<Vec<FamousPersonTag>>;

    fn count_tags_of_famous_person(&self, famous_person: &Id) -> Result<usize>;
    fn count_tags_of_user(&self, user: &Id) -> Result<usize>;
}

#[derive(Clone, Debug, Default)]
pub struct VisitQuery {
    pub user: Option<Id>,
    pub site: Option<Id>,
}

pub trait VisitRepo {
    fn create_visit(&self, visit: &Visit) -> Result<()>;
    fn update_visit(&self, visit: &Visit) -> Result<()>;
    fn delete_visit(&self, id: &Id) -> Result<()>;

    fn get_visit(&self, id: &Id) -> Result<Visit>;
    fn query_visits(&self, query: &VisitQuery) -> Result<Vec<Visit>>;

    fn count_visits_of_site(&self, site: &Id) -> Result<usize>;
    fn count_visits_of_user(&self, user: &Id) -> Result<usize>;
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;
    fn delete_user(&self, id: &Id) -> Result<()>;

    fn get_user(&self, id: &Id) -> Result<User>;
    fn try_get_user(&self, id: &Id) -> Result<Option<User>>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;
    fn all_users(&self) -> Result<Vec<User>>;
}

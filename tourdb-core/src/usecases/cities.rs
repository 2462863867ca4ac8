use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone, Default)]
pub struct NewCity {
    pub name: Option<String>,
    pub country: Option<String>,
    pub coordinates: Option<LatLngCoords>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCity {
    pub name: Option<String>,
    pub country: Option<String>,
    pub coordinates: Option<LatLngCoords>,
}

/// A city together with the country it belongs to.
pub type CityWithCountry = (City, Country);

fn resolve_country<R: CountryRepo>(repo: &R, id: &Id) -> Result<Country> {
    repo.get_country(id).map_err(|err| match err {
        RepoError::NotFound => Error::CountryNotFound,
        other => Error::Repo(other),
    })
}

pub fn create_city<R>(repo: &R, new_city: NewCity) -> Result<City>
where
    R: CityRepo + CountryRepo,
{
    let NewCity {
        name,
        country,
        coordinates,
    } = new_city;
    let name = name.ok_or(Error::MissingField("name"))?;
    if !validate::is_valid_text(&name) {
        return Err(Error::MissingField("name"));
    }
    let country = super::parse_id_param(&country.ok_or(Error::MissingField("country"))?)?;
    resolve_country(repo, &country)?;
    if let Some(coords) = &coordinates {
        if !coords.is_valid() {
            return Err(Error::Coordinates);
        }
    }
    if repo
        .try_get_city_by_name_and_country(&name, &country)?
        .is_some()
    {
        return Err(Error::CityExists);
    }
    let city = City {
        id: Id::new(),
        name,
        country,
        coordinates,
    };
    repo.create_city(&city)?;
    Ok(city)
}

pub fn update_city<R>(repo: &R, id: &Id, update: UpdateCity) -> Result<City>
where
    R: CityRepo + CountryRepo,
{
    let mut city = repo.get_city(id)?;
    if let Some(country) = update.country {
        let country = super::parse_id_param(&country)?;
        if country != city.country {
            resolve_country(repo, &country)?;
            city.country = country;
        }
    }
    if let Some(name) = update.name {
        if !validate::is_valid_text(&name) {
            return Err(Error::MissingField("name"));
        }
        city.name = name;
    }
    if let Some(coords) = update.coordinates {
        if !coords.is_valid() {
            return Err(Error::Coordinates);
        }
        city.coordinates = Some(coords);
    }
    if let Some(other) = repo.try_get_city_by_name_and_country(&city.name, &city.country)? {
        if other.id != *id {
            return Err(Error::CityExists);
        }
    }
    repo.update_city(&city)?;
    Ok(city)
}

/// Cities that still have sites or famous people attached
/// cannot be deleted.
pub fn delete_city<R>(repo: &R, id: &Id) -> Result<()>
where
    R: CityRepo + SiteRepo + FamousPersonRepo,
{
    repo.get_city(id)?;
    if repo.count_sites_of_city(id)? > 0 || repo.count_famous_people_of_city(id)? > 0 {
        return Err(Error::StillReferenced("city"));
    }
    repo.delete_city(id)?;
    Ok(())
}

pub fn get_city<R>(repo: &R, id: &Id) -> Result<CityWithCountry>
where
    R: CityRepo + CountryRepo,
{
    let city = repo.get_city(id)?;
    let country = repo.get_country(&city.country)?;
    Ok((city, country))
}

pub fn query_cities<R>(repo: &R, query: CityQuery) -> Result<Vec<CityWithCountry>>
where
    R: CityRepo + CountryRepo,
{
    if let Some(country) = &query.country {
        if !country.is_valid() {
            return Err(Error::InvalidId);
        }
    }
    let cities = repo.query_cities(&query)?;
    let mut results = Vec::with_capacity(cities.len());
    for city in cities {
        let country = repo.get_country(&city.country)?;
        results.push((city, country));
    }
    Ok(results)
}

use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone, Default)]
pub struct NewFamousPerson {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub city_of_birth: Option<String>,
    pub country_of_origin: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateFamousPerson {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub city_of_birth: Option<String>,
    pub country_of_origin: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

pub type FamousPersonWithRefs = (FamousPerson, City, Country);

fn resolve_city<R: CityRepo>(repo: &R, id: &Id) -> Result<City> {
    repo.get_city(id).map_err(|err| match err {
        RepoError::NotFound => Error::CityNotFound,
        other => Error::Repo(other),
    })
}

fn resolve_country<R: CountryRepo>(repo: &R, id: &Id) -> Result<Country> {
    repo.get_country(id).map_err(|err| match err {
        RepoError::NotFound => Error::CountryNotFound,
        other => Error::Repo(other),
    })
}

fn check_identity_collision<R: FamousPersonRepo>(
    repo: &R,
    person: &FamousPerson,
) -> Result<()> {
    let identity = FamousPersonIdentity {
        name: &person.name,
        last_name: person.last_name.as_deref(),
        city_of_birth: &person.city_of_birth,
        country_of_origin: &person.country_of_origin,
    };
    if let Some(other) = repo.try_get_famous_person_by_identity(&identity)? {
        if other.id != person.id {
            return Err(Error::FamousPersonExists);
        }
    }
    Ok(())
}

pub fn create_famous_person<R>(repo: &R, new_person: NewFamousPerson) -> Result<FamousPerson>
where
    R: FamousPersonRepo + CityRepo + CountryRepo,
{
    let NewFamousPerson {
        name,
        last_name,
        city_of_birth,
        country_of_origin,
        category,
        description,
        image_url,
    } = new_person;
    let name = name.ok_or(Error::MissingField("name"))?;
    if !validate::is_valid_text(&name) {
        return Err(Error::MissingField("name"));
    }
    let city_of_birth =
        super::parse_id_param(&city_of_birth.ok_or(Error::MissingField("cityOfBirth"))?)?;
    let country_of_origin =
        super::parse_id_param(&country_of_origin.ok_or(Error::MissingField("countryOfOrigin"))?)?;
    let category = category.ok_or(Error::MissingField("category"))?;
    let description = description.ok_or(Error::MissingField("description"))?;
    let image_url = image_url.ok_or(Error::MissingField("imageUrl"))?;
    resolve_city(repo, &city_of_birth)?;
    resolve_country(repo, &country_of_origin)?;
    let person = FamousPerson {
        id: Id::new(),
        name,
        last_name,
        city_of_birth,
        country_of_origin,
        category,
        description,
        image_url,
    };
    check_identity_collision(repo, &person)?;
    repo.create_famous_person(&person)?;
    Ok(person)
}

pub fn update_famous_person<R>(
    repo: &R,
    id: &Id,
    update: UpdateFamousPerson,
) -> Result<FamousPerson>
where
    R: FamousPersonRepo + CityRepo + CountryRepo,
{
    let mut person = repo.get_famous_person(id)?;
    if let Some(city) = update.city_of_birth {
        let city = super::parse_id_param(&city)?;
        if city != person.city_of_birth {
            resolve_city(repo, &city)?;
            person.city_of_birth = city;
        }
    }
    if let Some(country) = update.country_of_origin {
        let country = super::parse_id_param(&country)?;
        if country != person.country_of_origin {
            resolve_country(repo, &country)?;
            person.country_of_origin = country;
        }
    }
    if let Some(name) = update.name {
        if !validate::is_valid_text(&name) {
            return Err(Error::MissingField("name"));
        }
        person.name = name;
    }
    if let Some(last_name) = update.last_name {
        person.last_name = Some(last_name);
    }
    if let Some(category) = update.category {
        person.category = category;
    }
    if let Some(description) = update.description {
        person.description = description;
    }
    if let Some(image_url) = update.image_url {
        person.image_url = image_url;
    }
    check_identity_collision(repo, &person)?;
    repo.update_famous_person(&person)?;
    Ok(person)
}

/// People with tags attached cannot be deleted.
pub fn delete_famous_person<R>(repo: &R, id: &Id) -> Result<()>
where
    R: FamousPersonRepo + FamousPersonTagRepo,
{
    repo.get_famous_person(id)?;
    if repo.count_tags_of_famous_person(id)? > 0 {
        return Err(Error::StillReferenced("famous person"));
    }
    repo.delete_famous_person(id)?;
    Ok(())
}

pub fn get_famous_person<R>(repo: &R, id: &Id) -> Result<FamousPersonWithRefs>
where
    R: FamousPersonRepo + CityRepo + CountryRepo,
{
    let person = repo.get_famous_person(id)?;
    let city = repo.get_city(&person.city_of_birth)?;
    let country = repo.get_country(&person.country_of_origin)?;
    Ok((person, city, country))
}

pub fn query_famous_people<R>(repo: &R, query: FamousPersonQuery) -> Result<Vec<FamousPersonWithRefs>>
where
    R: FamousPersonRepo + CityRepo + CountryRepo,
{
    if let Some(city) = &query.city_of_birth {
        if !city.is_valid() {
            return Err(Error::InvalidId);
        }
    }
    if let Some(country) = &query.country_of_origin {
        if !country.is_valid() {
            return Err(Error::InvalidId);
        }
    }
    let people = repo.query_famous_people(&query)?;
    let mut results = Vec::with_capacity(people.len());
    for person in people {
        let city = repo.get_city(&person.city_of_birth)?;
        let country = repo.get_country(&person.country_of_origin)?;
        results.push((person, city, country));
    }
    Ok(results)
}

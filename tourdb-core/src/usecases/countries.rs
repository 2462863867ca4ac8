use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone, Default)]
pub struct NewCountry {
    pub name: Option<String>,
    pub code: Option<String>,
}

/// Partial update, absent fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateCountry {
    pub name: Option<String>,
    pub code: Option<String>,
}

pub fn create_country<R: CountryRepo>(repo: &R, new_country: NewCountry) -> Result<Country> {
    let NewCountry { name, code } = new_country;
    let name = name.ok_or(Error::MissingField("name"))?;
    if !validate::is_valid_text(&name) {
        return Err(Error::MissingField("name"));
    }
    let code: CountryCode = code.ok_or(Error::MissingField("code"))?.parse()?;
    if repo.try_get_country_by_name(&name)?.is_some()
        || repo.try_get_country_by_code(&code)?.is_some()
    {
        return Err(Error::CountryExists);
    }
    let country = Country {
        id: Id::new(),
        name,
        code,
    };
    repo.create_country(&country)?;
    Ok(country)
}

pub fn update_country<R: CountryRepo>(
    repo: &R,
    id: &Id,
    update: UpdateCountry,
) -> Result<Country> {
    let mut country = repo.get_country(id)?;
    if let Some(name) = update.name {
        if !validate::is_valid_text(&name) {
            return Err(Error::MissingField("name"));
        }
        if name != country.name {
            if let Some(other) = repo.try_get_country_by_name(&name)? {
                if other.id != *id {
                    return Err(Error::CountryExists);
                }
            }
            country.name = name;
        }
    }
    if let Some(code) = update.code {
        let code: CountryCode = code.parse()?;
        if code != country.code {
            if let Some(other) = repo.try_get_country_by_code(&code)? {
                if other.id != *id {
                    return Err(Error::CountryExists);
                }
            }
            country.code = code;
        }
    }
    repo.update_country(&country)?;
    Ok(country)
}

/// Countries that are still referenced by cities, sites, dishes
/// or famous people cannot be deleted.
pub fn delete_country<R>(repo: &R, id: &Id) -> Result<()>
where
    R: CountryRepo + CityRepo + SiteRepo + DishRepo + FamousPersonRepo,
{
    // Ensures a proper not-found error for unknown ids.
    repo.get_country(id)?;
    if repo.count_cities_of_country(id)? > 0
        || repo.count_sites_of_country(id)? > 0
        || repo.count_dishes_of_country(id)? > 0
        || repo.count_famous_people_of_country(id)? > 0
    {
        return Err(Error::StillReferenced("country"));
    }
    repo.delete_country(id)?;
    Ok(())
}

pub fn get_country<R: CountryRepo>(repo: &R, id: &Id) -> Result<Country> {
    Ok(repo.get_country(id)?)
}

pub fn get_all_countries<R: CountryRepo>(repo: &R) -> Result<Vec<Country>> {
    Ok(repo.all_countries()?)
}

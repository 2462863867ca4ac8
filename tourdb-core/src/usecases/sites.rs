use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone, Default)]
pub struct NewSite {
    pub name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub site_type: Option<String>,
    pub description: Option<String>,
    pub coordinates: Option<LatLngCoords>,
    pub image_url: Option<String>,
    pub qr_code: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSite {
    pub name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub site_type: Option<String>,
    pub description: Option<String>,
    pub coordinates: Option<LatLngCoords>,
    pub image_url: Option<String>,
    pub qr_code: Option<String>,
}

pub type SiteWithRefs = (Site, City, Country);

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

pub fn create_site<R>(repo: &R, new_site: NewSite) -> Result<Site>
where
    R: SiteRepo + CityRepo + CountryRepo,
{
    let NewSite {
        name,
        city,
        country,
        site_type,
        description,
        coordinates,
        image_url,
        qr_code,
    } = new_site;
    let name = name.ok_or(Error::MissingField("name"))?;
    if !validate::is_valid_text(&name) {
        return Err(Error::MissingField("name"));
    }
    let city = super::parse_id_param(&city.ok_or(Error::MissingField("city"))?)?;
    let country = super::parse_id_param(&country.ok_or(Error::MissingField("country"))?)?;
    let site_type = site_type.ok_or(Error::MissingField("type"))?;
    let description = description.ok_or(Error::MissingField("description"))?;
    let coordinates = coordinates.ok_or(Error::MissingField("coordinates"))?;
    let image_url = image_url.ok_or(Error::MissingField("imageUrl"))?;
    let qr_code = qr_code.ok_or(Error::MissingField("qrCode"))?;
    if !coordinates.is_valid() {
        return Err(Error::Coordinates);
    }
    // References are resolved one by one, the first missing one wins.
    resolve_city(repo, &city)?;
    resolve_country(repo, &country)?;
    if repo
        .try_get_site_by_name_city_country(&name, &city, &country)?
        .is_some()
    {
        return Err(Error::SiteExists);
    }
    let site = Site {
        id: Id::new(),
        name,
        city,
        country,
        site_type,
        description,
        coordinates,
        image_url,
        qr_code,
    };
    repo.create_site(&site)?;
    Ok(site)
}

pub fn update_site<R>(repo: &R, id: &Id, update: UpdateSite) -> Result<Site>
where
    R: SiteRepo + CityRepo + CountryRepo,
{
    let mut site = repo.get_site(id)?;
    if let Some(city) = update.city {
        let city = super::parse_id_param(&city)?;
        if city != site.city {
            resolve_city(repo, &city)?;
            site.city = city;
        }
    }
    if let Some(country) = update.country {
        let country = super::parse_id_param(&country)?;
        if country != site.country {
            resolve_country(repo, &country)?;
            site.country = country;
        }
    }
    if let Some(name) = update.name {
        if !validate::is_valid_text(&name) {
            return Err(Error::MissingField("name"));
        }
        site.name = name;
    }
    if let Some(site_type) = update.site_type {
        site.site_type = site_type;
    }
    if let Some(description) = update.description {
        site.description = description;
    }
    if let Some(coordinates) = update.coordinates {
        if !coordinates.is_valid() {
            return Err(Error::Coordinates);
        }
        site.coordinates = coordinates;
    }
    if let Some(image_url) = update.image_url {
        site.image_url = image_url;
    }
    if let Some(qr_code) = update.qr_code {
        site.qr_code = qr_code;
    }
    if let Some(other) =
        repo.try_get_site_by_name_city_country(&site.name, &site.city, &site.country)?
    {
        if other.id != *id {
            return Err(Error::SiteExists);
        }
    }
    repo.update_site(&site)?;
    Ok(site)
}

/// Sites that still have dishes or visits attached cannot be deleted.
pub fn delete_site<R>(repo: &R, id: &Id) -> Result<()>
where
    R: SiteRepo + DishRepo + VisitRepo,
{
    repo.get_site(id)?;
    if repo.count_dishes_of_site(id)? > 0 || repo.count_visits_of_site(id)? > 0 {
        return Err(Error::StillReferenced("site"));
    }
    repo.delete_site(id)?;
    Ok(())
}

pub fn get_site<R>(repo: &R, id: &Id) -> Result<SiteWithRefs>
where
    R: SiteRepo + CityRepo + CountryRepo,
{
    let site = repo.get_site(id)?;
    let city = repo.get_city(&site.city)?;
    let country = repo.get_country(&site.country)?;
    Ok((site, city, country))
}

pub fn query_sites<R>(repo: &R, query: SiteQuery) -> Result<Vec<SiteWithRefs>>
where
    R: SiteRepo + CityRepo + CountryRepo,
{
    if let Some(city) = &query.city {
        if !city.is_valid() {
            return Err(Error::InvalidId);
        }
    }
    if let Some(country) = &query.country {
        if !country.is_valid() {
            return Err(Error::InvalidId);
        }
    }
    let sites = repo.query_sites(&query)?;
    let mut results = Vec::with_capacity(sites.len());
    for site in sites {
        let city = repo.get_city(&site.city)?;
        let country = repo.get_country(&site.country)?;
        results.push((site, city, country));
    }
    Ok(results)
}

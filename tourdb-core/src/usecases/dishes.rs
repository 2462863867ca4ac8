use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone, Default)]
pub struct NewDish {
    pub name: Option<String>,
    pub country: Option<String>,
    pub site: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateDish {
    pub name: Option<String>,
    pub country: Option<String>,
    pub site: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
}

pub type DishWithRefs = (Dish, Country, Site);

fn resolve_country<R: CountryRepo>(repo: &R, id: &Id) -> Result<Country> {
    repo.get_country(id).map_err(|err| match err {
        RepoError::NotFound => Error::CountryNotFound,
        other => Error::Repo(other),
    })
}

fn resolve_site<R: SiteRepo>(repo: &R, id: &Id) -> Result<Site> {
    repo.get_site(id).map_err(|err| match err {
        RepoError::NotFound => Error::SiteNotFound,
        other => Error::Repo(other),
    })
}

pub fn create_dish<R>(repo: &R, new_dish: NewDish) -> Result<Dish>
where
    R: DishRepo + CountryRepo + SiteRepo,
{
    let NewDish {
        name,
        country,
        site,
        description,
        price,
        image_url,
    } = new_dish;
    let name = name.ok_or(Error::MissingField("name"))?;
    if !validate::is_valid_text(&name) {
        return Err(Error::MissingField("name"));
    }
    let country = super::parse_id_param(&country.ok_or(Error::MissingField("country"))?)?;
    let description = description.ok_or(Error::MissingField("description"))?;
    let price = price.ok_or(Error::MissingField("price"))?;
    let site = super::parse_id_param(&site.ok_or(Error::MissingField("site"))?)?;
    let image_url = image_url.ok_or(Error::MissingField("imageUrl"))?;
    resolve_country(repo, &country)?;
    resolve_site(repo, &site)?;
    if repo.try_get_dish_by_name_and_site(&name, &site)?.is_some() {
        return Err(Error::DishExists);
    }
    let dish = Dish {
        id: Id::new(),
        name,
        country,
        site,
        description,
        price,
        image_url,
    };
    repo.create_dish(&dish)?;
    Ok(dish)
}

pub fn update_dish<R>(repo: &R, id: &Id, update: UpdateDish) -> Result<Dish>
where
    R: DishRepo + CountryRepo + SiteRepo,
{
    let mut dish = repo.get_dish(id)?;
    if let Some(country) = update.country {
        let country = super::parse_id_param(&country)?;
        if country != dish.country {
            resolve_country(repo, &country)?;
            dish.country = country;
        }
    }
    if let Some(site) = update.site {
        let site = super::parse_id_param(&site)?;
        if site != dish.site {
            resolve_site(repo, &site)?;
            dish.site = site;
        }
    }
    if let Some(name) = update.name {
        if !validate::is_valid_text(&name) {
            return Err(Error::MissingField("name"));
        }
        dish.name = name;
    }
    if let Some(description) = update.description {
        dish.description = description;
    }
    if let Some(price) = update.price {
        dish.price = price;
    }
    if let Some(image_url) = update.image_url {
        dish.image_url = image_url;
    }
    if let Some(other) = repo.try_get_dish_by_name_and_site(&dish.name, &dish.site)? {
        if other.id != *id {
            return Err(Error::DishExists);
        }
    }
    repo.update_dish(&dish)?;
    Ok(dish)
}

pub fn delete_dish<R: DishRepo>(repo: &R, id: &Id) -> Result<()> {
    repo.get_dish(id)?;
    repo.delete_dish(id)?;
    Ok(())
}

pub fn get_dish<R>(repo: &R, id: &Id) -> Result<DishWithRefs>
where
    R: DishRepo + CountryRepo + SiteRepo,
{
    let dish = repo.get_dish(id)?;
    let country = repo.get_country(&dish.country)?;
    let site = repo.get_site(&dish.site)?;
    Ok((dish, country, site))
}

pub fn query_dishes<R>(repo: &R, query: DishQuery) -> Result<Vec<DishWithRefs>>
where
    R: DishRepo + CountryRepo + SiteRepo,
{
    if let Some(country) = &query.country {
        if !country.is_valid() {
            return Err(Error::InvalidId);
        }
    }
    if let Some(site) = &query.site {
        if !site.is_valid() {
            return Err(Error::InvalidId);
        }
    }
    let dishes = repo.query_dishes(&query)?;
    let mut results = Vec::with_capacity(dishes.len());
    for dish in dishes {
        let country = repo.get_country(&dish.country)?;
        let site = repo.get_site(&dish.site)?;
        results.push((dish, country, site));
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    struct Fixture {
        country: Country,
        site: Site,
    }

    fn fixture(db: &MockDb) -> Fixture {
        let country = db.create_test_country("Colombia", "CO");
        let city = db.create_test_city("Bogota", &country.id);
        let site = db.create_test_site("Gold Museum", &city.id, &country.id);
        Fixture { country, site }
    }

    fn new_dish(name: &str, country: &Id, site: &Id) -> NewDish {
        NewDish {
            name: Some(name.into()),
            country: Some(country.to_string()),
            site: Some(site.to_string()),
            description: Some("typical dish".into()),
            price: Some(12.5),
            image_url: Some("https://img.example/dish.jpg".into()),
        }
    }

    #[test]
    fn create_with_existing_references() {
        let db = MockDb::default();
        let fx = fixture(&db);
        let dish = create_dish(&db, new_dish("Ajiaco", &fx.country.id, &fx.site.id)).unwrap();
        assert_eq!(fx.site.id, dish.site);
        assert_eq!(12.5, dish.price);
    }

    #[test]
    fn create_requires_a_price() {
        let db = MockDb::default();
        let fx = fixture(&db);
        let mut incomplete = new_dish("Ajiaco", &fx.country.id, &fx.site.id);
        incomplete.price = None;
        assert!(matches!(
            create_dish(&db, incomplete),
            Err(Error::MissingField("price"))
        ));
    }

    #[test]
    fn create_with_dangling_site() {
        let db = MockDb::default();
        let fx = fixture(&db);
        assert!(matches!(
            create_dish(&db, new_dish("Ajiaco", &fx.country.id, &Id::new())),
            Err(Error::SiteNotFound)
        ));
        assert!(db.dishes.borrow().is_empty());
    }

    #[test]
    fn create_duplicate_name_at_same_site() {
        let db = MockDb::default();
        let fx = fixture(&db);
        create_dish(&db, new_dish("Ajiaco", &fx.country.id, &fx.site.id)).unwrap();
        assert!(matches!(
            create_dish(&db, new_dish("Ajiaco", &fx.country.id, &fx.site.id)),
            Err(Error::DishExists)
        ));
        // The same name at another site is fine.
        let city = db.create_test_city("Cali", &fx.country.id);
        let other_site = db.create_test_site("Cat Park", &city.id, &fx.country.id);
        assert!(create_dish(&db, new_dish("Ajiaco", &fx.country.id, &other_site.id)).is_ok());
    }

    #[test]
    fn query_by_name_is_case_insensitive() {
        let db = MockDb::default();
        let fx = fixture(&db);
        create_dish(&db, new_dish("Ajiaco Santafereño", &fx.country.id, &fx.site.id)).unwrap();
        let results = query_dishes(
            &db,
            DishQuery {
                name: Some("ajiaco".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(1, results.len());
        assert_eq!("Colombia", results[0].1.name);
        assert_eq!("Gold Museum", results[0].2.name);
    }
}

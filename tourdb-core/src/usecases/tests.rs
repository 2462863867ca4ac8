use std::{cell::RefCell, result};

use crate::{
    entities::*,
    repositories::{Error as RepoError, *},
};

type RepoResult<T> = result::Result<T, RepoError>;

trait Key {
    fn key(&self) -> &Id;
}

impl Key for Country {
    fn key(&self) -> &Id {
        &self.id
    }
}

impl Key for City {
    fn key(&self) -> &Id {
        &self.id
    }
}

impl Key for Site {
    fn key(&self) -> &Id {
        &self.id
    }
}

impl Key for Dish {
    fn key(&self) -> &Id {
        &self.id
    }
}

impl Key for FamousPerson {
    fn key(&self) -> &Id {
        &self.id
    }
}

impl Key for FamousPersonTag {
    fn key(&self) -> &Id {
        &self.id
    }
}

impl Key for Visit {
    fn key(&self) -> &Id {
        &self.id
    }
}

impl Key for User {
    fn key(&self) -> &Id {
        &self.id
    }
}

fn get<T: Clone + Key>(objects: &[T], id: &Id) -> RepoResult<T> {
    match objects.iter().find(|x| x.key() == id) {
        Some(x) => Ok(x.clone()),
        None => Err(RepoError::NotFound),
    }
}

fn create<T: Clone + Key>(objects: &mut Vec<T>, e: T) -> RepoResult<()> {
    if objects.iter().any(|x| x.key() == e.key()) {
        return Err(RepoError::AlreadyExists);
    }
    objects.push(e);
    Ok(())
}

fn update<T: Clone + Key>(objects: &mut [T], e: &T) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.key() == e.key()) {
        objects[pos] = e.clone();
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

fn delete<T: Clone + Key>(objects: &mut Vec<T>, id: &Id) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.key() == id) {
        objects.remove(pos);
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

fn matches_filter(filter: &Option<Id>, id: &Id) -> bool {
    filter.as_ref().map(|f| f == id).unwrap_or(true)
}

fn matches_substring(filter: &Option<String>, value: &str) -> bool {
    filter
        .as_ref()
        .map(|f| value.to_lowercase().contains(&f.to_lowercase()))
        .unwrap_or(true)
}

#[derive(Default)]
pub struct MockDb {
    pub countries: RefCell<Vec<Country>>,
    pub cities: RefCell<Vec<City>>,
    pub sites: RefCell<Vec<Site>>,
    pub dishes: RefCell<Vec<Dish>>,
    pub famous_people: RefCell<Vec<FamousPerson>>,
    pub tags: RefCell<Vec<FamousPersonTag>>,
    pub visits: RefCell<Vec<Visit>>,
    pub users: RefCell<Vec<User>>,
}

impl MockDb {
    pub fn create_test_user(&self, email: &str, role: Role) -> User {
        let user = User {
            id: Id::new(),
            email: email.parse().unwrap(),
            password: "secret".parse().unwrap(),
            role,
            created_at: Timestamp::now(),
        };
        self.create_user(&user).unwrap();
        user
    }

    pub fn create_test_country(&self, name: &str, code: &str) -> Country {
        let country = Country {
            id: Id::new(),
            name: name.into(),
            code: code.parse().unwrap(),
        };
        self.create_country(&country).unwrap();
        country
    }

    pub fn create_test_city(&self, name: &str, country: &Id) -> City {
        let city = City {
            id: Id::new(),
            name: name.into(),
            country: country.clone(),
            coordinates: None,
        };
        self.create_city(&city).unwrap();
        city
    }

    pub fn create_test_site(&self, name: &str, city: &Id, country: &Id) -> Site {
        let site = Site {
            id: Id::new(),
            name: name.into(),
            city: city.clone(),
            country: country.clone(),
            site_type: "museum".into(),
            description: "a test site".into(),
            coordinates: LatLngCoords::new(4.6, -74.08),
            image_url: "https://img.example/site.jpg".into(),
            qr_code: "qr-data".into(),
        };
        self.create_site(&site).unwrap();
        site
    }

    pub fn create_test_famous_person(&self, name: &str, city: &Id, country: &Id) -> FamousPerson {
        let person = FamousPerson {
            id: Id::new(),
            name: name.into(),
            last_name: None,
            city_of_birth: city.clone(),
            country_of_origin: country.clone(),
            category: "writer".into(),
            description: "a test person".into(),
            image_url: "https://img.example/person.jpg".into(),
        };
        self.create_famous_person(&person).unwrap();
        person
    }
}

impl CountryRepo for MockDb {
    fn create_country(&self, country: &Country) -> RepoResult<()> {
        create(&mut self.countries.borrow_mut(), country.clone())
    }
    fn update_country(&self, country: &Country) -> RepoResult<()> {
        update(&mut self.countries.borrow_mut(), country)
    }
    fn delete_country(&self, id: &Id) -> RepoResult<()> {
        delete(&mut self.countries.borrow_mut(), id)
    }
    fn get_country(&self, id: &Id) -> RepoResult<Country> {
        get(&self.countries.borrow(), id)
    }
    fn all_countries(&self) -> RepoResult<Vec<Country>> {
        Ok(self.countries.borrow().clone())
    }
    fn try_get_country_by_name(&self, name: &str) -> RepoResult<Option<Country>> {
        Ok(self
            .countries
            .borrow()
            .iter()
            .find(|c| c.name == name)
            .cloned())
    }
    fn try_get_country_by_code(&self, code: &CountryCode) -> RepoResult<Option<Country>> {
        Ok(self
            .countries
            .borrow()
            .iter()
            .find(|c| c.code == *code)
            .cloned())
    }
}

impl CityRepo for MockDb {
    fn create_city(&self, city: &City) -> RepoResult<()> {
        create(&mut self.cities.borrow_mut(), city.clone())
    }
    fn update_city(&self, city: &City) -> RepoResult<()> {
        update(&mut self.cities.borrow_mut(), city)
    }
    fn delete_city(&self, id: &Id) -> RepoResult<()> {
        delete(&mut self.cities.borrow_mut(), id)
    }
    fn get_city(&self, id: &Id) -> RepoResult<City> {
        get(&self.cities.borrow(), id)
    }
    fn query_cities(&self, query: &CityQuery) -> RepoResult<Vec<City>> {
        Ok(self
            .cities
            .borrow()
            .iter()
            .filter(|c| matches_filter(&query.country, &c.country))
            .cloned()
            .collect())
    }
    fn try_get_city_by_name_and_country(
        &self,
        name: &str,
        country: &Id,
    ) -> RepoResult<Option<City>> {
        Ok(self
            .cities
            .borrow()
            .iter()
            .find(|c| c.name == name && c.country == *country)
            .cloned())
    }
    fn count_cities_of_country(&self, country: &Id) -> RepoResult<usize> {
        Ok(self
            .cities
            .borrow()
            .iter()
            .filter(|c| c.country == *country)
            .count())
    }
}

impl SiteRepo for MockDb {
    fn create_site(&self, site: &Site) -> RepoResult<()> {
        create(&mut self.sites.borrow_mut(), site.clone())
    }
    fn update_site(&self, site: &Site) -> RepoResult<()> {
        update(&mut self.sites.borrow_mut(), site)
    }
    fn delete_site(&self, id: &Id) -> RepoResult<()> {
        delete(&mut self.sites.borrow_mut(), id)
    }
    fn get_site(&self, id: &Id) -> RepoResult<Site> {
        get(&self.sites.borrow(), id)
    }
    fn query_sites(&self, query: &SiteQuery) -> RepoResult<Vec<Site>> {
        Ok(self
            .sites
            .borrow()
            .iter()
            .filter(|s| {
                matches_filter(&query.city, &s.city)
                    && matches_filter(&query.country, &s.country)
                    && matches_substring(&query.site_type, &s.site_type)
            })
            .cloned()
            .collect())
    }
    fn try_get_site_by_name_city_country(
        &self,
        name: &str,
        city: &Id,
        country: &Id,
    ) -> RepoResult<Option<Site>> {
        Ok(self
            .sites
            .borrow()
            .iter()
            .find(|s| s.name == name && s.city == *city && s.country == *country)
            .cloned())
    }
    fn count_sites_of_city(&self, city: &Id) -> RepoResult<usize> {
        Ok(self.sites.borrow().iter().filter(|s| s.city == *city).count())
    }
    fn count_sites_of_country(&self, country: &Id) -> RepoResult<usize> {
        Ok(self
            .sites
            .borrow()
            .iter()
            .filter(|s| s.country == *country)
            .count())
    }
}

impl DishRepo for MockDb {
    fn create_dish(&self, dish: &Dish) -> RepoResult<()> {
        create(&mut self.dishes.borrow_mut(), dish.clone())
    }
    fn update_dish(&self, dish: &Dish) -> RepoResult<()> {
        update(&mut self.dishes.borrow_mut(), dish)
    }
    fn delete_dish(&self, id: &Id) -> RepoResult<()> {
        delete(&mut self.dishes.borrow_mut(), id)
    }
    fn get_dish(&self, id: &Id) -> RepoResult<Dish> {
        get(&self.dishes.borrow(), id)
    }
    fn query_dishes(&self, query: &DishQuery) -> RepoResult<Vec<Dish>> {
        Ok(self
            .dishes
            .borrow()
            .iter()
            .filter(|d| {
                matches_filter(&query.country, &d.country)
                    && matches_filter(&query.site, &d.site)
                    && matches_substring(&query.name, &d.name)
            })
            .cloned()
            .collect())
    }
    fn try_get_dish_by_name_and_site(&self, name: &str, site: &Id) -> RepoResult<Option<Dish>> {
        Ok(self
            .dishes
            .borrow()
            .iter()
            .find(|d| d.name == name && d.site == *site)
            .cloned())
    }
    fn count_dishes_of_site(&self, site: &Id) -> RepoResult<usize> {
        Ok(self.dishes.borrow().iter().filter(|d| d.site == *site).count())
    }
    fn count_dishes_of_country(&self, country: &Id) -> RepoResult<usize> {
        Ok(self
            .dishes
            .borrow()
            .iter()
            .filter(|d| d.country == *country)
            .count())
    }
}

impl FamousPersonRepo for MockDb {
    fn create_famous_person(&self, person: &FamousPerson) -> RepoResult<()> {
        create(&mut self.famous_people.borrow_mut(), person.clone())
    }
    fn update_famous_person(&self, person: &FamousPerson) -> RepoResult<()> {
        update(&mut self.famous_people.borrow_mut(), person)
    }
    fn delete_famous_person(&self, id: &Id) -> RepoResult<()> {
        delete(&mut self.famous_people.borrow_mut(), id)
    }
    fn get_famous_person(&self, id: &Id) -> RepoResult<FamousPerson> {
        get(&self.famous_people.borrow(), id)
    }
    fn query_famous_people(&self, query: &FamousPersonQuery) -> RepoResult<Vec<FamousPerson>> {
        Ok(self
            .famous_people
            .borrow()
            .iter()
            .filter(|p| {
                matches_substring(&query.category, &p.category)
                    && matches_filter(&query.city_of_birth, &p.city_of_birth)
                    && matches_filter(&query.country_of_origin, &p.country_of_origin)
            })
            .cloned()
            .collect())
    }
    fn try_get_famous_person_by_identity(
        &self,
        identity: &FamousPersonIdentity,
    ) -> RepoResult<Option<FamousPerson>> {
        Ok(self
            .famous_people
            .borrow()
            .iter()
            .find(|p| {
                p.name == identity.name
                    && p.last_name.as_deref() == identity.last_name
                    && p.city_of_birth == *identity.city_of_birth
                    && p.country_of_origin == *identity.country_of_origin
            })
            .cloned())
    }
    fn count_famous_people_of_city(&self, city: &Id) -> RepoResult<usize> {
        Ok(self
            .famous_people
            .borrow()
            .iter()
            .filter(|p| p.city_of_birth == *city)
            .count())
    }
    fn count_famous_people_of_country(&self, country: &Id) -> RepoResult<usize> {
        Ok(self
            .famous_people
            .borrow()
            .iter()
            .filter(|p| p.country_of_origin == *country)
            .count())
    }
}

impl FamousPersonTagRepo for MockDb {
    fn create_tag(&self, tag: &FamousPersonTag) -> RepoResult<()> {
        create(&mut self.tags.borrow_mut(), tag.clone())
    }
    fn update_tag(&self, tag: &FamousPersonTag) -> RepoResult<()> {
        update(&mut self.tags.borrow_mut(), tag)
    }
    fn delete_tag(&self, id: &Id) -> RepoResult<()> {
        delete(&mut self.tags.borrow_mut(), id)
    }
    fn get_tag(&self, id: &Id) -> RepoResult<FamousPersonTag> {
        get(&self.tags.borrow(), id)
    }
    fn query_tags(&self, query: &TagQuery) -> RepoResult<Vec<FamousPersonTag>> {
        Ok(self
            .tags
            .borrow()
            .iter()
            .filter(|t| {
                matches_filter(&query.user, &t.user)
                    && matches_filter(&query.famous_person, &t.famous_person)
            })
            .cloned()
            .collect())
    }
    fn count_tags_of_famous_person(&self, famous_person: &Id) -> RepoResult<usize> {
        Ok(self
            .tags
            .borrow()
            .iter()
            .filter(|t| t.famous_person == *famous_person)
            .count())
    }
    fn count_tags_of_user(&self, user: &Id) -> RepoResult<usize> {
        Ok(self.tags.borrow().iter().filter(|t| t.user == *user).count())
    }
}

impl VisitRepo for MockDb {
    fn create_visit(&self, visit: &Visit) -> RepoResult<()> {
        create(&mut self.visits.borrow_mut(), visit.clone())
    }
    fn update_visit(&self, visit: &Visit) -> RepoResult<()> {
        update(&mut self.visits.borrow_mut(), visit)
    }
    fn delete_visit(&self, id: &Id) -> RepoResult<()> {
        delete(&mut self.visits.borrow_mut(), id)
    }
    fn get_visit(&self, id: &Id) -> RepoResult<Visit> {
        get(&self.visits.borrow(), id)
    }
    fn query_visits(&self, query: &VisitQuery) -> RepoResult<Vec<Visit>> {
        Ok(self
            .visits
            .borrow()
            .iter()
            .filter(|v| {
                matches_filter(&query.user, &v.user) && matches_filter(&query.site, &v.site)
            })
            .cloned()
            .collect())
    }
    fn count_visits_of_site(&self, site: &Id) -> RepoResult<usize> {
        Ok(self.visits.borrow().iter().filter(|v| v.site == *site).count())
    }
    fn count_visits_of_user(&self, user: &Id) -> RepoResult<usize> {
        Ok(self.visits.borrow().iter().filter(|v| v.user == *user).count())
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        create(&mut self.users.borrow_mut(), user.clone())
    }
    fn update_user(&self, user: &User) -> RepoResult<()> {
        update(&mut self.users.borrow_mut(), user)
    }
    fn delete_user(&self, id: &Id) -> RepoResult<()> {
        delete(&mut self.users.borrow_mut(), id)
    }
    fn get_user(&self, id: &Id) -> RepoResult<User> {
        get(&self.users.borrow(), id)
    }
    fn try_get_user(&self, id: &Id) -> RepoResult<Option<User>> {
        Ok(self.users.borrow().iter().find(|u| u.id == *id).cloned())
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.email == *email)
            .cloned())
    }
    fn all_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.users.borrow().clone())
    }
}

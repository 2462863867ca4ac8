use super::*;
use tourdb_entities as e;

impl From<e::geo::LatLngCoords> for Coordinate {
    fn from(from: e::geo::LatLngCoords) -> Self {
        let e::geo::LatLngCoords { lat, lng } = from;
        Self { lat, lng }
    }
}

impl From<Coordinate> for e::geo::LatLngCoords {
    fn from(from: Coordinate) -> Self {
        let Coordinate { lat, lng } = from;
        Self { lat, lng }
    }
}

impl From<e::country::Country> for Country {
    fn from(from: e::country::Country) -> Self {
        let e::country::Country { id, name, code } = from;
        Self {
            id: id.into(),
            name,
            code: code.into(),
        }
    }
}

impl From<e::country::Country> for EntityRef {
    fn from(from: e::country::Country) -> Self {
        Self {
            id: from.id.into(),
            name: from.name,
        }
    }
}

impl From<e::city::City> for EntityRef {
    fn from(from: e::city::City) -> Self {
        Self {
            id: from.id.into(),
            name: from.name,
        }
    }
}

impl From<e::site::Site> for EntityRef {
    fn from(from: e::site::Site) -> Self {
        Self {
            id: from.id.into(),
            name: from.name,
        }
    }
}

impl From<e::famous_person::FamousPerson> for EntityRef {
    fn from(from: e::famous_person::FamousPerson) -> Self {
        Self {
            id: from.id.into(),
            name: from.name,
        }
    }
}

// Accounts are projected with their e-mail address instead
// of a display name.
impl From<e::user::User> for EntityRef {
    fn from(from: e::user::User) -> Self {
        Self {
            id: from.id.into(),
            name: from.email.into_string(),
        }
    }
}

impl From<(e::city::City, e::country::Country)> for City {
    fn from(from: (e::city::City, e::country::Country)) -> Self {
        let (city, country) = from;
        let e::city::City {
            id,
            name,
            country: _,
            coordinates,
        } = city;
        Self {
            id: id.into(),
            name,
            country: country.into(),
            coordinates: coordinates.map(Into::into),
        }
    }
}

impl From<(e::site::Site, e::city::City, e::country::Country)> for Site {
    fn from(from: (e::site::Site, e::city::City, e::country::Country)) -> Self {
        let (site, city, country) = from;
        let e::site::Site {
            id,
            name,
            city: _,
            country: _,
            site_type,
            description,
            coordinates,
            image_url,
            qr_code,
        } = site;
        Self {
            id: id.into(),
            name,
            city: city.into(),
            country: country.into(),
            site_type,
            description,
            coordinates: coordinates.into(),
            image_url,
            qr_code,
        }
    }
}

impl From<(e::dish::Dish, e::country::Country, e::site::Site)> for Dish {
    fn from(from: (e::dish::Dish, e::country::Country, e::site::Site)) -> Self {
        let (dish, country, site) = from;
        let e::dish::Dish {
            id,
            name,
            country: _,
            site: _,
            description,
            price,
            image_url,
        } = dish;
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

impl From<(e::famous_person::FamousPerson, e::city::City, e::country::Country)> for FamousPerson {
    fn from(from: (e::famous_person::FamousPerson, e::city::City, e::country::Country)) -> Self {
        let (person, city, country) = from;
        let e::famous_person::FamousPerson {
            id,
            name,
            last_name,
            city_of_birth: _,
            country_of_origin: _,
            category,
            description,
            image_url,
        } = person;
        Self {
            id: id.into(),
            name,
            last_name,
            city_of_birth: city.into(),
            country_of_origin: country.into(),
            category,
            description,
            image_url,
        }
    }
}

impl From<(e::tag::FamousPersonTag, e::user::User, e::famous_person::FamousPerson)>
    for FamousPersonTag
{
    fn from(
        from: (e::tag::FamousPersonTag, e::user::User, e::famous_person::FamousPerson),
    ) -> Self {
        let (tag, user, person) = from;
        let e::tag::FamousPersonTag {
            id,
            user: _,
            famous_person: _,
            tag,
            created_at,
            photo_url,
            coordinates,
        } = tag;
        Self {
            id: id.into(),
            user: user.into(),
            famous_person: person.into(),
            tag,
            created_at: created_at.as_secs(),
            photo_url,
            coordinates: coordinates.into(),
        }
    }
}

impl From<(e::visit::Visit, e::site::Site, e::user::User)> for Visit {
    fn from(from: (e::visit::Visit, e::site::Site, e::user::User)) -> Self {
        let (visit, site, user) = from;
        let e::visit::Visit {
            id,
            user: _,
            site: _,
            method,
            photo_url,
            coordinates,
            created_at,
        } = visit;
        Self {
            id: id.into(),
            user: user.into(),
            site: site.into(),
            method: method.as_str().to_owned(),
            photo_url,
            coordinates: coordinates.map(Into::into),
            created_at: created_at.as_secs(),
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            email,
            password: _password,
            role,
            created_at,
        } = from;
        Self {
            id: id.into(),
            email: email.into_string(),
            role: role.into(),
            created_at: created_at.as_secs(),
        }
    }
}

impl From<e::user::Role> for UserRole {
    fn from(from: e::user::Role) -> Self {
        use e::user::Role::*;
        match from {
            Admin => UserRole::Admin,
            CommonUser => UserRole::CommonUser,
        }
    }
}

impl From<UserRole> for e::user::Role {
    fn from(from: UserRole) -> Self {
        use e::user::Role::*;
        match from {
            UserRole::Admin => Admin,
            UserRole::CommonUser => CommonUser,
        }
    }
}

pub use tourdb_boundary::*;

pub mod from_json {
    //! JSON -> use-case parameters

    use super::*;
    use tourdb_core::usecases;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the parameter structs both are outside this crate.

    pub fn new_country(r: CountryRequest) -> usecases::NewCountry {
        let CountryRequest { name, code } = r;
        usecases::NewCountry { name, code }
    }

    pub fn update_country(r: CountryRequest) -> usecases::UpdateCountry {
        let CountryRequest { name, code } = r;
        usecases::UpdateCountry { name, code }
    }

    pub fn new_city(r: CityRequest) -> usecases::NewCity {
        let CityRequest {
            name,
            country,
            coordinates,
        } = r;
        usecases::NewCity {
            name,
            country,
            coordinates: coordinates.map(Into::into),
        }
    }

    pub fn update_city(r: CityRequest) -> usecases::UpdateCity {
        let CityRequest {
            name,
            country,
            coordinates,
        } = r;
        usecases::UpdateCity {
            name,
            country,
            coordinates: coordinates.map(Into::into),
        }
    }

    pub fn new_site(r: SiteRequest) -> usecases::NewSite {
        let SiteRequest {
            name,
            city,
            country,
            site_type,
            description,
            coordinates,
            image_url,
            qr_code,
        } = r;
        usecases::NewSite {
            name,
            city,
            country,
            site_type,
            description,
            coordinates: coordinates.map(Into::into),
            image_url,
            qr_code,
        }
    }

    pub fn update_site(r: SiteRequest) -> usecases::UpdateSite {
        let SiteRequest {
            name,
            city,
            country,
            site_type,
            description,
            coordinates,
            image_url,
            qr_code,
        } = r;
        usecases::UpdateSite {
            name,
            city,
            country,
            site_type,
            description,
            coordinates: coordinates.map(Into::into),
            image_url,
            qr_code,
        }
    }

    pub fn new_dish(r: DishRequest) -> usecases::NewDish {
        let DishRequest {
            name,
            country,
            site,
            description,
            price,
            image_url,
        } = r;
        usecases::NewDish {
            name,
            country,
            site,
            description,
            price,
            image_url,
        }
    }

    pub fn update_dish(r: DishRequest) -> usecases::UpdateDish {
        let DishRequest {
            name,
            country,
            site,
            description,
            price,
            image_url,
        } = r;
        usecases::UpdateDish {
            name,
            country,
            site,
            description,
            price,
            image_url,
        }
    }

    pub fn new_famous_person(r: FamousPersonRequest) -> usecases::NewFamousPerson {
        let FamousPersonRequest {
            name,
            last_name,
            city_of_birth,
            country_of_origin,
            category,
            description,
            image_url,
        } = r;
        usecases::NewFamousPerson {
            name,
            last_name,
            city_of_birth,
            country_of_origin,
            category,
            description,
            image_url,
        }
    }

    pub fn update_famous_person(r: FamousPersonRequest) -> usecases::UpdateFamousPerson {
        let FamousPersonRequest {
            name,
            last_name,
            city_of_birth,
            country_of_origin,
            category,
            description,
            image_url,
        } = r;
        usecases::UpdateFamousPerson {
            name,
            last_name,
            city_of_birth,
            country_of_origin,
            category,
            description,
            image_url,
        }
    }

    pub fn new_famous_person_tag(r: FamousPersonTagRequest) -> usecases::NewFamousPersonTag {
        let FamousPersonTagRequest {
            famous_person,
            tag,
            photo_url,
            coordinates,
        } = r;
        usecases::NewFamousPersonTag {
            famous_person,
            tag,
            photo_url,
            coordinates: coordinates.map(Into::into),
        }
    }

    pub fn update_famous_person_tag(r: FamousPersonTagRequest) -> usecases::UpdateFamousPersonTag {
        let FamousPersonTagRequest {
            famous_person: _,
            tag,
            photo_url,
            coordinates,
        } = r;
        usecases::UpdateFamousPersonTag {
            tag,
            photo_url,
            coordinates: coordinates.map(Into::into),
        }
    }

    pub fn new_visit(r: VisitRequest) -> usecases::NewVisit {
        let VisitRequest {
            site,
            method,
            photo_url,
            coordinates,
        } = r;
        usecases::NewVisit {
            site,
            method,
            photo_url,
            coordinates: coordinates.map(Into::into),
        }
    }

    pub fn update_visit(r: VisitRequest) -> usecases::UpdateVisit {
        let VisitRequest {
            site: _,
            method,
            photo_url,
            coordinates,
        } = r;
        usecases::UpdateVisit {
            method,
            photo_url,
            coordinates: coordinates.map(Into::into),
        }
    }

    pub fn credentials(r: Credentials) -> usecases::Credentials {
        let Credentials { email, password } = r;
        usecases::Credentials { email, password }
    }

    pub fn register(r: Credentials) -> usecases::Register {
        let Credentials { email, password } = r;
        usecases::Register { email, password }
    }

    pub fn update_user(r: UpdateUserRequest) -> usecases::UpdateUser {
        let UpdateUserRequest {
            email,
            password,
            role,
        } = r;
        usecases::UpdateUser {
            email,
            password,
            role,
        }
    }
}

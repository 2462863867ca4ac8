use super::*;

pub mod prelude {
    use crate::web::{self, api, sqlite};
    use tourdb_core::repositories::UserRepo as _;

    pub use crate::adapters::json;
    pub use crate::web::tests::prelude::*;

    pub fn setup() -> (Client, sqlite::Connections) {
        web::tests::rocket_test_setup(vec![("/", api::routes())])
    }

    pub fn test_json(r: &LocalResponse) {
        assert_eq!(
            r.headers().get("Content-Type").collect::<Vec<_>>()[0],
            "application/json"
        );
    }

    pub fn bearer(token: &str) -> Header<'static> {
        Header::new("Authorization", format!("Bearer {token}"))
    }

    /// Creates an account directly in the store, bypassing the API.
    ///
    /// The password is always "secret".
    pub fn create_db_user(db: &sqlite::Connections, email: &str, role: Role) -> User {
        let user = User {
            id: Id::new(),
            email: email.parse().unwrap(),
            password: "secret".parse().unwrap(),
            role,
            created_at: Timestamp::now(),
        };
        db.exclusive().unwrap().create_user(&user).unwrap();
        user
    }

    pub fn login(client: &Client, email: &str) -> String {
        let res = client
            .post("/auth/login")
            .header(ContentType::JSON)
            .body(format!(r#"{{"email":"{email}","password":"secret"}}"#))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let auth: json::AuthSuccess = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        auth.token
    }

    pub fn admin_token(client: &Client, db: &sqlite::Connections) -> String {
        create_db_user(db, "admin@example.com", Role::Admin);
        login(client, "admin@example.com")
    }

    pub fn user_token(client: &Client, db: &sqlite::Connections, email: &str) -> String {
        create_db_user(db, email, Role::CommonUser);
        login(client, email)
    }

    pub fn create_country(client: &Client, token: &str, name: &str, code: &str) -> String {
        let res = client
            .post("/countries")
            .header(ContentType::JSON)
            .header(bearer(token))
            .body(format!(r#"{{"name":"{name}","code":"{code}"}}"#))
            .dispatch();
        assert_eq!(res.status(), Status::Created);
        let country: json::Country = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        country.id
    }

    pub fn create_city(client: &Client, token: &str, name: &str, country: &str) -> String {
        let res = client
            .post("/cities")
            .header(ContentType::JSON)
            .header(bearer(token))
            .body(format!(r#"{{"name":"{name}","country":"{country}"}}"#))
            .dispatch();
        assert_eq!(res.status(), Status::Created);
        let city: json::City = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        city.id
    }

    pub fn create_site(
        client: &Client,
        token: &str,
        name: &str,
        city: &str,
        country: &str,
    ) -> String {
        let body = format!(
            r#"{{"name":"{name}","city":"{city}","country":"{country}","type":"museum","description":"A place worth a detour","coordinates":{{"lat":4.6,"lng":-74.08}},"imageUrl":"https://img.example.com/site.jpg","qrCode":"qr-{name}"}}"#
        );
        let res = client
            .post("/sites")
            .header(ContentType::JSON)
            .header(bearer(token))
            .body(body)
            .dispatch();
        assert_eq!(res.status(), Status::Created);
        let site: json::Site = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        site.id
    }
}

use self::prelude::*;

#[test]
fn register_a_new_account() {
    let (client, _db) = setup();
    let res = client
        .post("/auth/register")
        .header(ContentType::JSON)
        .body(r#"{"email":"visitor@example.com","password":"secret"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Created);
    test_json(&res);
    let auth: json::AuthSuccess = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(auth.user.email, "visitor@example.com");
    assert_eq!(auth.user.role, json::UserRole::CommonUser);
    assert!(!auth.token.is_empty());
}

#[test]
fn register_with_duplicate_email() {
    let (client, _db) = setup();
    let body = r#"{"email":"visitor@example.com","password":"secret"}"#;
    let res = client
        .post("/auth/register")
        .header(ContentType::JSON)
        .body(body)
        .dispatch();
    assert_eq!(res.status(), Status::Created);
    let res = client
        .post("/auth/register")
        .header(ContentType::JSON)
        .body(body)
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
}

#[test]
fn login_with_invalid_credentials() {
    let (client, db) = setup();
    create_db_user(&db, "visitor@example.com", Role::CommonUser);
    let res = client
        .post("/auth/login")
        .header(ContentType::JSON)
        .body(r#"{"email":"visitor@example.com","password":"wrong password"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);
}

#[test]
fn current_account() {
    let (client, db) = setup();
    let token = user_token(&client, &db, "visitor@example.com");

    // Without a token
    let res = client.get("/auth/me").header(ContentType::JSON).dispatch();
    assert_eq!(res.status(), Status::Unauthorized);

    // With a token
    let res = client
        .get("/auth/me")
        .header(ContentType::JSON)
        .header(bearer(&token))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    test_json(&res);
    let me: json::User = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(me.email, "visitor@example.com");
    assert_eq!(me.role, json::UserRole::CommonUser);
}

#[test]
fn logout_blacklists_the_token() {
    let (client, db) = setup();
    let token = user_token(&client, &db, "visitor@example.com");

    let res = client
        .post("/auth/logout")
        .header(bearer(&token))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);

    let res = client
        .get("/auth/me")
        .header(ContentType::JSON)
        .header(bearer(&token))
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);
}

#[test]
fn only_admins_create_countries() {
    let (client, db) = setup();
    let body = r#"{"name":"Colombia","code":"co"}"#;

    // Anonymous
    let res = client
        .post("/countries")
        .header(ContentType::JSON)
        .body(body)
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);

    // Authenticated, but not an admin
    let token = user_token(&client, &db, "visitor@example.com");
    let res = client
        .post("/countries")
        .header(ContentType::JSON)
        .header(bearer(&token))
        .body(body)
        .dispatch();
    assert_eq!(res.status(), Status::Forbidden);

    // Admin
    let token = admin_token(&client, &db);
    let res = client
        .post("/countries")
        .header(ContentType::JSON)
        .header(bearer(&token))
        .body(body)
        .dispatch();
    assert_eq!(res.status(), Status::Created);
    let country: json::Country = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(country.code, "CO");
}

#[test]
fn duplicate_country_code() {
    let (client, db) = setup();
    let token = admin_token(&client, &db);
    create_country(&client, &token, "Colombia", "CO");
    let res = client
        .post("/countries")
        .header(ContentType::JSON)
        .header(bearer(&token))
        .body(r#"{"name":"Republic of Colombia","code":"co"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
}

#[test]
fn read_countries_without_authentication() {
    let (client, db) = setup();
    let token = admin_token(&client, &db);
    let id = create_country(&client, &token, "Colombia", "CO");

    let res = client.get("/countries").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let countries: Vec<json::Country> =
        serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(countries.len(), 1);

    let res = client.get(format!("/countries/{id}")).dispatch();
    assert_eq!(res.status(), Status::Ok);
}

#[test]
fn malformed_keys_are_rejected_without_a_lookup() {
    let (client, _db) = setup();
    let res = client.get("/countries/42").dispatch();
    assert_eq!(res.status(), Status::BadRequest);
}

#[test]
fn unknown_keys_yield_not_found() {
    let (client, _db) = setup();
    let res = client.get(format!("/countries/{}", Id::new())).dispatch();
    assert_eq!(res.status(), Status::NotFound);
}

#[test]
fn malformed_json_payload() {
    let (client, db) = setup();
    let token = admin_token(&client, &db);
    let res = client
        .post("/countries")
        .header(ContentType::JSON)
        .header(bearer(&token))
        .body(r#"{"name":"#)
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
}

#[test]
fn create_city_with_dangling_country() {
    let (client, db) = setup();
    let token = admin_token(&client, &db);
    let res = client
        .post("/cities")
        .header(ContentType::JSON)
        .header(bearer(&token))
        .body(format!(r#"{{"name":"Bogota","country":"{}"}}"#, Id::new()))
        .dispatch();
    assert_eq!(res.status(), Status::NotFound);
}

#[test]
fn create_site_with_missing_field() {
    let (client, db) = setup();
    let token = admin_token(&client, &db);
    let country = create_country(&client, &token, "Colombia", "CO");
    let city = create_city(&client, &token, "Bogota", &country);
    // No qrCode
    let body = format!(
        r#"{{"name":"Gold Museum","city":"{city}","country":"{country}","type":"museum","description":"x","coordinates":{{"lat":4.6,"lng":-74.08}},"imageUrl":"https://img.example.com/x.jpg"}}"#
    );
    let res = client
        .post("/sites")
        .header(ContentType::JSON)
        .header(bearer(&token))
        .body(body)
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
    let err: json::ResponseMessage = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert!(err.message.contains("qrCode"));
}

#[test]
fn filter_sites_by_type() {
    let (client, db) = setup();
    let token = admin_token(&client, &db);
    let country = create_country(&client, &token, "Colombia", "CO");
    let city = create_city(&client, &token, "Bogota", &country);
    create_site(&client, &token, "Gold Museum", &city, &country);

    let res = client.get("/sites?type=MUSE").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let sites: Vec<json::Site> = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(sites.len(), 1);
    assert_eq!(sites[0].city.name, "Bogota");

    let res = client.get("/sites?type=cathedral").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let sites: Vec<json::Site> = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert!(sites.is_empty());
}

#[test]
fn created_records_read_back_unchanged() {
    let (client, db) = setup();
    let token = admin_token(&client, &db);
    let country = create_country(&client, &token, "Colombia", "CO");
    let city = create_city(&client, &token, "Bogota", &country);

    let body = format!(
        r#"{{"name":"Gold Museum","city":"{city}","country":"{country}","type":"museum","description":"Pre-Columbian goldwork","coordinates":{{"lat":4.6018,"lng":-74.0705}},"imageUrl":"https://img.example.com/gold.jpg","qrCode":"qr-gold-museum"}}"#
    );
    let res = client
        .post("/sites")
        .header(ContentType::JSON)
        .header(bearer(&token))
        .body(body)
        .dispatch();
    assert_eq!(res.status(), Status::Created);
    let created: json::Site = serde_json::from_str(&res.into_string().unwrap()).unwrap();

    // Every submitted field comes back unchanged.
    let res = client.get(format!("/sites/{}", created.id)).dispatch();
    assert_eq!(res.status(), Status::Ok);
    let first: json::Site = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(first.name, "Gold Museum");
    assert_eq!(first.city.id, city);
    assert_eq!(first.city.name, "Bogota");
    assert_eq!(first.country.id, country);
    assert_eq!(first.country.name, "Colombia");
    assert_eq!(first.site_type, "museum");
    assert_eq!(first.description, "Pre-Columbian goldwork");
    assert_eq!(
        first.coordinates,
        json::Coordinate {
            lat: 4.6018,
            lng: -74.0705
        }
    );
    assert_eq!(first.image_url, "https://img.example.com/gold.jpg");
    assert_eq!(first.qr_code, "qr-gold-museum");
    assert_eq!(first, created);

    // Reading again without intervening writes yields the same body.
    let res = client.get(format!("/sites/{}", created.id)).dispatch();
    assert_eq!(res.status(), Status::Ok);
    let second: json::Site = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn visit_verification_methods() {
    let (client, db) = setup();
    let admin = admin_token(&client, &db);
    let country = create_country(&client, &admin, "Colombia", "CO");
    let city = create_city(&client, &admin, "Bogota", &country);
    let site = create_site(&client, &admin, "Gold Museum", &city, &country);
    let token = user_token(&client, &db, "visitor@example.com");

    // Photo-verified visits require a photo
    let res = client
        .post("/visits")
        .header(ContentType::JSON)
        .header(bearer(&token))
        .body(format!(r#"{{"site":"{site}","method":"PHOTO_UPLOAD"}}"#))
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);

    // QR-verified visits do not
    let res = client
        .post("/visits")
        .header(ContentType::JSON)
        .header(bearer(&token))
        .body(format!(r#"{{"site":"{site}","method":"QR_SCAN"}}"#))
        .dispatch();
    assert_eq!(res.status(), Status::Created);
    let visit: json::Visit = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(visit.method, "QR_SCAN");
    assert_eq!(visit.photo_url, None);
    assert_eq!(visit.user.name, "visitor@example.com");
}

#[test]
fn visits_are_owned() {
    let (client, db) = setup();
    let admin = admin_token(&client, &db);
    let country = create_country(&client, &admin, "Colombia", "CO");
    let city = create_city(&client, &admin, "Bogota", &country);
    let site = create_site(&client, &admin, "Gold Museum", &city, &country);

    let owner = user_token(&client, &db, "owner@example.com");
    let other = user_token(&client, &db, "other@example.com");

    let res = client
        .post("/visits")
        .header(ContentType::JSON)
        .header(bearer(&owner))
        .body(format!(r#"{{"site":"{site}","method":"QR_SCAN"}}"#))
        .dispatch();
    assert_eq!(res.status(), Status::Created);
    let visit: json::Visit = serde_json::from_str(&res.into_string().unwrap()).unwrap();

    // Another user must not modify it
    let res = client
        .put(format!("/visits/{}", visit.id))
        .header(ContentType::JSON)
        .header(bearer(&other))
        .body(r#"{"method":"PHOTO_UPLOAD","photoUrl":"https://img.example.com/p.jpg"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Forbidden);

    // The owner may
    let res = client
        .put(format!("/visits/{}", visit.id))
        .header(ContentType::JSON)
        .header(bearer(&owner))
        .body(r#"{"method":"PHOTO_UPLOAD","photoUrl":"https://img.example.com/p.jpg"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);

    // And so may an admin
    let res = client
        .put(format!("/visits/{}", visit.id))
        .header(ContentType::JSON)
        .header(bearer(&admin))
        .body(r#"{"method":"QR_SCAN"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let updated: json::Visit = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    // Switching back to QR verification drops the photo
    assert_eq!(updated.photo_url, None);
}

#[test]
fn visit_listing_is_restricted_to_own_records() {
    let (client, db) = setup();
    let admin = admin_token(&client, &db);
    let country = create_country(&client, &admin, "Colombia", "CO");
    let city = create_city(&client, &admin, "Bogota", &country);
    let site = create_site(&client, &admin, "Gold Museum", &city, &country);

    for email in ["one@example.com", "two@example.com"] {
        let token = user_token(&client, &db, email);
        let res = client
            .post("/visits")
            .header(ContentType::JSON)
            .header(bearer(&token))
            .body(format!(r#"{{"site":"{site}","method":"QR_SCAN"}}"#))
            .dispatch();
        assert_eq!(res.status(), Status::Created);
    }

    let token = login(&client, "one@example.com");
    let res = client.get("/visits").header(bearer(&token)).dispatch();
    assert_eq!(res.status(), Status::Ok);
    let visits: Vec<json::Visit> = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(visits.len(), 1);
    assert_eq!(visits[0].user.name, "one@example.com");

    // Admins see everything
    let res = client.get("/visits").header(bearer(&admin)).dispatch();
    assert_eq!(res.status(), Status::Ok);
    let visits: Vec<json::Visit> = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(visits.len(), 2);
}

#[test]
fn tag_author_is_the_caller() {
    let (client, db) = setup();
    let admin = admin_token(&client, &db);
    let country = create_country(&client, &admin, "Colombia", "CO");
    let city = create_city(&client, &admin, "Bogota", &country);

    let res = client
        .post("/famous-people")
        .header(ContentType::JSON)
        .header(bearer(&admin))
        .body(format!(
            r#"{{"name":"Gabriel","lastName":"Garcia Marquez","cityOfBirth":"{city}","countryOfOrigin":"{country}","category":"writer","description":"Nobel laureate","imageUrl":"https://img.example.com/ggm.jpg"}}"#
        ))
        .dispatch();
    assert_eq!(res.status(), Status::Created);
    let person: json::FamousPerson = serde_json::from_str(&res.into_string().unwrap()).unwrap();

    let token = user_token(&client, &db, "visitor@example.com");
    let res = client
        .post("/famous-person-tags")
        .header(ContentType::JSON)
        .header(bearer(&token))
        .body(format!(
            r#"{{"famousPerson":"{}","tag":"statue","photoUrl":"https://img.example.com/tag.jpg","coordinates":{{"lat":4.6,"lng":-74.08}}}}"#,
            person.id
        ))
        .dispatch();
    assert_eq!(res.status(), Status::Created);
    let tag: json::FamousPersonTag = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(tag.user.name, "visitor@example.com");

    // Tags are public
    let res = client
        .get(format!("/famous-person-tags?famous_person={}", person.id))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let tags: Vec<json::FamousPersonTag> =
        serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(tags.len(), 1);
}

#[test]
fn role_changes_are_admin_only() {
    let (client, db) = setup();
    let user = create_db_user(&db, "visitor@example.com", Role::CommonUser);
    let token = login(&client, "visitor@example.com");

    // Not even for the own profile
    let res = client
        .put(format!("/users/{}", user.id))
        .header(ContentType::JSON)
        .header(bearer(&token))
        .body(r#"{"role":"Admin"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Forbidden);

    let admin = admin_token(&client, &db);
    let res = client
        .put(format!("/users/{}", user.id))
        .header(ContentType::JSON)
        .header(bearer(&admin))
        .body(r#"{"role":"Admin"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let updated: json::User = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(updated.role, json::UserRole::Admin);
}

#[test]
fn listing_users_is_admin_only() {
    let (client, db) = setup();
    let token = user_token(&client, &db, "visitor@example.com");
    let res = client.get("/users").header(bearer(&token)).dispatch();
    assert_eq!(res.status(), Status::Forbidden);

    let admin = admin_token(&client, &db);
    let res = client.get("/users").header(bearer(&admin)).dispatch();
    assert_eq!(res.status(), Status::Ok);
    let users: Vec<json::User> = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(users.len(), 2);
}

#[test]
fn referenced_records_cannot_be_deleted() {
    let (client, db) = setup();
    let token = admin_token(&client, &db);
    let country = create_country(&client, &token, "Colombia", "CO");
    create_city(&client, &token, "Bogota", &country);

    let res = client
        .delete(format!("/countries/{country}"))
        .header(bearer(&token))
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
}

#[test]
fn delete_confirms_with_a_message() {
    let (client, db) = setup();
    let token = admin_token(&client, &db);
    let country = create_country(&client, &token, "Colombia", "CO");

    let res = client
        .delete(format!("/countries/{country}"))
        .header(bearer(&token))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let msg: json::ResponseMessage = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert!(msg.message.contains("deleted"));

    let res = client.get(format!("/countries/{country}")).dispatch();
    assert_eq!(res.status(), Status::NotFound);
}

use super::*;

#[post("/countries", format = "application/json", data = "<body>")]
pub fn post_country(
    db: sqlite::Connections,
    account: Account,
    body: JsonResult<json::CountryRequest>,
) -> CreatedResult<json::Country> {
    let new_country = from_json::new_country(body?.into_inner());
    let country = {
        let db = db.exclusive()?;
        usecases::authorize_user_by_id(&db, account.id(), Role::Admin)?;
        usecases::create_country(&db, new_country)?
    };
    Ok(created(country.into()))
}

#[get("/countries", format = "application/json")]
pub fn get_countries(db: sqlite::Connections) -> Result<Vec<json::Country>> {
    let countries = usecases::get_all_countries(&db.shared()?)?;
    Ok(Json(countries.into_iter().map(Into::into).collect()))
}

#[get("/countries/<id>", format = "application/json")]
pub fn get_country(db: sqlite::Connections, id: String) -> Result<json::Country> {
    let id = usecases::parse_id_param(&id)?;
    let country = usecases::get_country(&db.shared()?, &id)?;
    Ok(Json(country.into()))
}

#[put("/countries/<id>", format = "application/json", data = "<body>")]
pub fn put_country(
    db: sqlite::Connections,
    account: Account,
    id: String,
    body: JsonResult<json::CountryRequest>,
) -> Result<json::Country> {
    let id = usecases::parse_id_param(&id)?;
    let update = from_json::update_country(body?.into_inner());
    let country = {
        let db = db.exclusive()?;
        usecases::authorize_user_by_id(&db, account.id(), Role::Admin)?;
        usecases::update_country(&db, &id, update)?
    };
    Ok(Json(country.into()))
}

#[delete("/countries/<id>")]
pub fn delete_country(
    db: sqlite::Connections,
    account: Account,
    id: String,
) -> Result<json::ResponseMessage> {
    let id = usecases::parse_id_param(&id)?;
    {
        let db = db.exclusive()?;
        usecases::authorize_user_by_id(&db, account.id(), Role::Admin)?;
        usecases::delete_country(&db, &id)?;
    }
    Ok(deleted("Country"))
}

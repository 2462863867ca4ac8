use super::*;

#[post("/cities", format = "application/json", data = "<body>")]
pub fn post_city(
    db: sqlite::Connections,
    account: Account,
    body: JsonResult<json::CityRequest>,
) -> CreatedResult<json::City> {
    let new_city = from_json::new_city(body?.into_inner());
    let city = {
        let db = db.exclusive()?;
        usecases::authorize_user_by_id(&db, account.id(), Role::Admin)?;
        let city = usecases::create_city(&db, new_city)?;
        usecases::get_city(&db, &city.id)?
    };
    Ok(created(city.into()))
}

#[get("/cities?<country>", format = "application/json")]
pub fn get_cities(db: sqlite::Connections, country: Option<String>) -> Result<Vec<json::City>> {
    let query = CityQuery {
        country: country.map(Id::from),
    };
    let cities = usecases::query_cities(&db.shared()?, query)?;
    Ok(Json(cities.into_iter().map(Into::into).collect()))
}

#[get("/cities/<id>", format = "application/json")]
pub fn get_city(db: sqlite::Connections, id: String) -> Result<json::City> {
    let id = usecases::parse_id_param(&id)?;
    let city = usecases::get_city(&db.shared()?, &id)?;
    Ok(Json(city.into()))
}

#[put("/cities/<id>", format = "application/json", data = "<body>")]
pub fn put_city(
    db: sqlite::Connections,
    account: Account,
    id: String,
    body: JsonResult<json::CityRequest>,
) -> Result<json::City> {
    let id = usecases::parse_id_param(&id)?;
    let update = from_json::update_city(body?.into_inner());
    let city = {
        let db = db.exclusive()?;
        usecases::authorize_user_by_id(&db, account.id(), Role::Admin)?;
        usecases::update_city(&db, &id, update)?;
        usecases::get_city(&db, &id)?
    };
    Ok(Json(city.into()))
}

#[delete("/cities/<id>")]
pub fn delete_city(
    db: sqlite::Connections,
    account: Account,
    id: String,
) -> Result<json::ResponseMessage> {
    let id = usecases::parse_id_param(&id)?;
    {
        let db = db.exclusive()?;
        usecases::authorize_user_by_id(&db, account.id(), Role::Admin)?;
        usecases::delete_city(&db, &id)?;
    }
    Ok(deleted("City"))
}

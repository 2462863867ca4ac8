use super::*;

#[post("/famous-people", format = "application/json", data = "<body>")]
pub fn post_famous_person(
    db: sqlite::Connections,
    account: Account,
    body: JsonResult<json::FamousPersonRequest>,
) -> CreatedResult<json::FamousPerson> {
    let new_person = from_json::new_famous_person(body?.into_inner());
    let person = {
        let db = db.exclusive()?;
        usecases::authorize_user_by_id(&db, account.id(), Role::Admin)?;
        let person = usecases::create_famous_person(&db, new_person)?;
        usecases::get_famous_person(&db, &person.id)?
    };
    Ok(created(person.into()))
}

#[get("/famous-people?<category>&<city>&<country>", format = "application/json")]
pub fn get_famous_people(
    db: sqlite::Connections,
    category: Option<String>,
    city: Option<String>,
    country: Option<String>,
) -> Result<Vec<json::FamousPerson>> {
    let query = FamousPersonQuery {
        category,
        city_of_birth: city.map(Id::from),
        country_of_origin: country.map(Id::from),
    };
    let people = usecases::query_famous_people(&db.shared()?, query)?;
    Ok(Json(people.into_iter().map(Into::into).collect()))
}

#[get("/famous-people/<id>", format = "application/json")]
pub fn get_famous_person(db: sqlite::Connections, id: String) -> Result<json::FamousPerson> {
    let id = usecases::parse_id_param(&id)?;
    let person = usecases::get_famous_person(&db.shared()?, &id)?;
    Ok(Json(person.into()))
}

#[put("/famous-people/<id>", format = "application/json", data = "<body>")]
pub fn put_famous_person(
    db: sqlite::Connections,
    account: Account,
    id: String,
    body: JsonResult<json::FamousPersonRequest>,
) -> Result<json::FamousPerson> {
    let id = usecases::parse_id_param(&id)?;
    let update = from_json::update_famous_person(body?.into_inner());
    let person = {
        let db = db.exclusive()?;
        usecases::authorize_user_by_id(&db, account.id(), Role::Admin)?;
        usecases::update_famous_person(&db, &id, update)?;
        usecases::get_famous_person(&db, &id)?
    };
    Ok(Json(person.into()))
}

#[delete("/famous-people/<id>")]
pub fn delete_famous_person(
    db: sqlite::Connections,
    account: Account,
    id: String,
) -> Result<json::ResponseMessage> {
    let id = usecases::parse_id_param(&id)?;
    {
        let db = db.exclusive()?;
        usecases::authorize_user_by_id(&db, account.id(), Role::Admin)?;
        usecases::delete_famous_person(&db, &id)?;
    }
    Ok(deleted("Famous person"))
}

use super::*;

#[post("/dishes", format = "application/json", data = "<body>")]
pub fn post_dish(
    db: sqlite::Connections,
    account: Account,
    body: JsonResult<json::DishRequest>,
) -> CreatedResult<json::Dish> {
    let new_dish = from_json::new_dish(body?.into_inner());
    let dish = {
        let db = db.exclusive()?;
        usecases::authorize_user_by_id(&db, account.id(), Role::Admin)?;
        let dish = usecases::create_dish(&db, new_dish)?;
        usecases::get_dish(&db, &dish.id)?
    };
    Ok(created(dish.into()))
}

#[get("/dishes?<country>&<site>&<name>", format = "application/json")]
pub fn get_dishes(
    db: sqlite::Connections,
    country: Option<String>,
    site: Option<String>,
    name: Option<String>,
) -> Result<Vec<json::Dish>> {
    let query = DishQuery {
        country: country.map(Id::from),
        site: site.map(Id::from),
        name,
    };
    let dishes = usecases::query_dishes(&db.shared()?, query)?;
    Ok(Json(dishes.into_iter().map(Into::into).collect()))
}

#[get("/dishes/<id>", format = "application/json")]
pub fn get_dish(db: sqlite::Connections, id: String) -> Result<json::Dish> {
    let id = usecases::parse_id_param(&id)?;
    let dish = usecases::get_dish(&db.shared()?, &id)?;
    Ok(Json(dish.into()))
}

#[put("/dishes/<id>", format = "application/json", data = "<body>")]
pub fn put_dish(
    db: sqlite::Connections,
    account: Account,
    id: String,
    body: JsonResult<json::DishRequest>,
) -> Result<json::Dish> {
    let id = usecases::parse_id_param(&id)?;
    let update = from_json::update_dish(body?.into_inner());
    let dish = {
        let db = db.exclusive()?;
        usecases::authorize_user_by_id(&db, account.id(), Role::Admin)?;
        usecases::update_dish(&db, &id, update)?;
        usecases::get_dish(&db, &id)?
    };
    Ok(Json(dish.into()))
}

#[delete("/dishes/<id>")]
pub fn delete_dish(
    db: sqlite::Connections,
    account: Account,
    id: String,
) -> Result<json::ResponseMessage> {
    let id = usecases::parse_id_param(&id)?;
    {
        let db = db.exclusive()?;
        usecases::authorize_user_by_id(&db, account.id(), Role::Admin)?;
        usecases::delete_dish(&db, &id)?;
    }
    Ok(deleted("Dish"))
}

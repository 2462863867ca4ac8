use super::*;

#[get("/users", format = "application/json")]
pub fn get_users(db: sqlite::Connections, account: Account) -> Result<Vec<json::User>> {
    let db = db.shared()?;
    let caller = usecases::authorize_user_by_id(&db, account.id(), Role::CommonUser)?;
    let users = usecases::get_all_users(&db, &caller)?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

#[get("/users/<id>", format = "application/json")]
pub fn get_user(db: sqlite::Connections, account: Account, id: String) -> Result<json::User> {
    let id = usecases::parse_id_param(&id)?;
    let db = db.shared()?;
    let caller = usecases::authorize_user_by_id(&db, account.id(), Role::CommonUser)?;
    let user = usecases::get_user(&db, &caller, &id)?;
    Ok(Json(user.into()))
}

#[put("/users/<id>", format = "application/json", data = "<body>")]
pub fn put_user(
    db: sqlite::Connections,
    account: Account,
    id: String,
    body: JsonResult<json::UpdateUserRequest>,
) -> Result<json::User> {
    let id = usecases::parse_id_param(&id)?;
    let update = from_json::update_user(body?.into_inner());
    let user = {
        let db = db.exclusive()?;
        let caller = usecases::authorize_user_by_id(&db, account.id(), Role::CommonUser)?;
        usecases::update_user(&db, &caller, &id, update)?
    };
    Ok(Json(user.into()))
}

#[delete("/users/<id>")]
pub fn delete_user(
    db: sqlite::Connections,
    account: Account,
    id: String,
) -> Result<json::ResponseMessage> {
    let id = usecases::parse_id_param(&id)?;
    {
        let db = db.exclusive()?;
        let caller = usecases::authorize_user_by_id(&db, account.id(), Role::CommonUser)?;
        usecases::delete_user(&db, &caller, &id)?;
    }
    Ok(deleted("User"))
}

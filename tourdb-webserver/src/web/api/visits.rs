use super::*;

#[post("/visits", format = "application/json", data = "<body>")]
pub fn post_visit(
    db: sqlite::Connections,
    account: Account,
    body: JsonResult<json::VisitRequest>,
) -> CreatedResult<json::Visit> {
    let new_visit = from_json::new_visit(body?.into_inner());
    let visit = {
        let db = db.exclusive()?;
        let caller = usecases::authorize_user_by_id(&db, account.id(), Role::CommonUser)?;
        let visit = usecases::create_visit(&db, &caller, new_visit)?;
        usecases::get_visit(&db, &caller, &visit.id)?
    };
    Ok(created(visit.into()))
}

#[get("/visits?<user>&<site>", format = "application/json")]
pub fn get_visits(
    db: sqlite::Connections,
    account: Account,
    user: Option<String>,
    site: Option<String>,
) -> Result<Vec<json::Visit>> {
    let db = db.shared()?;
    let caller = usecases::authorize_user_by_id(&db, account.id(), Role::CommonUser)?;
    let query = VisitQuery {
        user: user.map(Id::from),
        site: site.map(Id::from),
    };
    let visits = usecases::query_visits(&db, &caller, query)?;
    Ok(Json(visits.into_iter().map(Into::into).collect()))
}

#[get("/visits/<id>", format = "application/json")]
pub fn get_visit(db: sqlite::Connections, account: Account, id: String) -> Result<json::Visit> {
    let id = usecases::parse_id_param(&id)?;
    let db = db.shared()?;
    let caller = usecases::authorize_user_by_id(&db, account.id(), Role::CommonUser)?;
    let visit = usecases::get_visit(&db, &caller, &id)?;
    Ok(Json(visit.into()))
}

#[put("/visits/<id>", format = "application/json", data = "<body>")]
pub fn put_visit(
    db: sqlite::Connections,
    account: Account,
    id: String,
    body: JsonResult<json::VisitRequest>,
) -> Result<json::Visit> {
    let id = usecases::parse_id_param(&id)?;
    let update = from_json::update_visit(body?.into_inner());
    let visit = {
        let db = db.exclusive()?;
        let caller = usecases::authorize_user_by_id(&db, account.id(), Role::CommonUser)?;
        usecases::update_visit(&db, &caller, &id, update)?;
        usecases::get_visit(&db, &caller, &id)?
    };
    Ok(Json(visit.into()))
}

#[delete("/visits/<id>")]
pub fn delete_visit(
    db: sqlite::Connections,
    account: Account,
    id: String,
) -> Result<json::ResponseMessage> {
    let id = usecases::parse_id_param(&id)?;
    {
        let db = db.exclusive()?;
        let caller = usecases::authorize_user_by_id(&db, account.id(), Role::CommonUser)?;
        usecases::delete_visit(&db, &caller, &id)?;
    }
    Ok(deleted("Visit"))
}

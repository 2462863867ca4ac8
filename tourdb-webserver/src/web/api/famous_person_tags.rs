use super::*;

#[post("/famous-person-tags", format = "application/json", data = "<body>")]
pub fn post_tag(
    db: sqlite::Connections,
    account: Account,
    body: JsonResult<json::FamousPersonTagRequest>,
) -> CreatedResult<json::FamousPersonTag> {
    let new_tag = from_json::new_famous_person_tag(body?.into_inner());
    let tag = {
        let db = db.exclusive()?;
        let caller = usecases::authorize_user_by_id(&db, account.id(), Role::CommonUser)?;
        let tag = usecases::create_famous_person_tag(&db, &caller, new_tag)?;
        usecases::get_famous_person_tag(&db, &tag.id)?
    };
    Ok(created(tag.into()))
}

#[get("/famous-person-tags?<user>&<famous_person>", format = "application/json")]
pub fn get_tags(
    db: sqlite::Connections,
    user: Option<String>,
    famous_person: Option<String>,
) -> Result<Vec<json::FamousPersonTag>> {
    let query = TagQuery {
        user: user.map(Id::from),
        famous_person: famous_person.map(Id::from),
    };
    let tags = usecases::query_famous_person_tags(&db.shared()?, query)?;
    Ok(Json(tags.into_iter().map(Into::into).collect()))
}

#[get("/famous-person-tags/<id>", format = "application/json")]
pub fn get_tag(db: sqlite::Connections, id: String) -> Result<json::FamousPersonTag> {
    let id = usecases::parse_id_param(&id)?;
    let tag = usecases::get_famous_person_tag(&db.shared()?, &id)?;
    Ok(Json(tag.into()))
}

#[put("/famous-person-tags/<id>", format = "application/json", data = "<body>")]
pub fn put_tag(
    db: sqlite::Connections,
    account: Account,
    id: String,
    body: JsonResult<json::FamousPersonTagRequest>,
) -> Result<json::FamousPersonTag> {
    let id = usecases::parse_id_param(&id)?;
    let update = from_json::update_famous_person_tag(body?.into_inner());
    let tag = {
        let db = db.exclusive()?;
        let caller = usecases::authorize_user_by_id(&db, account.id(), Role::CommonUser)?;
        usecases::update_famous_person_tag(&db, &caller, &id, update)?;
        usecases::get_famous_person_tag(&db, &id)?
    };
    Ok(Json(tag.into()))
}

#[delete("/famous-person-tags/<id>")]
pub fn delete_tag(
    db: sqlite::Connections,
    account: Account,
    id: String,
) -> Result<json::ResponseMessage> {
    let id = usecases::parse_id_param(&id)?;
    {
        let db = db.exclusive()?;
        let caller = usecases::authorize_user_by_id(&db, account.id(), Role::CommonUser)?;
        usecases::delete_famous_person_tag(&db, &caller, &id)?;
    }
    Ok(deleted("Famous person tag"))
}

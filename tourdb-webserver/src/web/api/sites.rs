use super::*;
use rocket::FromForm;

#[post("/sites", format = "application/json", data = "<body>")]
pub fn post_site(
    db: sqlite::Connections,
    account: Account,
    body: JsonResult<json::SiteRequest>,
) -> CreatedResult<json::Site> {
    let new_site = from_json::new_site(body?.into_inner());
    let site = {
        let db = db.exclusive()?;
        usecases::authorize_user_by_id(&db, account.id(), Role::Admin)?;
        let site = usecases::create_site(&db, new_site)?;
        usecases::get_site(&db, &site.id)?
    };
    Ok(created(site.into()))
}

#[derive(Debug, Clone, Default, FromForm)]
pub struct SiteFilter {
    city: Option<String>,
    country: Option<String>,
    #[field(name = "type")]
    site_type: Option<String>,
}

#[get("/sites?<filter..>", format = "application/json")]
pub fn get_sites(db: sqlite::Connections, filter: SiteFilter) -> Result<Vec<json::Site>> {
    let SiteFilter {
        city,
        country,
        site_type,
    } = filter;
    let query = SiteQuery {
        city: city.map(Id::from),
        country: country.map(Id::from),
        site_type,
    };
    let sites = usecases::query_sites(&db.shared()?, query)?;
    Ok(Json(sites.into_iter().map(Into::into).collect()))
}

#[get("/sites/<id>", format = "application/json")]
pub fn get_site(db: sqlite::Connections, id: String) -> Result<json::Site> {
    let id = usecases::parse_id_param(&id)?;
    let site = usecases::get_site(&db.shared()?, &id)?;
    Ok(Json(site.into()))
}

#[put("/sites/<id>", format = "application/json", data = "<body>")]
pub fn put_site(
    db: sqlite::Connections,
    account: Account,
    id: String,
    body: JsonResult<json::SiteRequest>,
) -> Result<json::Site> {
    let id = usecases::parse_id_param(&id)?;
    let update = from_json::update_site(body?.into_inner());
    let site = {
        let db = db.exclusive()?;
        usecases::authorize_user_by_id(&db, account.id(), Role::Admin)?;
        usecases::update_site(&db, &id, update)?;
        usecases::get_site(&db, &id)?
    };
    Ok(Json(site.into()))
}

#[delete("/sites/<id>")]
pub fn delete_site(
    db: sqlite::Connections,
    account: Account,
    id: String,
) -> Result<json::ResponseMessage> {
    let id = usecases::parse_id_param(&id)?;
    {
        let db = db.exclusive()?;
        usecases::authorize_user_by_id(&db, account.id(), Role::Admin)?;
        usecases::delete_site(&db, &id)?;
    }
    Ok(deleted("Site"))
}

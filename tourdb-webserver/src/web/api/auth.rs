use super::*;
use tourdb_core::repositories::UserRepo as _;

#[post("/auth/register", format = "application/json", data = "<credentials>")]
pub fn post_register(
    db: sqlite::Connections,
    jwt_state: &State<jwt::JwtState>,
    credentials: JsonResult<json::Credentials>,
) -> CreatedResult<json::AuthSuccess> {
    let register = from_json::register(credentials?.into_inner());
    let user = usecases::register_user(&db.exclusive()?, register)?;
    let token = jwt_state.generate_token(&user.id)?;
    Ok(created(json::AuthSuccess {
        user: user.into(),
        token,
    }))
}

#[post("/auth/login", format = "application/json", data = "<credentials>")]
pub fn post_login(
    db: sqlite::Connections,
    jwt_state: &State<jwt::JwtState>,
    credentials: JsonResult<json::Credentials>,
) -> Result<json::AuthSuccess> {
    let credentials = from_json::credentials(credentials?.into_inner());
    let user = usecases::login_with_email(&db.shared()?, &credentials).map_err(|err| {
        debug!("Login failed: {err}");
        err
    })?;
    let token = jwt_state.generate_token(&user.id)?;
    Ok(Json(json::AuthSuccess {
        user: user.into(),
        token,
    }))
}

#[post("/auth/logout")]
pub fn post_logout(auth: Auth, jwt_state: &State<jwt::JwtState>) -> Json<json::ResponseMessage> {
    for bearer in auth.bearer_tokens() {
        jwt_state.blacklist_token(bearer.to_owned());
    }
    Json(json::ResponseMessage {
        message: "Logged out".into(),
    })
}

#[get("/auth/me", format = "application/json")]
pub fn get_me(db: sqlite::Connections, account: Account) -> Result<json::User> {
    let user = db
        .shared()?
        .try_get_user(account.id())?
        .ok_or(error::ParameterError::UserNotFound)?;
    Ok(Json(user.into()))
}

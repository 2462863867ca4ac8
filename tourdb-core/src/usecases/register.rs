use super::prelude::*;

#[derive(Debug, Clone)]
pub struct Register {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Creates a new account with the default role.
///
/// Any role requested by the client is ignored, only an
/// administrator may promote an account afterwards.
pub fn register_user<R: UserRepo>(repo: &R, new_user: Register) -> Result<User> {
    let Register { email, password } = new_user;
    let email: EmailAddress = email.ok_or(Error::MissingField("email"))?.parse()?;
    let password: Password = password.ok_or(Error::MissingField("password"))?.parse()?;
    if repo.try_get_user_by_email(&email)?.is_some() {
        return Err(Error::UserExists);
    }
    let user = User {
        id: Id::new(),
        email,
        password,
        role: Role::CommonUser,
        created_at: Timestamp::now(),
    };
    repo.create_user(&user)?;
    log::debug!("Created new user account {}", user.id);
    Ok(user)
}

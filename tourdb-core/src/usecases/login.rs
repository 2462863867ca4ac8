use super::prelude::*;

#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Verifies the credentials and returns the matching account.
///
/// Unknown addresses and wrong passwords are indistinguishable
/// for the caller.
pub fn login_with_email<R: UserRepo>(repo: &R, credentials: &Credentials) -> Result<User> {
    let email = credentials
        .email
        .as_deref()
        .ok_or(Error::MissingField("email"))?;
    let password = credentials
        .password
        .as_deref()
        .ok_or(Error::MissingField("password"))?;
    let email: EmailAddress = email.parse().map_err(|_| Error::Credentials)?;
    let Some(user) = repo.try_get_user_by_email(&email)? else {
        return Err(Error::Credentials);
    };
    if !user.password.verify(password) {
        return Err(Error::Credentials);
    }
    Ok(user)
}

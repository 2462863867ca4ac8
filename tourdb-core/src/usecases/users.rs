use super::prelude::*;

/// Partial update of an account. Role changes are restricted
/// to administrators, whoever owns the profile.
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

fn parse_role(s: &str) -> Result<Role> {
    match s {
        "Admin" => Ok(Role::Admin),
        "CommonUser" => Ok(Role::CommonUser),
        _ => Err(Error::InvalidRole),
    }
}

pub fn get_all_users<R: UserRepo>(repo: &R, caller: &User) -> Result<Vec<User>> {
    super::authorize_role(caller, Role::Admin)?;
    Ok(repo.all_users()?)
}

pub fn get_user<R: UserRepo>(repo: &R, caller: &User, id: &Id) -> Result<User> {
    super::authorize_owner_or_admin(caller, id)?;
    repo.get_user(id).map_err(|err| match err {
        RepoError::NotFound => Error::UserNotFound,
        other => Error::Repo(other),
    })
}

pub fn update_user<R: UserRepo>(
    repo: &R,
    caller: &User,
    id: &Id,
    update: UpdateUser,
) -> Result<User> {
    super::authorize_owner_or_admin(caller, id)?;
    let mut user = repo.get_user(id).map_err(|err| match err {
        RepoError::NotFound => Error::UserNotFound,
        other => Error::Repo(other),
    })?;
    if let Some(email) = update.email {
        let email: EmailAddress = email.parse()?;
        if email != user.email {
            if repo.try_get_user_by_email(&email)?.is_some() {
                return Err(Error::UserExists);
            }
            user.email = email;
        }
    }
    if let Some(password) = update.password {
        user.password = password.parse()?;
    }
    if let Some(role) = update.role {
        let role = parse_role(&role)?;
        if role != user.role {
            // Not even for their own profile.
            super::authorize_role(caller, Role::Admin)?;
            user.role = role;
        }
    }
    repo.update_user(&user)?;
    Ok(user)
}

/// Accounts that still own visits or tags cannot be deleted.
pub fn delete_user<R>(repo: &R, caller: &User, id: &Id) -> Result<()>
where
    R: UserRepo + VisitRepo + FamousPersonTagRepo,
{
    super::authorize_role(caller, Role::Admin)?;
    if repo.try_get_user(id)?.is_none() {
        return Err(Error::UserNotFound);
    }
    if repo.count_visits_of_user(id)? > 0 || repo.count_tags_of_user(id)? > 0 {
        return Err(Error::StillReferenced("user"));
    }
    repo.delete_user(id)?;
    Ok(())
}

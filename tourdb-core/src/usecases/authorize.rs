use super::prelude::*;

/// Resolves the authenticated identity and checks its role.
///
/// The role is always re-read from the store, it is never
/// trusted from the credential itself.
pub fn authorize_user_by_id<R: UserRepo>(
    repo: &R,
    id: &Id,
    min_required_role: Role,
) -> Result<User> {
    let Some(user) = repo.try_get_user(id)? else {
        return Err(Error::Unauthorized);
    };
    authorize_role(&user, min_required_role)?;
    Ok(user)
}

pub fn authorize_role(user: &User, min_required_role: Role) -> Result<()> {
    if user.role < min_required_role {
        return Err(Error::Forbidden);
    }
    Ok(())
}

/// Owner-or-admin check for user-generated records.
pub fn authorize_owner_or_admin(user: &User, owner: &Id) -> Result<()> {
    if user.role == Role::Admin || user.id == *owner {
        return Ok(());
    }
    Err(Error::Forbidden)
}

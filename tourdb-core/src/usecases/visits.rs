use super::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct NewVisit {
    pub site: Option<String>,
    pub method: Option<String>,
    pub photo_url: Option<String>,
    pub coordinates: Option<LatLngCoords>,
}

/// The site and the owner of a visit are immutable.
#[derive(Debug, Clone, Default)]
pub struct UpdateVisit {
    pub method: Option<String>,
    pub photo_url: Option<String>,
    pub coordinates: Option<LatLngCoords>,
}

pub type VisitWithRefs = (Visit, Site, User);

fn resolve_site<R: SiteRepo>(repo: &R, id: &Id) -> Result<Site> {
    repo.get_site(id).map_err(|err| match err {
        RepoError::NotFound => Error::SiteNotFound,
        other => Error::Repo(other),
    })
}

// A photo URL is mandatory for photo-verified visits and
// dropped for QR-verified ones.
fn checked_photo_url(
    method: VerificationMethod,
    photo_url: Option<String>,
) -> Result<Option<String>> {
    match method {
        VerificationMethod::PhotoUpload => {
            if photo_url.is_none() {
                return Err(Error::PhotoUrlRequired);
            }
            Ok(photo_url)
        }
        VerificationMethod::QrScan => Ok(None),
    }
}

/// The owner is always the caller, never taken from the payload.
pub fn create_visit<R>(repo: &R, owner: &User, new_visit: NewVisit) -> Result<Visit>
where
    R: VisitRepo + SiteRepo,
{
    let NewVisit {
        site,
        method,
        photo_url,
        coordinates,
    } = new_visit;
    let site = super::parse_id_param(&site.ok_or(Error::MissingField("site"))?)?;
    let method: VerificationMethod = method.ok_or(Error::MissingField("method"))?.parse()?;
    if let Some(coords) = &coordinates {
        if !coords.is_valid() {
            return Err(Error::Coordinates);
        }
    }
    let photo_url = checked_photo_url(method, photo_url)?;
    resolve_site(repo, &site)?;
    let visit = Visit {
        id: Id::new(),
        user: owner.id.clone(),
        site,
        method,
        photo_url,
        coordinates,
        created_at: Timestamp::now(),
    };
    repo.create_visit(&visit)?;
    Ok(visit)
}

/// Refreshes the timestamp on every successful update.
pub fn update_visit<R>(repo: &R, caller: &User, id: &Id, update: UpdateVisit) -> Result<Visit>
where
    R: VisitRepo,
{
    let mut visit = repo.get_visit(id)?;
    super::authorize_owner_or_admin(caller, &visit.user)?;
    if let Some(method) = update.method {
        visit.method = method.parse()?;
    }
    // A new photo replaces the stored one, switching back to
    // QR verification clears it.
    let photo_url = update.photo_url.or(visit.photo_url.take());
    visit.photo_url = checked_photo_url(visit.method, photo_url)?;
    if let Some(coordinates) = update.coordinates {
        if !coordinates.is_valid() {
            return Err(Error::Coordinates);
        }
        visit.coordinates = Some(coordinates);
    }
    visit.created_at = Timestamp::now();
    repo.update_visit(&visit)?;
    Ok(visit)
}

pub fn delete_visit<R: VisitRepo>(repo: &R, caller: &User, id: &Id) -> Result<()> {
    let visit = repo.get_visit(id)?;
    super::authorize_owner_or_admin(caller, &visit.user)?;
    repo.delete_visit(id)?;
    Ok(())
}

/// Visits are private, only the owner and admins may read them.
pub fn get_visit<R>(repo: &R, caller: &User, id: &Id) -> Result<VisitWithRefs>
where
    R: VisitRepo + SiteRepo + UserRepo,
{
    let visit = repo.get_visit(id)?;
    super::authorize_owner_or_admin(caller, &visit.user)?;
    let site = repo.get_site(&visit.site)?;
    let user = repo.get_user(&visit.user)?;
    Ok((visit, site, user))
}

/// Non-admin callers only ever see their own visits, whatever
/// filter they ask for.
pub fn query_visits<R>(repo: &R, caller: &User, mut query: VisitQuery) -> Result<Vec<VisitWithRefs>>
where
    R: VisitRepo + SiteRepo + UserRepo,
{
    if caller.role < Role::Admin {
        query.user = Some(caller.id.clone());
    }
    if let Some(user) = &query.user {
        if !user.is_valid() {
            return Err(Error::InvalidId);
        }
    }
    if let Some(site) = &query.site {
        if !site.is_valid() {
            return Err(Error::InvalidId);
        }
    }
    let visits = repo.query_visits(&query)?;
    let mut results = Vec::with_capacity(visits.len());
    for visit in visits {
        let site = repo.get_site(&visit.site)?;
        let user = repo.get_user(&visit.user)?;
        results.push((visit, site, user));
    }
    Ok(results)
}

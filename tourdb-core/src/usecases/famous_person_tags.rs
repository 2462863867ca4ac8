use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone, Default)]
pub struct NewFamousPersonTag {
    pub famous_person: Option<String>,
    pub tag: Option<String>,
    pub photo_url: Option<String>,
    pub coordinates: Option<LatLngCoords>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateFamousPersonTag {
    pub tag: Option<String>,
    pub photo_url: Option<String>,
    pub coordinates: Option<LatLngCoords>,
}

pub type TagWithRefs = (FamousPersonTag, User, FamousPerson);

fn resolve_famous_person<R: FamousPersonRepo>(repo: &R, id: &Id) -> Result<FamousPerson> {
    repo.get_famous_person(id).map_err(|err| match err {
        RepoError::NotFound => Error::FamousPersonNotFound,
        other => Error::Repo(other),
    })
}

/// The author is always the caller, never taken from the payload.
pub fn create_famous_person_tag<R>(
    repo: &R,
    author: &User,
    new_tag: NewFamousPersonTag,
) -> Result<FamousPersonTag>
where
    R: FamousPersonTagRepo + FamousPersonRepo,
{
    let NewFamousPersonTag {
        famous_person,
        tag,
        photo_url,
        coordinates,
    } = new_tag;
    let famous_person =
        super::parse_id_param(&famous_person.ok_or(Error::MissingField("famousPerson"))?)?;
    let tag = tag.ok_or(Error::MissingField("tag"))?;
    if !validate::is_valid_text(&tag) {
        return Err(Error::MissingField("tag"));
    }
    let photo_url = photo_url.ok_or(Error::MissingField("photoUrl"))?;
    let coordinates = coordinates.ok_or(Error::MissingField("coordinates"))?;
    if !coordinates.is_valid() {
        return Err(Error::Coordinates);
    }
    resolve_famous_person(repo, &famous_person)?;
    let tag = FamousPersonTag {
        id: Id::new(),
        user: author.id.clone(),
        famous_person,
        tag,
        created_at: Timestamp::now(),
        photo_url,
        coordinates,
    };
    repo.create_tag(&tag)?;
    Ok(tag)
}

/// The referenced person and the author are immutable.
pub fn update_famous_person_tag<R>(
    repo: &R,
    caller: &User,
    id: &Id,
    update: UpdateFamousPersonTag,
) -> Result<FamousPersonTag>
where
    R: FamousPersonTagRepo,
{
    let mut tag = repo.get_tag(id)?;
    super::authorize_owner_or_admin(caller, &tag.user)?;
    if let Some(text) = update.tag {
        if !validate::is_valid_text(&text) {
            return Err(Error::MissingField("tag"));
        }
        tag.tag = text;
    }
    if let Some(photo_url) = update.photo_url {
        tag.photo_url = photo_url;
    }
    if let Some(coordinates) = update.coordinates {
        if !coordinates.is_valid() {
            return Err(Error::Coordinates);
        }
        tag.coordinates = coordinates;
    }
    repo.update_tag(&tag)?;
    Ok(tag)
}

pub fn delete_famous_person_tag<R: FamousPersonTagRepo>(
    repo: &R,
    caller: &User,
    id: &Id,
) -> Result<()> {
    let tag = repo.get_tag(id)?;
    super::authorize_owner_or_admin(caller, &tag.user)?;
    repo.delete_tag(id)?;
    Ok(())
}

pub fn get_famous_person_tag<R>(repo: &R, id: &Id) -> Result<TagWithRefs>
where
    R: FamousPersonTagRepo + UserRepo + FamousPersonRepo,
{
    let tag = repo.get_tag(id)?;
    let user = repo.get_user(&tag.user)?;
    let person = repo.get_famous_person(&tag.famous_person)?;
    Ok((tag, user, person))
}

pub fn query_famous_person_tags<R>(repo: &R, query: TagQuery) -> Result<Vec<TagWithRefs>>
where
    R: FamousPersonTagRepo + UserRepo + FamousPersonRepo,
{
    if let Some(user) = &query.user {
        if !user.is_valid() {
            return Err(Error::InvalidId);
        }
    }
    if let Some(person) = &query.famous_person {
        if !person.is_valid() {
            return Err(Error::InvalidId);
        }
    }
    let tags = repo.query_tags(&query)?;
    let mut results = Vec::with_capacity(tags.len());
    for tag in tags {
        let user = repo.get_user(&tag.user)?;
        let person = repo.get_famous_person(&tag.famous_person)?;
        results.push((tag, user, person));
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    struct Fixture {
        person: FamousPerson,
        author: User,
    }

    fn fixture(db: &MockDb) -> Fixture {
        let country = db.create_test_country("Colombia", "CO");
        let city = db.create_test_city("Aracataca", &country.id);
        let person = db.create_test_famous_person("Gabriel", &city.id, &country.id);
        let author = db.create_test_user("author@example.com", Role::CommonUser);
        Fixture { person, author }
    }

    fn new_tag(person: &Id) -> NewFamousPersonTag {
        NewFamousPersonTag {
            famous_person: Some(person.to_string()),
            tag: Some("legend".into()),
            photo_url: Some("https://img.example/tag.jpg".into()),
            coordinates: Some(LatLngCoords::new(10.0, -74.0)),
        }
    }

    #[test]
    fn author_is_taken_from_the_caller() {
        let db = MockDb::default();
        let fx = fixture(&db);
        let tag = create_famous_person_tag(&db, &fx.author, new_tag(&fx.person.id)).unwrap();
        assert_eq!(fx.author.id, tag.user);
    }

    #[test]
    fn create_requires_photo_and_coordinates() {
        let db = MockDb::default();
        let fx = fixture(&db);
        let mut incomplete = new_tag(&fx.person.id);
        incomplete.photo_url = None;
        assert!(matches!(
            create_famous_person_tag(&db, &fx.author, incomplete),
            Err(Error::MissingField("photoUrl"))
        ));
        let mut incomplete = new_tag(&fx.person.id);
        incomplete.coordinates = None;
        assert!(matches!(
            create_famous_person_tag(&db, &fx.author, incomplete),
            Err(Error::MissingField("coordinates"))
        ));
    }

    #[test]
    fn create_with_dangling_person() {
        let db = MockDb::default();
        let fx = fixture(&db);
        assert!(matches!(
            create_famous_person_tag(&db, &fx.author, new_tag(&Id::new())),
            Err(Error::FamousPersonNotFound)
        ));
    }

    #[test]
    fn multiple_tags_per_person_and_user_are_allowed() {
        let db = MockDb::default();
        let fx = fixture(&db);
        create_famous_person_tag(&db, &fx.author, new_tag(&fx.person.id)).unwrap();
        create_famous_person_tag(&db, &fx.author, new_tag(&fx.person.id)).unwrap();
        assert_eq!(2, db.tags.borrow().len());
    }

    #[test]
    fn only_the_author_or_an_admin_may_update() {
        let db = MockDb::default();
        let fx = fixture(&db);
        let tag = create_famous_person_tag(&db, &fx.author, new_tag(&fx.person.id)).unwrap();

        let other = db.create_test_user("other@example.com", Role::CommonUser);
        assert!(matches!(
            update_famous_person_tag(
                &db,
                &other,
                &tag.id,
                UpdateFamousPersonTag {
                    tag: Some("changed".into()),
                    ..Default::default()
                },
            ),
            Err(Error::Forbidden)
        ));

        let admin = db.create_test_user("admin@example.com", Role::Admin);
        let updated = update_famous_person_tag(
            &db,
            &admin,
            &tag.id,
            UpdateFamousPersonTag {
                tag: Some("changed".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!("changed", updated.tag);
    }

    #[test]
    fn only_the_author_or_an_admin_may_delete() {
        let db = MockDb::default();
        let fx = fixture(&db);
        let tag = create_famous_person_tag(&db, &fx.author, new_tag(&fx.person.id)).unwrap();
        let other = db.create_test_user("other@example.com", Role::CommonUser);
        assert!(matches!(
            delete_famous_person_tag(&db, &other, &tag.id),
            Err(Error::Forbidden)
        ));
        assert!(delete_famous_person_tag(&db, &fx.author, &tag.id).is_ok());
        assert!(db.tags.borrow().is_empty());
    }
}

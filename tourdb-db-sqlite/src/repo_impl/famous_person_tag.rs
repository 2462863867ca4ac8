use super::*;

impl<'a> FamousPersonTagRepo for DbReadOnly<'a> {
    fn create_tag(&self, _tag: &FamousPersonTag) -> Result<()> {
        unreachable!();
    }
    fn update_tag(&self, _tag: &FamousPersonTag) -> Result<()> {
        unreachable!();
    }
    fn delete_tag(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }

    fn get_tag(&self, id: &Id) -> Result<FamousPersonTag> {
        get_tag(&mut self.conn.borrow_mut(), id)
    }
    fn query_tags(&self, query: &TagQuery) -> Result<Vec<FamousPersonTag>> {
        query_tags(&mut self.conn.borrow_mut(), query)
    }
    fn count_tags_of_famous_person(&self, famous_person: &Id) -> Result<usize> {
        count_tags_of_famous_person(&mut self.conn.borrow_mut(), famous_person)
    }
    fn count_tags_of_user(&self, user: &Id) -> Result<usize> {
        count_tags_of_user(&mut self.conn.borrow_mut(), user)
    }
}

impl<'a> FamousPersonTagRepo for DbReadWrite<'a> {
    fn create_tag(&self, tag: &FamousPersonTag) -> Result<()> {
        create_tag(&mut self.conn.borrow_mut(), tag)
    }
    fn update_tag(&self, tag: &FamousPersonTag) -> Result<()> {
        update_tag(&mut self.conn.borrow_mut(), tag)
    }
    fn delete_tag(&self, id: &Id) -> Result<()> {
        delete_tag(&mut self.conn.borrow_mut(), id)
    }

    fn get_tag(&self, id: &Id) -> Result<FamousPersonTag> {
        get_tag(&mut self.conn.borrow_mut(), id)
    }
    fn query_tags(&self, query: &TagQuery) -> Result<Vec<FamousPersonTag>> {
        query_tags(&mut self.conn.borrow_mut(), query)
    }
    fn count_tags_of_famous_person(&self, famous_person: &Id) -> Result<usize> {
        count_tags_of_famous_person(&mut self.conn.borrow_mut(), famous_person)
    }
    fn count_tags_of_user(&self, user: &Id) -> Result<usize> {
        count_tags_of_user(&mut self.conn.borrow_mut(), user)
    }
}

fn create_tag(conn: &mut SqliteConnection, tag: &FamousPersonTag) -> Result<()> {
    let new_tag = models::NewFamousPersonTag::from(tag);
    diesel::insert_into(schema::famous_person_tags::table)
        .values(&new_tag)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_tag(conn: &mut SqliteConnection, tag: &FamousPersonTag) -> Result<()> {
    use schema::famous_person_tags::dsl;
    let new_tag = models::NewFamousPersonTag::from(tag);
    diesel::update(dsl::famous_person_tags.filter(dsl::id.eq(tag.id.as_str())))
        .set(&new_tag)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_tag(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::famous_person_tags::dsl;
    let count = diesel::delete(dsl::famous_person_tags.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_tag(conn: &mut SqliteConnection, id: &Id) -> Result<FamousPersonTag> {
    use schema::famous_person_tags::dsl;
    Ok(dsl::famous_person_tags
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::FamousPersonTagEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn query_tags(conn: &mut SqliteConnection, query: &TagQuery) -> Result<Vec<FamousPersonTag>> {
    use schema::famous_person_tags::dsl;
    let mut stmt = dsl::famous_person_tags.into_boxed();
    if let Some(user) = &query.user {
        stmt = stmt.filter(dsl::user.eq(user.as_str()));
    }
    if let Some(famous_person) = &query.famous_person {
        stmt = stmt.filter(dsl::famous_person.eq(famous_person.as_str()));
    }
    Ok(stmt
        .load::<models::FamousPersonTagEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn count_tags_of_famous_person(conn: &mut SqliteConnection, famous_person: &Id) -> Result<usize> {
    use schema::famous_person_tags::dsl;
    Ok(dsl::famous_person_tags
        .filter(dsl::famous_person.eq(famous_person.as_str()))
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn count_tags_of_user(conn: &mut SqliteConnection, user: &Id) -> Result<usize> {
    use schema::famous_person_tags::dsl;
    Ok(dsl::famous_person_tags
        .filter(dsl::user.eq(user.as_str()))
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

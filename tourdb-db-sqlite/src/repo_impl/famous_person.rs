use super::*;

impl<'a> FamousPersonRepo for DbReadOnly<'a> {
    fn create_famous_person(&self, _person: &FamousPerson) -> Result<()> {
        unreachable!();
    }
    fn update_famous_person(&self, _person: &FamousPerson) -> Result<()> {
        unreachable!();
    }
    fn delete_famous_person(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }

    fn get_famous_person(&self, id: &Id) -> Result<FamousPerson> {
        get_famous_person(&mut self.conn.borrow_mut(), id)
    }
    fn query_famous_people(&self, query: &FamousPersonQuery) -> Result<Vec<FamousPerson>> {
        query_famous_people(&mut self.conn.borrow_mut(), query)
    }
    fn try_get_famous_person_by_identity(
        &self,
        identity: &FamousPersonIdentity,
    ) -> Result<Option<FamousPerson>> {
        try_get_famous_person_by_identity(&mut self.conn.borrow_mut(), identity)
    }
    fn count_famous_people_of_city(&self, city: &Id) -> Result<usize> {
        count_famous_people_of_city(&mut self.conn.borrow_mut(), city)
    }
    fn count_famous_people_of_country(&self, country: &Id) -> Result<usize> {
        count_famous_people_of_country(&mut self.conn.borrow_mut(), country)
    }
}

impl<'a> FamousPersonRepo for DbReadWrite<'a> {
    fn create_famous_person(&self, person: &FamousPerson) -> Result<()> {
        create_famous_person(&mut self.conn.borrow_mut(), person)
    }
    fn update_famous_person(&self, person: &FamousPerson) -> Result<()> {
        update_famous_person(&mut self.conn.borrow_mut(), person)
    }
    fn delete_famous_person(&self, id: &Id) -> Result<()> {
        delete_famous_person(&mut self.conn.borrow_mut(), id)
    }

    fn get_famous_person(&self, id: &Id) -> Result<FamousPerson> {
        get_famous_person(&mut self.conn.borrow_mut(), id)
    }
    fn query_famous_people(&self, query: &FamousPersonQuery) -> Result<Vec<FamousPerson>> {
        query_famous_people(&mut self.conn.borrow_mut(), query)
    }
    fn try_get_famous_person_by_identity(
        &self,
        identity: &FamousPersonIdentity,
    ) -> Result<Option<FamousPerson>> {
        try_get_famous_person_by_identity(&mut self.conn.borrow_mut(), identity)
    }
    fn count_famous_people_of_city(&self, city: &Id) -> Result<usize> {
        count_famous_people_of_city(&mut self.conn.borrow_mut(), city)
    }
    fn count_famous_people_of_country(&self, country: &Id) -> Result<usize> {
        count_famous_people_of_country(&mut self.conn.borrow_mut(), country)
    }
}

fn create_famous_person(conn: &mut SqliteConnection, person: &FamousPerson) -> Result<()> {
    let new_person = models::NewFamousPerson::from(person);
    diesel::insert_into(schema::famous_people::table)
        .values(&new_person)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_famous_person(conn: &mut SqliteConnection, person: &FamousPerson) -> Result<()> {
    use schema::famous_people::dsl;
    let new_person = models::NewFamousPerson::from(person);
    diesel::update(dsl::famous_people.filter(dsl::id.eq(person.id.as_str())))
        .set(&new_person)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_famous_person(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::famous_people::dsl;
    let count = diesel::delete(dsl::famous_people.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_famous_person(conn: &mut SqliteConnection, id: &Id) -> Result<FamousPerson> {
    use schema::famous_people::dsl;
    Ok(dsl::famous_people
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::FamousPersonEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn query_famous_people(
    conn: &mut SqliteConnection,
    query: &FamousPersonQuery,
) -> Result<Vec<FamousPerson>> {
    use schema::famous_people::dsl;
    let mut stmt = dsl::famous_people.into_boxed();
    if let Some(category) = &query.category {
        stmt = stmt.filter(dsl::category.like(substring_pattern(category)));
    }
    if let Some(city) = &query.city_of_birth {
        stmt = stmt.filter(dsl::city_of_birth.eq(city.as_str()));
    }
    if let Some(country) = &query.country_of_origin {
        stmt = stmt.filter(dsl::country_of_origin.eq(country.as_str()));
    }
    Ok(stmt
        .load::<models::FamousPersonEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn try_get_famous_person_by_identity(
    conn: &mut SqliteConnection,
    identity: &FamousPersonIdentity,
) -> Result<Option<FamousPerson>> {
    use schema::famous_people::dsl;
    let mut stmt = dsl::famous_people
        .filter(dsl::name.eq(identity.name))
        .filter(dsl::city_of_birth.eq(identity.city_of_birth.as_str()))
        .filter(dsl::country_of_origin.eq(identity.country_of_origin.as_str()))
        .into_boxed();
    stmt = match identity.last_name {
        Some(last_name) => stmt.filter(dsl::last_name.eq(last_name)),
        None => stmt.filter(dsl::last_name.is_null()),
    };
    Ok(stmt
        .first::<models::FamousPersonEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn count_famous_people_of_city(conn: &mut SqliteConnection, city: &Id) -> Result<usize> {
    use schema::famous_people::dsl;
    Ok(dsl::famous_people
        .filter(dsl::city_of_birth.eq(city.as_str()))
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn count_famous_people_of_country(conn: &mut SqliteConnection, country: &Id) -> Result<usize> {
    use schema::famous_people::dsl;
    Ok(dsl::famous_people
        .filter(dsl::country_of_origin.eq(country.as_str()))
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

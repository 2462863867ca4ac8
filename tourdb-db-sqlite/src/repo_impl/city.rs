use super::*;

impl<'a> CityRepo for DbReadOnly<'a> {
    fn create_city(&self, _city: &City) -> Result<()> {
        unreachable!();
    }
    fn update_city(&self, _city: &City) -> Result<()> {
        unreachable!();
    }
    fn delete_city(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }

    fn get_city(&self, id: &Id) -> Result<City> {
        get_city(&mut self.conn.borrow_mut(), id)
    }
    fn query_cities(&self, query: &CityQuery) -> Result<Vec<City>> {
        query_cities(&mut self.conn.borrow_mut(), query)
    }
    fn try_get_city_by_name_and_country(
        &self,
        name: &str,
        country: &Id,
    ) -> Result<Option<City>> {
        try_get_city_by_name_and_country(&mut self.conn.borrow_mut(), name, country)
    }
    fn count_cities_of_country(&self, country: &Id) -> Result<usize> {
        count_cities_of_country(&mut self.conn.borrow_mut(), country)
    }
}

impl<'a> CityRepo for DbReadWrite<'a> {
    fn create_city(&self, city: &City) -> Result<()> {
        create_city(&mut self.conn.borrow_mut(), city)
    }
    fn update_city(&self, city: &City) -> Result<()> {
        update_city(&mut self.conn.borrow_mut(), city)
    }
    fn delete_city(&self, id: &Id) -> Result<()> {
        delete_city(&mut self.conn.borrow_mut(), id)
    }

    fn get_city(&self, id: &Id) -> Result<City> {
        get_city(&mut self.conn.borrow_mut(), id)
    }
    fn query_cities(&self, query: &CityQuery) -> Result<Vec<City>> {
        query_cities(&mut self.conn.borrow_mut(), query)
    }
    fn try_get_city_by_name_and_country(
        &self,
        name: &str,
        country: &Id,
    ) -> Result<Option<City>> {
        try_get_city_by_name_and_country(&mut self.conn.borrow_mut(), name, country)
    }
    fn count_cities_of_country(&self, country: &Id) -> Result<usize> {
        count_cities_of_country(&mut self.conn.borrow_mut(), country)
    }
}

fn create_city(conn: &mut SqliteConnection, city: &City) -> Result<()> {
    let new_city = models::NewCity::from(city);
    diesel::insert_into(schema::cities::table)
        .values(&new_city)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_city(conn: &mut SqliteConnection, city: &City) -> Result<()> {
    use schema::cities::dsl;
    let new_city = models::NewCity::from(city);
    diesel::update(dsl::cities.filter(dsl::id.eq(city.id.as_str())))
        .set(&new_city)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_city(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::cities::dsl;
    let count = diesel::delete(dsl::cities.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_city(conn: &mut SqliteConnection, id: &Id) -> Result<City> {
    use schema::cities::dsl;
    Ok(dsl::cities
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::CityEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn query_cities(conn: &mut SqliteConnection, query: &CityQuery) -> Result<Vec<City>> {
    use schema::cities::dsl;
    let mut stmt = dsl::cities.into_boxed();
    if let Some(country) = &query.country {
        stmt = stmt.filter(dsl::country.eq(country.as_str()));
    }
    Ok(stmt
        .load::<models::CityEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn try_get_city_by_name_and_country(
    conn: &mut SqliteConnection,
    name: &str,
    country: &Id,
) -> Result<Option<City>> {
    use schema::cities::dsl;
    Ok(dsl::cities
        .filter(dsl::name.eq(name))
        .filter(dsl::country.eq(country.as_str()))
        .first::<models::CityEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn count_cities_of_country(conn: &mut SqliteConnection, country: &Id) -> Result<usize> {
    use schema::cities::dsl;
    Ok(dsl::cities
        .filter(dsl::country.eq(country.as_str()))
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

use super::*;

impl<'a> CountryRepo for DbReadOnly<'a> {
    fn create_country(&self, _country: &Country) -> Result<()> {
        unreachable!();
    }
    fn update_country(&self, _country: &Country) -> Result<()> {
        unreachable!();
    }
    fn delete_country(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }

    fn get_country(&self, id: &Id) -> Result<Country> {
        get_country(&mut self.conn.borrow_mut(), id)
    }
    fn all_countries(&self) -> Result<Vec<Country>> {
        all_countries(&mut self.conn.borrow_mut())
    }
    fn try_get_country_by_name(&self, name: &str) -> Result<Option<Country>> {
        try_get_country_by_name(&mut self.conn.borrow_mut(), name)
    }
    fn try_get_country_by_code(&self, code: &CountryCode) -> Result<Option<Country>> {
        try_get_country_by_code(&mut self.conn.borrow_mut(), code)
    }
}

impl<'a> CountryRepo for DbReadWrite<'a> {
    fn create_country(&self, country: &Country) -> Result<()> {
        create_country(&mut self.conn.borrow_mut(), country)
    }
    fn update_country(&self, country: &Country) -> Result<()> {
        update_country(&mut self.conn.borrow_mut(), country)
    }
    fn delete_country(&self, id: &Id) -> Result<()> {
        delete_country(&mut self.conn.borrow_mut(), id)
    }

    fn get_country(&self, id: &Id) -> Result<Country> {
        get_country(&mut self.conn.borrow_mut(), id)
    }
    fn all_countries(&self) -> Result<Vec<Country>> {
        all_countries(&mut self.conn.borrow_mut())
    }
    fn try_get_country_by_name(&self, name: &str) -> Result<Option<Country>> {
        try_get_country_by_name(&mut self.conn.borrow_mut(), name)
    }
    fn try_get_country_by_code(&self, code: &CountryCode) -> Result<Option<Country>> {
        try_get_country_by_code(&mut self.conn.borrow_mut(), code)
    }
}

fn create_country(conn: &mut SqliteConnection, country: &Country) -> Result<()> {
    let new_country = models::NewCountry::from(country);
    diesel::insert_into(schema::countries::table)
        .values(&new_country)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_country(conn: &mut SqliteConnection, country: &Country) -> Result<()> {
    use schema::countries::dsl;
    let new_country = models::NewCountry::from(country);
    diesel::update(dsl::countries.filter(dsl::id.eq(country.id.as_str())))
        .set(&new_country)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_country(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::countries::dsl;
    let count = diesel::delete(dsl::countries.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_country(conn: &mut SqliteConnection, id: &Id) -> Result<Country> {
    use schema::countries::dsl;
    Ok(dsl::countries
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::CountryEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_countries(conn: &mut SqliteConnection) -> Result<Vec<Country>> {
    use schema::countries::dsl;
    Ok(dsl::countries
        .load::<models::CountryEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn try_get_country_by_name(conn: &mut SqliteConnection, name: &str) -> Result<Option<Country>> {
    use schema::countries::dsl;
    Ok(dsl::countries
        .filter(dsl::name.eq(name))
        .first::<models::CountryEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn try_get_country_by_code(
    conn: &mut SqliteConnection,
    code: &CountryCode,
) -> Result<Option<Country>> {
    use schema::countries::dsl;
    Ok(dsl::countries
        .filter(dsl::code.eq(code.as_str()))
        .first::<models::CountryEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

use super::*;

impl<'a> SiteRepo for DbReadOnly<'a> {
    fn create_site(&self, _site: &Site) -> Result<()> {
        unreachable!();
    }
    fn update_site(&self, _site: &Site) -> Result<()> {
        unreachable!();
    }
    fn delete_site(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }

    fn get_site(&self, id: &Id) -> Result<Site> {
        get_site(&mut self.conn.borrow_mut(), id)
    }
    fn query_sites(&self, query: &SiteQuery) -> Result<Vec<Site>> {
        query_sites(&mut self.conn.borrow_mut(), query)
    }
    fn try_get_site_by_name_city_country(
        &self,
        name: &str,
        city: &Id,
        country: &Id,
    ) -> Result<Option<Site>> {
        try_get_site_by_name_city_country(&mut self.conn.borrow_mut(), name, city, country)
    }
    fn count_sites_of_city(&self, city: &Id) -> Result<usize> {
        count_sites_of_city(&mut self.conn.borrow_mut(), city)
    }
    fn count_sites_of_country(&self, country: &Id) -> Result<usize> {
        count_sites_of_country(&mut self.conn.borrow_mut(), country)
    }
}

impl<'a> SiteRepo for DbReadWrite<'a> {
    fn create_site(&self, site: &Site) -> Result<()> {
        create_site(&mut self.conn.borrow_mut(), site)
    }
    fn update_site(&self, site: &Site) -> Result<()> {
        update_site(&mut self.conn.borrow_mut(), site)
    }
    fn delete_site(&self, id: &Id) -> Result<()> {
        delete_site(&mut self.conn.borrow_mut(), id)
    }

    fn get_site(&self, id: &Id) -> Result<Site> {
        get_site(&mut self.conn.borrow_mut(), id)
    }
    fn query_sites(&self, query: &SiteQuery) -> Result<Vec<Site>> {
        query_sites(&mut self.conn.borrow_mut(), query)
    }
    fn try_get_site_by_name_city_country(
        &self,
        name: &str,
        city: &Id,
        country: &Id,
    ) -> Result<Option<Site>> {
        try_get_site_by_name_city_country(&mut self.conn.borrow_mut(), name, city, country)
    }
    fn count_sites_of_city(&self, city: &Id) -> Result<usize> {
        count_sites_of_city(&mut self.conn.borrow_mut(), city)
    }
    fn count_sites_of_country(&self, country: &Id) -> Result<usize> {
        count_sites_of_country(&mut self.conn.borrow_mut(), country)
    }
}

fn create_site(conn: &mut SqliteConnection, site: &Site) -> Result<()> {
    let new_site = models::NewSite::from(site);
    diesel::insert_into(schema::sites::table)
        .values(&new_site)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_site(conn: &mut SqliteConnection, site: &Site) -> Result<()> {
    use schema::sites::dsl;
    let new_site = models::NewSite::from(site);
    diesel::update(dsl::sites.filter(dsl::id.eq(site.id.as_str())))
        .set(&new_site)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_site(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::sites::dsl;
    let count = diesel::delete(dsl::sites.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_site(conn: &mut SqliteConnection, id: &Id) -> Result<Site> {
    use schema::sites::dsl;
    Ok(dsl::sites
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::SiteEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn query_sites(conn: &mut SqliteConnection, query: &SiteQuery) -> Result<Vec<Site>> {
    use schema::sites::dsl;
    let mut stmt = dsl::sites.into_boxed();
    if let Some(city) = &query.city {
        stmt = stmt.filter(dsl::city.eq(city.as_str()));
    }
    if let Some(country) = &query.country {
        stmt = stmt.filter(dsl::country.eq(country.as_str()));
    }
    if let Some(site_type) = &query.site_type {
        // LIKE is case-insensitive in SQLite.
        stmt = stmt.filter(dsl::site_type.like(substring_pattern(site_type)));
    }
    Ok(stmt
        .load::<models::SiteEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn try_get_site_by_name_city_country(
    conn: &mut SqliteConnection,
    name: &str,
    city: &Id,
    country: &Id,
) -> Result<Option<Site>> {
    use schema::sites::dsl;
    Ok(dsl::sites
        .filter(dsl::name.eq(name))
        .filter(dsl::city.eq(city.as_str()))
        .filter(dsl::country.eq(country.as_str()))
        .first::<models::SiteEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn count_sites_of_city(conn: &mut SqliteConnection, city: &Id) -> Result<usize> {
    use schema::sites::dsl;
    Ok(dsl::sites
        .filter(dsl::city.eq(city.as_str()))
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn count_sites_of_country(conn: &mut SqliteConnection, country: &Id) -> Result<usize> {
    use schema::sites::dsl;
    Ok(dsl::sites
        .filter(dsl::country.eq(country.as_str()))
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

use super::*;

impl<'a> VisitRepo for DbReadOnly<'a> {
    fn create_visit(&self, _visit: &Visit) -> Result<()> {
        unreachable!();
    }
    fn update_visit(&self, _visit: &Visit) -> Result<()> {
        unreachable!();
    }
    fn delete_visit(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }

    fn get_visit(&self, id: &Id) -> Result<Visit> {
        get_visit(&mut self.conn.borrow_mut(), id)
    }
    fn query_visits(&self, query: &VisitQuery) -> Result<Vec<Visit>> {
        query_visits(&mut self.conn.borrow_mut(), query)
    }
    fn count_visits_of_site(&self, site: &Id) -> Result<usize> {
        count_visits_of_site(&mut self.conn.borrow_mut(), site)
    }
    fn count_visits_of_user(&self, user: &Id) -> Result<usize> {
        count_visits_of_user(&mut self.conn.borrow_mut(), user)
    }
}

impl<'a> VisitRepo for DbReadWrite<'a> {
    fn create_visit(&self, visit: &Visit) -> Result<()> {
        create_visit(&mut self.conn.borrow_mut(), visit)
    }
    fn update_visit(&self, visit: &Visit) -> Result<()> {
        update_visit(&mut self.conn.borrow_mut(), visit)
    }
    fn delete_visit(&self, id: &Id) -> Result<()> {
        delete_visit(&mut self.conn.borrow_mut(), id)
    }

    fn get_visit(&self, id: &Id) -> Result<Visit> {
        get_visit(&mut self.conn.borrow_mut(), id)
    }
    fn query_visits(&self, query: &VisitQuery) -> Result<Vec<Visit>> {
        query_visits(&mut self.conn.borrow_mut(), query)
    }
    fn count_visits_of_site(&self, site: &Id) -> Result<usize> {
        count_visits_of_site(&mut self.conn.borrow_mut(), site)
    }
    fn count_visits_of_user(&self, user: &Id) -> Result<usize> {
        count_visits_of_user(&mut self.conn.borrow_mut(), user)
    }
}

fn create_visit(conn: &mut SqliteConnection, visit: &Visit) -> Result<()> {
    let new_visit = models::NewVisit::from(visit);
    diesel::insert_into(schema::visits::table)
        .values(&new_visit)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_visit(conn: &mut SqliteConnection, visit: &Visit) -> Result<()> {
    use schema::visits::dsl;
    let new_visit = models::NewVisit::from(visit);
    diesel::update(dsl::visits.filter(dsl::id.eq(visit.id.as_str())))
        .set(&new_visit)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_visit(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::visits::dsl;
    let count = diesel::delete(dsl::visits.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_visit(conn: &mut SqliteConnection, id: &Id) -> Result<Visit> {
    use schema::visits::dsl;
    load_visit(
        dsl::visits
            .filter(dsl::id.eq(id.as_str()))
            .first::<models::VisitEntity>(conn)
            .map_err(from_diesel_err)?,
    )
}

fn query_visits(conn: &mut SqliteConnection, query: &VisitQuery) -> Result<Vec<Visit>> {
    use schema::visits::dsl;
    let mut stmt = dsl::visits.into_boxed();
    if let Some(user) = &query.user {
        stmt = stmt.filter(dsl::user.eq(user.as_str()));
    }
    if let Some(site) = &query.site {
        stmt = stmt.filter(dsl::site.eq(site.as_str()));
    }
    stmt.load::<models::VisitEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_visit)
        .collect()
}

fn count_visits_of_site(conn: &mut SqliteConnection, site: &Id) -> Result<usize> {
    use schema::visits::dsl;
    Ok(dsl::visits
        .filter(dsl::site.eq(site.as_str()))
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn count_visits_of_user(conn: &mut SqliteConnection, user: &Id) -> Result<usize> {
    use schema::visits::dsl;
    Ok(dsl::visits
        .filter(dsl::user.eq(user.as_str()))
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

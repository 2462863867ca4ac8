use super::*;

impl<'a> DishRepo for DbReadOnly<'a> {
    fn create_dish(&self, _dish: &Dish) -> Result<()> {
        unreachable!();
    }
    fn update_dish(&self, _dish: &Dish) -> Result<()> {
        unreachable!();
    }
    fn delete_dish(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }

    fn get_dish(&self, id: &Id) -> Result<Dish> {
        get_dish(&mut self.conn.borrow_mut(), id)
    }
    fn query_dishes(&self, query: &DishQuery) -> Result<Vec<Dish>> {
        query_dishes(&mut self.conn.borrow_mut(), query)
    }
    fn try_get_dish_by_name_and_site(&self, name: &str, site: &Id) -> Result<Option<Dish>> {
        try_get_dish_by_name_and_site(&mut self.conn.borrow_mut(), name, site)
    }
    fn count_dishes_of_site(&self, site: &Id) -> Result<usize> {
        count_dishes_of_site(&mut self.conn.borrow_mut(), site)
    }
    fn count_dishes_of_country(&self, country: &Id) -> Result<usize> {
        count_dishes_of_country(&mut self.conn.borrow_mut(), country)
    }
}

impl<'a> DishRepo for DbReadWrite<'a> {
    fn create_dish(&self, dish: &Dish) -> Result<()> {
        create_dish(&mut self.conn.borrow_mut(), dish)
    }
    fn update_dish(&self, dish: &Dish) -> Result<()> {
        update_dish(&mut self.conn.borrow_mut(), dish)
    }
    fn delete_dish(&self, id: &Id) -> Result<()> {
        delete_dish(&mut self.conn.borrow_mut(), id)
    }

    fn get_dish(&self, id: &Id) -> Result<Dish> {
        get_dish(&mut self.conn.borrow_mut(), id)
    }
    fn query_dishes(&self, query: &DishQuery) -> Result<Vec<Dish>> {
        query_dishes(&mut self.conn.borrow_mut(), query)
    }
    fn try_get_dish_by_name_and_site(&self, name: &str, site: &Id) -> Result<Option<Dish>> {
        try_get_dish_by_name_and_site(&mut self.conn.borrow_mut(), name, site)
    }
    fn count_dishes_of_site(&self, site: &Id) -> Result<usize> {
        count_dishes_of_site(&mut self.conn.borrow_mut(), site)
    }
    fn count_dishes_of_country(&self, country: &Id) -> Result<usize> {
        count_dishes_of_country(&mut self.conn.borrow_mut(), country)
    }
}

fn create_dish(conn: &mut SqliteConnection, dish: &Dish) -> Result<()> {
    let new_dish = models::NewDish::from(dish);
    diesel::insert_into(schema::dishes::table)
        .values(&new_dish)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_dish(conn: &mut SqliteConnection, dish: &Dish) -> Result<()> {
    use schema::dishes::dsl;
    let new_dish = models::NewDish::from(dish);
    diesel::update(dsl::dishes.filter(dsl::id.eq(dish.id.as_str())))
        .set(&new_dish)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_dish(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::dishes::dsl;
    let count = diesel::delete(dsl::dishes.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_dish(conn: &mut SqliteConnection, id: &Id) -> Result<Dish> {
    use schema::dishes::dsl;
    Ok(dsl::dishes
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::DishEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn query_dishes(conn: &mut SqliteConnection, query: &DishQuery) -> Result<Vec<Dish>> {
    use schema::dishes::dsl;
    let mut stmt = dsl::dishes.into_boxed();
    if let Some(country) = &query.country {
        stmt = stmt.filter(dsl::country.eq(country.as_str()));
    }
    if let Some(site) = &query.site {
        stmt = stmt.filter(dsl::site.eq(site.as_str()));
    }
    if let Some(name) = &query.name {
        stmt = stmt.filter(dsl::name.like(substring_pattern(name)));
    }
    Ok(stmt
        .load::<models::DishEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn try_get_dish_by_name_and_site(
    conn: &mut SqliteConnection,
    name: &str,
    site: &Id,
) -> Result<Option<Dish>> {
    use schema::dishes::dsl;
    Ok(dsl::dishes
        .filter(dsl::name.eq(name))
        .filter(dsl::site.eq(site.as_str()))
        .first::<models::DishEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn count_dishes_of_site(conn: &mut SqliteConnection, site: &Id) -> Result<usize> {
    use schema::dishes::dsl;
    Ok(dsl::dishes
        .filter(dsl::site.eq(site.as_str()))
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn count_dishes_of_country(conn: &mut SqliteConnection, country: &Id) -> Result<usize> {
    use schema::dishes::dsl;
    Ok(dsl::dishes
        .filter(dsl::country.eq(country.as_str()))
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use mesa_core::ApiError;
use uuid::Uuid;

use crate::models::{Category, NewCategory};
use crate::schema::categories;

pub fn create(conn: &mut PgConnection, new: NewCategory) -> Result<Category, ApiError> {
    conn.transaction(|conn| {
        ensure_name_free(conn, &new.name, None)?;
        Ok(diesel::insert_into(categories::table)
            .values(&new)
            .returning(Category::as_returning())
            .get_result(conn)?)
    })
}

pub fn get(conn: &mut PgConnection, id: Uuid) -> Result<Category, ApiError> {
    categories::table
        .find(id)
        .select(Category::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("category"))
}

pub fn list(
    conn: &mut PgConnection,
    limit: i64,
    offset: i64,
) -> Result<(Vec<Category>, i64), ApiError> {
    let total: i64 = categories::table.count().get_result(conn)?;
    let items = categories::table
        .order(categories::name.asc())
        .limit(limit)
        .offset(offset)
        .select(Category::as_select())
        .load(conn)?;
    Ok((items, total))
}

/// Rename; categories carry nothing but a name, so the update is total.
pub fn update(conn: &mut PgConnection, id: Uuid, new: NewCategory) -> Result<Category, ApiError> {
    conn.transaction(|conn| {
        ensure_name_free(conn, &new.name, Some(id))?;
        diesel::update(categories::table.find(id))
            .set(categories::name.eq(&new.name))
            .returning(Category::as_returning())
            .get_result(conn)
            .optional()?
            .ok_or_else(|| ApiError::not_found("category"))
    })
}

pub fn delete(conn: &mut PgConnection, id: Uuid) -> Result<(), ApiError> {
    let deleted = diesel::delete(categories::table.find(id))
        .execute(conn)
        .map_err(|e| match e {
            diesel::result::Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                ApiError::conflict("category is still referenced by ingredients or recipes")
            }
            other => other.into(),
        })?;
    if deleted == 0 {
        return Err(ApiError::not_found("category"));
    }
    Ok(())
}

pub fn ensure_exists(conn: &mut PgConnection, id: Uuid) -> Result<(), ApiError> {
    let found: bool =
        diesel::select(diesel::dsl::exists(categories::table.find(id))).get_result(conn)?;
    if !found {
        return Err(ApiError::not_found("category"));
    }
    Ok(())
}

fn ensure_name_free(
    conn: &mut PgConnection,
    name: &str,
    exclude: Option<Uuid>,
) -> Result<(), ApiError> {
    let mut query = categories::table
        .filter(categories::name.eq(name))
        .into_boxed();
    if let Some(id) = exclude {
        query = query.filter(categories::id.ne(id));
    }
    let taken: i64 = query.count().get_result(conn)?;
    if taken > 0 {
        return Err(ApiError::conflict(format!(
            "category name '{name}' is already taken"
        )));
    }
    Ok(())
}

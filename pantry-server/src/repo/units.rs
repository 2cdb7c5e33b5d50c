use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use mesa_core::ApiError;
use uuid::Uuid;

use crate::models::{NewUnit, Unit};
use crate::schema::units;

pub fn create(conn: &mut PgConnection, new: NewUnit) -> Result<Unit, ApiError> {
    conn.transaction(|conn| {
        ensure_name_free(conn, &new.name, None)?;
        Ok(diesel::insert_into(units::table)
            .values(&new)
            .returning(Unit::as_returning())
            .get_result(conn)?)
    })
}

pub fn get(conn: &mut PgConnection, id: Uuid) -> Result<Unit, ApiError> {
    units::table
        .find(id)
        .select(Unit::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("unit"))
}

pub fn list(conn: &mut PgConnection, limit: i64, offset: i64) -> Result<(Vec<Unit>, i64), ApiError> {
    let total: i64 = units::table.count().get_result(conn)?;
    let items = units::table
        .order(units::name.asc())
        .limit(limit)
        .offset(offset)
        .select(Unit::as_select())
        .load(conn)?;
    Ok((items, total))
}

pub fn update(conn: &mut PgConnection, id: Uuid, new: NewUnit) -> Result<Unit, ApiError> {
    conn.transaction(|conn| {
        ensure_name_free(conn, &new.name, Some(id))?;
        diesel::update(units::table.find(id))
            .set(units::name.eq(&new.name))
            .returning(Unit::as_returning())
            .get_result(conn)
            .optional()?
            .ok_or_else(|| ApiError::not_found("unit"))
    })
}

pub fn delete(conn: &mut PgConnection, id: Uuid) -> Result<(), ApiError> {
    let deleted = diesel::delete(units::table.find(id))
        .execute(conn)
        .map_err(|e| match e {
            diesel::result::Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                ApiError::conflict("unit is still referenced by recipes, inventory or lists")
            }
            other => other.into(),
        })?;
    if deleted == 0 {
        return Err(ApiError::not_found("unit"));
    }
    Ok(())
}

pub fn ensure_exists(conn: &mut PgConnection, id: Uuid) -> Result<(), ApiError> {
    let found: bool = diesel::select(diesel::dsl::exists(units::table.find(id))).get_result(conn)?;
    if !found {
        return Err(ApiError::not_found("unit"));
    }
    Ok(())
}

fn ensure_name_free(
    conn: &mut PgConnection,
    name: &str,
    exclude: Option<Uuid>,
) -> Result<(), ApiError> {
    let mut query = units::table.filter(units::name.eq(name)).into_boxed();
    if let Some(id) = exclude {
        query = query.filter(units::id.ne(id));
    }
    let taken: i64 = query.count().get_result(conn)?;
    if taken > 0 {
        return Err(ApiError::conflict(format!(
            "unit name '{name}' is already taken"
        )));
    }
    Ok(())
}

use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use mesa_core::ApiError;
use uuid::Uuid;

use crate::models::{NewUser, User, UserChanges};
use crate::schema::users;

pub fn create(conn: &mut PgConnection, new: NewUser) -> Result<User, ApiError> {
    conn.transaction(|conn| {
        super::roles::ensure_exists(conn, new.role_id)?;
        ensure_email_free(conn, &new.email, None)?;
        Ok(diesel::insert_into(users::table)
            .values(&new)
            .returning(User::as_returning())
            .get_result(conn)?)
    })
}

pub fn get(conn: &mut PgConnection, id: Uuid) -> Result<User, ApiError> {
    users::table
        .find(id)
        .select(User::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("user"))
}

pub fn list(
    conn: &mut PgConnection,
    role_id: Option<Uuid>,
    limit: i64,
    offset: i64,
) -> Result<(Vec<User>, i64), ApiError> {
    let mut count_query = users::table.into_boxed();
    let mut query = users::table.into_boxed();
    if let Some(role_id) = role_id {
        count_query = count_query.filter(users::role_id.eq(role_id));
        query = query.filter(users::role_id.eq(role_id));
    }

    let total: i64 = count_query.count().get_result(conn)?;
    let items = query
        .order(users::created_at.desc())
        .limit(limit)
        .offset(offset)
        .select(User::as_select())
        .load(conn)?;
    Ok((items, total))
}

pub fn update(conn: &mut PgConnection, id: Uuid, changes: UserChanges) -> Result<User, ApiError> {
    conn.transaction(|conn| {
        if let Some(role_id) = changes.role_id {
            super::roles::ensure_exists(conn, role_id)?;
        }
        if let Some(email) = &changes.email {
            ensure_email_free(conn, email, Some(id))?;
        }
        diesel::update(users::table.find(id))
            .set(&changes)
            .returning(User::as_returning())
            .get_result(conn)
            .optional()?
            .ok_or_else(|| ApiError::not_found("user"))
    })
}

pub fn delete(conn: &mut PgConnection, id: Uuid) -> Result<(), ApiError> {
    let deleted = diesel::delete(users::table.find(id))
        .execute(conn)
        .map_err(|e| match e {
            diesel::result::Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                ApiError::conflict(
                    "user still has dependent rows (groups, recipes, inventory, plans, lists or notifications)",
                )
            }
            other => other.into(),
        })?;
    if deleted == 0 {
        return Err(ApiError::not_found("user"));
    }
    Ok(())
}

pub fn ensure_exists(conn: &mut PgConnection, id: Uuid) -> Result<(), ApiError> {
    let found: bool = diesel::select(diesel::dsl::exists(users::table.find(id))).get_result(conn)?;
    if !found {
        return Err(ApiError::not_found("user"));
    }
    Ok(())
}

fn ensure_email_free(
    conn: &mut PgConnection,
    email: &str,
    exclude: Option<Uuid>,
) -> Result<(), ApiError> {
    let mut query = users::table.filter(users::email.eq(email)).into_boxed();
    if let Some(id) = exclude {
        query = query.filter(users::id.ne(id));
    }
    let taken: i64 = query.count().get_result(conn)?;
    if taken > 0 {
        return Err(ApiError::conflict(format!(
            "email '{email}' is already in use"
        )));
    }
    Ok(())
}

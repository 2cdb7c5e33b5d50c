use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use mesa_core::ApiError;
use uuid::Uuid;

use crate::models::{Group, GroupChanges, NewGroup, NewUserGroup, User, UserGroup};
use crate::schema::{groups, user_groups, users};

pub fn create(conn: &mut PgConnection, new: NewGroup) -> Result<Group, ApiError> {
    conn.transaction(|conn| {
        ensure_name_free(conn, &new.name, None)?;
        Ok(diesel::insert_into(groups::table)
            .values(&new)
            .returning(Group::as_returning())
            .get_result(conn)?)
    })
}

pub fn get(conn: &mut PgConnection, id: Uuid) -> Result<Group, ApiError> {
    groups::table
        .find(id)
        .select(Group::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("group"))
}

pub fn list(
    conn: &mut PgConnection,
    limit: i64,
    offset: i64,
) -> Result<(Vec<Group>, i64), ApiError> {
    let total: i64 = groups::table.count().get_result(conn)?;
    let items = groups::table
        .order(groups::name.asc())
        .limit(limit)
        .offset(offset)
        .select(Group::as_select())
        .load(conn)?;
    Ok((items, total))
}

pub fn update(conn: &mut PgConnection, id: Uuid, changes: GroupChanges) -> Result<Group, ApiError> {
    conn.transaction(|conn| {
        if let Some(name) = &changes.name {
            ensure_name_free(conn, name, Some(id))?;
        }
        diesel::update(groups::table.find(id))
            .set(&changes)
            .returning(Group::as_returning())
            .get_result(conn)
            .optional()?
            .ok_or_else(|| ApiError::not_found("group"))
    })
}

pub fn delete(conn: &mut PgConnection, id: Uuid) -> Result<(), ApiError> {
    let deleted = diesel::delete(groups::table.find(id))
        .execute(conn)
        .map_err(|e| match e {
            diesel::result::Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                ApiError::conflict("group still has members")
            }
            other => other.into(),
        })?;
    if deleted == 0 {
        return Err(ApiError::not_found("group"));
    }
    Ok(())
}

/// Add a user to a group. A duplicate pair is a conflict, never a silent
/// overwrite.
pub fn add_member(conn: &mut PgConnection, group_id: Uuid, user_id: Uuid) -> Result<UserGroup, ApiError> {
    conn.transaction(|conn| {
        ensure_exists(conn, group_id)?;
        super::users::ensure_exists(conn, user_id)?;

        let already: bool = diesel::select(diesel::dsl::exists(
            user_groups::table.find((user_id, group_id)),
        ))
        .get_result(conn)?;
        if already {
            return Err(ApiError::conflict("user is already a member of this group"));
        }

        Ok(diesel::insert_into(user_groups::table)
            .values(&NewUserGroup { user_id, group_id })
            .returning(UserGroup::as_returning())
            .get_result(conn)?)
    })
}

pub fn list_members(conn: &mut PgConnection, group_id: Uuid) -> Result<Vec<User>, ApiError> {
    ensure_exists(conn, group_id)?;
    Ok(user_groups::table
        .inner_join(users::table)
        .filter(user_groups::group_id.eq(group_id))
        .order(users::name.asc())
        .select(User::as_select())
        .load(conn)?)
}

pub fn remove_member(conn: &mut PgConnection, group_id: Uuid, user_id: Uuid) -> Result<(), ApiError> {
    let deleted = diesel::delete(user_groups::table.find((user_id, group_id))).execute(conn)?;
    if deleted == 0 {
        return Err(ApiError::not_found("group membership"));
    }
    Ok(())
}

pub fn ensure_exists(conn: &mut PgConnection, id: Uuid) -> Result<(), ApiError> {
    let found: bool =
        diesel::select(diesel::dsl::exists(groups::table.find(id))).get_result(conn)?;
    if !found {
        return Err(ApiError::not_found("group"));
    }
    Ok(())
}

fn ensure_name_free(
    conn: &mut PgConnection,
    name: &str,
    exclude: Option<Uuid>,
) -> Result<(), ApiError> {
    let mut query = groups::table.filter(groups::name.eq(name)).into_boxed();
    if let Some(id) = exclude {
        query = query.filter(groups::id.ne(id));
    }
    let taken: i64 = query.count().get_result(conn)?;
    if taken > 0 {
        return Err(ApiError::conflict(format!(
            "group name '{name}' is already taken"
        )));
    }
    Ok(())
}

use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use mesa_core::ApiError;
use uuid::Uuid;

use crate::models::{NewRole, Role, RoleChanges};
use crate::schema::roles;

pub fn create(conn: &mut PgConnection, new: NewRole) -> Result<Role, ApiError> {
    conn.transaction(|conn| {
        ensure_name_free(conn, &new.name, None)?;
        Ok(diesel::insert_into(roles::table)
            .values(&new)
            .returning(Role::as_returning())
            .get_result(conn)?)
    })
}

pub fn get(conn: &mut PgConnection, id: Uuid) -> Result<Role, ApiError> {
    roles::table
        .find(id)
        .select(Role::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("role"))
}

pub fn list(conn: &mut PgConnection, limit: i64, offset: i64) -> Result<(Vec<Role>, i64), ApiError> {
    let total: i64 = roles::table.count().get_result(conn)?;
    let items = roles::table
        .order(roles::name.asc())
        .limit(limit)
        .offset(offset)
        .select(Role::as_select())
        .load(conn)?;
    Ok((items, total))
}

pub fn update(conn: &mut PgConnection, id: Uuid, changes: RoleChanges) -> Result<Role, ApiError> {
    conn.transaction(|conn| {
        if let Some(name) = &changes.name {
            ensure_name_free(conn, name, Some(id))?;
        }
        diesel::update(roles::table.find(id))
            .set(&changes)
            .returning(Role::as_returning())
            .get_result(conn)
            .optional()?
            .ok_or_else(|| ApiError::not_found("role"))
    })
}

pub fn delete(conn: &mut PgConnection, id: Uuid) -> Result<(), ApiError> {
    let deleted = diesel::delete(roles::table.find(id))
        .execute(conn)
        .map_err(|e| match e {
            diesel::result::Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                ApiError::conflict("role is still assigned to existing users")
            }
            other => other.into(),
        })?;
    if deleted == 0 {
        return Err(ApiError::not_found("role"));
    }
    Ok(())
}

pub fn ensure_exists(conn: &mut PgConnection, id: Uuid) -> Result<(), ApiError> {
    let found: bool = diesel::select(diesel::dsl::exists(roles::table.find(id))).get_result(conn)?;
    if !found {
        return Err(ApiError::not_found("role"));
    }
    Ok(())
}

fn ensure_name_free(
    conn: &mut PgConnection,
    name: &str,
    exclude: Option<Uuid>,
) -> Result<(), ApiError> {
    let mut query = roles::table.filter(roles::name.eq(name)).into_boxed();
    if let Some(id) = exclude {
        query = query.filter(roles::id.ne(id));
    }
    let taken: i64 = query.count().get_result(conn)?;
    if taken > 0 {
        return Err(ApiError::conflict(format!(
            "role name '{name}' is already taken"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::test_support;

    #[test]
    fn test_create_get_roundtrip() {
        let Some(mut conn) = test_support::connection() else {
            return;
        };
        let role = test_support::make_role(&mut conn);
        let fetched = get(&mut conn, role.id).unwrap();
        assert_eq!(fetched.name, role.name);
    }

    #[test]
    fn test_duplicate_name_is_conflict() {
        let Some(mut conn) = test_support::connection() else {
            return;
        };
        let role = test_support::make_role(&mut conn);
        let err = create(
            &mut conn,
            NewRole {
                name: role.name.clone(),
                description: Some("duplicate".to_string()),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[test]
    fn test_update_missing_role_is_not_found() {
        let Some(mut conn) = test_support::connection() else {
            return;
        };
        let err = update(
            &mut conn,
            Uuid::new_v4(),
            RoleChanges {
                description: Some("nope".to_string()),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_delete_role_with_users_is_conflict() {
        let Some(mut conn) = test_support::connection() else {
            return;
        };
        let user = test_support::make_user(&mut conn);
        let err = delete(&mut conn, user.role_id).unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));
    }
}

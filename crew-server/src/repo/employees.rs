use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use mesa_core::ApiError;
use uuid::Uuid;

use crate::models::{Employee, EmployeeChanges, NewEmployee};
use crate::schema::employees;

pub fn create(conn: &mut PgConnection, new: NewEmployee) -> Result<Employee, ApiError> {
    conn.transaction(|conn| {
        ensure_email_free(conn, &new.email, None)?;
        Ok(diesel::insert_into(employees::table)
            .values(&new)
            .returning(Employee::as_returning())
            .get_result(conn)?)
    })
}

pub fn get(conn: &mut PgConnection, id: Uuid) -> Result<Employee, ApiError> {
    employees::table
        .find(id)
        .select(Employee::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("employee"))
}

pub fn list(
    conn: &mut PgConnection,
    post: Option<String>,
    limit: i64,
    offset: i64,
) -> Result<(Vec<Employee>, i64), ApiError> {
    let build = || {
        let mut query = employees::table.into_boxed();
        if let Some(post) = &post {
            query = query.filter(employees::post.eq(post.clone()));
        }
        query
    };

    let total: i64 = build().count().get_result(conn)?;
    let items = build()
        .order(employees::name.asc())
        .limit(limit)
        .offset(offset)
        .select(Employee::as_select())
        .load(conn)?;
    Ok((items, total))
}

pub fn update(
    conn: &mut PgConnection,
    id: Uuid,
    changes: EmployeeChanges,
) -> Result<Employee, ApiError> {
    conn.transaction(|conn| {
        if let Some(email) = &changes.email {
            ensure_email_free(conn, email, Some(id))?;
        }
        diesel::update(employees::table.find(id))
            .set(&changes)
            .returning(Employee::as_returning())
            .get_result(conn)
            .optional()?
            .ok_or_else(|| ApiError::not_found("employee"))
    })
}

pub fn delete(conn: &mut PgConnection, id: Uuid) -> Result<(), ApiError> {
    let deleted = diesel::delete(employees::table.find(id))
        .execute(conn)
        .map_err(|e| match e {
            diesel::result::Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                ApiError::conflict("employee still has assigned tasks")
            }
            other => other.into(),
        })?;
    if deleted == 0 {
        return Err(ApiError::not_found("employee"));
    }
    Ok(())
}

pub fn ensure_exists(conn: &mut PgConnection, id: Uuid) -> Result<(), ApiError> {
    let found: bool =
        diesel::select(diesel::dsl::exists(employees::table.find(id))).get_result(conn)?;
    if !found {
        return Err(ApiError::not_found("employee"));
    }
    Ok(())
}

fn ensure_email_free(
    conn: &mut PgConnection,
    email: &str,
    exclude: Option<Uuid>,
) -> Result<(), ApiError> {
    let mut query = employees::table
        .filter(employees::email.eq(email))
        .into_boxed();
    if let Some(id) = exclude {
        query = query.filter(employees::id.ne(id));
    }
    let taken: i64 = query.count().get_result(conn)?;
    if taken > 0 {
        return Err(ApiError::conflict(format!(
            "employee email '{email}' is already taken"
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
        let employee = test_support::make_employee(&mut conn);
        let fetched = get(&mut conn, employee.id).unwrap();
        assert_eq!(fetched.email, employee.email);
    }

    #[test]
    fn test_duplicate_email_is_conflict() {
        let Some(mut conn) = test_support::connection() else {
            return;
        };
        let employee = test_support::make_employee(&mut conn);
        let err = create(
            &mut conn,
            NewEmployee {
                name: "someone else".to_string(),
                email: employee.email.clone(),
                phone: None,
                post: None,
            },
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[test]
    fn test_update_missing_employee_is_not_found() {
        let Some(mut conn) = test_support::connection() else {
            return;
        };
        let err = update(
            &mut conn,
            Uuid::new_v4(),
            EmployeeChanges {
                phone: Some("555-0100".to_string()),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_delete_employee_with_tasks_is_conflict() {
        let Some(mut conn) = test_support::connection() else {
            return;
        };
        let task = test_support::make_task(&mut conn);
        let err = delete(&mut conn, task.employee_id).unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));
    }
}

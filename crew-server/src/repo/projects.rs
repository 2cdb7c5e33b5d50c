use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use mesa_core::ApiError;
use uuid::Uuid;

use crate::models::{NewProject, Project, ProjectChanges};
use crate::schema::projects;

fn check_dates(init: Option<chrono::NaiveDate>, finish: Option<chrono::NaiveDate>) -> Result<(), ApiError> {
    if let (Some(init), Some(finish)) = (init, finish) {
        if init > finish {
            return Err(ApiError::validation(
                "init_date must not be after finish_date",
            ));
        }
    }
    Ok(())
}

pub fn create(conn: &mut PgConnection, new: NewProject) -> Result<Project, ApiError> {
    check_dates(new.init_date, new.finish_date)?;
    Ok(diesel::insert_into(projects::table)
        .values(&new)
        .returning(Project::as_returning())
        .get_result(conn)?)
}

pub fn get(conn: &mut PgConnection, id: Uuid) -> Result<Project, ApiError> {
    projects::table
        .find(id)
        .select(Project::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("project"))
}

pub fn list(
    conn: &mut PgConnection,
    q: Option<String>,
    limit: i64,
    offset: i64,
) -> Result<(Vec<Project>, i64), ApiError> {
    let build = || {
        let mut query = projects::table.into_boxed();
        if let Some(q) = &q {
            query = query.filter(projects::name.ilike(format!("%{q}%")));
        }
        query
    };

    let total: i64 = build().count().get_result(conn)?;
    let items = build()
        .order(projects::created_at.desc())
        .limit(limit)
        .offset(offset)
        .select(Project::as_select())
        .load(conn)?;
    Ok((items, total))
}

pub fn update(
    conn: &mut PgConnection,
    id: Uuid,
    changes: ProjectChanges,
) -> Result<Project, ApiError> {
    conn.transaction(|conn| {
        let current = get(conn, id)?;
        check_dates(
            changes.init_date.or(current.init_date),
            changes.finish_date.or(current.finish_date),
        )?;
        Ok(diesel::update(projects::table.find(id))
            .set(&changes)
            .returning(Project::as_returning())
            .get_result(conn)?)
    })
}

pub fn delete(conn: &mut PgConnection, id: Uuid) -> Result<(), ApiError> {
    let deleted = diesel::delete(projects::table.find(id))
        .execute(conn)
        .map_err(|e| match e {
            diesel::result::Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                ApiError::conflict("project still has tasks")
            }
            other => other.into(),
        })?;
    if deleted == 0 {
        return Err(ApiError::not_found("project"));
    }
    Ok(())
}

pub fn ensure_exists(conn: &mut PgConnection, id: Uuid) -> Result<(), ApiError> {
    let found: bool =
        diesel::select(diesel::dsl::exists(projects::table.find(id))).get_result(conn)?;
    if !found {
        return Err(ApiError::not_found("project"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::test_support;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_create_get_roundtrip() {
        let Some(mut conn) = test_support::connection() else {
            return;
        };
        let project = test_support::make_project(&mut conn);
        let fetched = get(&mut conn, project.id).unwrap();
        assert_eq!(fetched.name, project.name);
    }

    #[test]
    fn test_inverted_date_range_is_rejected() {
        let Some(mut conn) = test_support::connection() else {
            return;
        };
        let err = create(
            &mut conn,
            NewProject {
                name: "backwards".to_string(),
                description: None,
                init_date: Some(date("2026-10-01")),
                finish_date: Some(date("2026-09-01")),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn test_delete_project_with_tasks_is_conflict() {
        let Some(mut conn) = test_support::connection() else {
            return;
        };
        let task = test_support::make_task(&mut conn);
        let err = delete(&mut conn, task.project_id).unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));
    }
}

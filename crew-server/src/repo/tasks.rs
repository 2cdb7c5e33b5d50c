use diesel::prelude::*;
use mesa_core::ApiError;
use uuid::Uuid;

use crate::models::{NewTask, Task, TaskChanges};
use crate::schema::tasks;

/// Filters accepted by [`list`].
#[derive(Debug, Default, Clone)]
pub struct TaskFilter {
    pub project_id: Option<Uuid>,
    pub employee_id: Option<Uuid>,
    pub status: Option<String>,
}

pub fn create(conn: &mut PgConnection, new: NewTask) -> Result<Task, ApiError> {
    conn.transaction(|conn| {
        super::projects::ensure_exists(conn, new.project_id)?;
        super::employees::ensure_exists(conn, new.employee_id)?;
        Ok(diesel::insert_into(tasks::table)
            .values(&new)
            .returning(Task::as_returning())
            .get_result(conn)?)
    })
}

pub fn get(conn: &mut PgConnection, id: Uuid) -> Result<Task, ApiError> {
    tasks::table
        .find(id)
        .select(Task::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("task"))
}

pub fn list(
    conn: &mut PgConnection,
    filter: TaskFilter,
    limit: i64,
    offset: i64,
) -> Result<(Vec<Task>, i64), ApiError> {
    let build = |filter: &TaskFilter| {
        let mut query = tasks::table.into_boxed();
        if let Some(project_id) = filter.project_id {
            query = query.filter(tasks::project_id.eq(project_id));
        }
        if let Some(employee_id) = filter.employee_id {
            query = query.filter(tasks::employee_id.eq(employee_id));
        }
        if let Some(status) = &filter.status {
            query = query.filter(tasks::status.eq(status.clone()));
        }
        query
    };

    let total: i64 = build(&filter).count().get_result(conn)?;
    let items = build(&filter)
        .order(tasks::created_at.desc())
        .limit(limit)
        .offset(offset)
        .select(Task::as_select())
        .load(conn)?;
    Ok((items, total))
}

pub fn update(conn: &mut PgConnection, id: Uuid, changes: TaskChanges) -> Result<Task, ApiError> {
    conn.transaction(|conn| {
        if let Some(project_id) = changes.project_id {
            super::projects::ensure_exists(conn, project_id)?;
        }
        if let Some(employee_id) = changes.employee_id {
            super::employees::ensure_exists(conn, employee_id)?;
        }
        diesel::update(tasks::table.find(id))
            .set(&changes)
            .returning(Task::as_returning())
            .get_result(conn)
            .optional()?
            .ok_or_else(|| ApiError::not_found("task"))
    })
}

pub fn delete(conn: &mut PgConnection, id: Uuid) -> Result<(), ApiError> {
    let deleted = diesel::delete(tasks::table.find(id)).execute(conn)?;
    if deleted == 0 {
        return Err(ApiError::not_found("task"));
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
        let task = test_support::make_task(&mut conn);
        let fetched = get(&mut conn, task.id).unwrap();
        assert_eq!(fetched.title, task.title);
        assert_eq!(fetched.status, "open");
    }

    #[test]
    fn test_create_with_missing_project_is_not_found() {
        let Some(mut conn) = test_support::connection() else {
            return;
        };
        let employee = test_support::make_employee(&mut conn);
        let err = create(
            &mut conn,
            NewTask {
                project_id: Uuid::new_v4(),
                employee_id: employee.id,
                title: "orphan".to_string(),
                description: None,
                deadline: None,
                status: "open".to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_list_filters_by_status() {
        let Some(mut conn) = test_support::connection() else {
            return;
        };
        let task = test_support::make_task(&mut conn);
        update(
            &mut conn,
            task.id,
            TaskChanges {
                status: Some("done".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        let filter = TaskFilter {
            project_id: Some(task.project_id),
            status: Some("done".to_string()),
            ..Default::default()
        };
        let (items, total) = list(&mut conn, filter, 50, 0).unwrap();
        assert_eq!(total, 1);
        assert_eq!(items[0].id, task.id);

        let filter = TaskFilter {
            project_id: Some(task.project_id),
            status: Some("open".to_string()),
            ..Default::default()
        };
        let (_, total) = list(&mut conn, filter, 50, 0).unwrap();
        assert_eq!(total, 0);
    }

    #[test]
    fn test_delete_task_then_parents() {
        let Some(mut conn) = test_support::connection() else {
            return;
        };
        let task = test_support::make_task(&mut conn);
        delete(&mut conn, task.id).unwrap();
        super::super::projects::delete(&mut conn, task.project_id).unwrap();
        super::super::employees::delete(&mut conn, task.employee_id).unwrap();
    }
}

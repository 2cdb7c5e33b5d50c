//! Helpers for repository tests that run against a real database.
//!
//! Tests are skipped unless `TEST_DATABASE_URL` is set. Every connection runs
//! inside a test transaction that is rolled back on drop, so tests never see
//! each other's rows and leave the database unchanged.

use std::sync::Mutex;

use diesel::prelude::*;
use diesel_migrations::MigrationHarness;
use uuid::Uuid;

use crate::models::{NewEmployee, NewProject, NewTask};

static MIGRATION_LOCK: Mutex<()> = Mutex::new(());

/// Connect to `TEST_DATABASE_URL`, or return `None` so the caller can skip.
pub fn connection() -> Option<PgConnection> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let mut conn =
        PgConnection::establish(&url).expect("failed to connect to TEST_DATABASE_URL");
    {
        let _guard = MIGRATION_LOCK.lock().expect("migration lock poisoned");
        conn.run_pending_migrations(crate::db::MIGRATIONS)
            .expect("failed to run migrations");
    }
    conn.begin_test_transaction()
        .expect("failed to begin test transaction");
    Some(conn)
}

/// Suffix for names that must be unique within the test transaction.
pub fn nonce() -> String {
    Uuid::new_v4().simple().to_string()
}

pub fn make_employee(conn: &mut PgConnection) -> crate::models::Employee {
    super::employees::create(
        conn,
        NewEmployee {
            name: format!("employee-{}", nonce()),
            email: format!("{}@example.com", nonce()),
            phone: None,
            post: Some("engineer".to_string()),
        },
    )
    .expect("create employee")
}

pub fn make_project(conn: &mut PgConnection) -> crate::models::Project {
    super::projects::create(
        conn,
        NewProject {
            name: format!("project-{}", nonce()),
            description: None,
            init_date: None,
            finish_date: None,
        },
    )
    .expect("create project")
}

pub fn make_task(conn: &mut PgConnection) -> crate::models::Task {
    let project = make_project(conn);
    let employee = make_employee(conn);
    super::tasks::create(
        conn,
        NewTask {
            project_id: project.id,
            employee_id: employee.id,
            title: format!("task-{}", nonce()),
            description: None,
            deadline: None,
            status: "open".to_string(),
        },
    )
    .expect("create task")
}

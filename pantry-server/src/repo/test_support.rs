//! Helpers for repository tests that run against a real database.
//!
//! Tests are skipped unless `TEST_DATABASE_URL` is set. Every connection runs
//! inside a test transaction that is rolled back on drop, so tests never see
//! each other's rows and leave the database unchanged.

use std::sync::Mutex;

use diesel::prelude::*;
use diesel_migrations::MigrationHarness;
use uuid::Uuid;

use crate::models::{NewCategory, NewIngredient, NewRole, NewUnit, NewUser};

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

pub fn make_role(conn: &mut PgConnection) -> crate::models::Role {
    super::roles::create(
        conn,
        NewRole {
            name: format!("role-{}", nonce()),
            description: None,
        },
    )
    .expect("create role")
}

pub fn make_user(conn: &mut PgConnection) -> crate::models::User {
    let role = make_role(conn);
    super::users::create(
        conn,
        NewUser {
            name: format!("user-{}", nonce()),
            email: format!("{}@example.com", nonce()),
            password_hash: "not-a-real-hash".to_string(),
            profile_photo: None,
            account_type: "standard".to_string(),
            role_id: role.id,
        },
    )
    .expect("create user")
}

pub fn make_category(conn: &mut PgConnection) -> crate::models::Category {
    super::categories::create(
        conn,
        NewCategory {
            name: format!("category-{}", nonce()),
        },
    )
    .expect("create category")
}

pub fn make_unit(conn: &mut PgConnection) -> crate::models::Unit {
    super::units::create(
        conn,
        NewUnit {
            name: format!("unit-{}", nonce()),
        },
    )
    .expect("create unit")
}

pub fn make_ingredient(conn: &mut PgConnection) -> crate::models::Ingredient {
    let category = make_category(conn);
    super::ingredients::create(
        conn,
        NewIngredient {
            name: format!("ingredient-{}", nonce()),
            category_id: category.id,
        },
    )
    .expect("create ingredient")
}

//! Record structs for the three crew tables plus their insert and
//! partial-update shapes.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Queryable, Selectable, Debug, Clone, Serialize, ToSchema)]
#[diesel(table_name = crate::schema::employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Job title, e.g. "site engineer"
    pub post: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Deserialize, ToSchema)]
#[diesel(table_name = crate::schema::employees)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub post: Option<String>,
}

#[derive(AsChangeset, Debug, Default, Deserialize, ToSchema)]
#[diesel(table_name = crate::schema::employees)]
pub struct EmployeeChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub post: Option<String>,
}

impl EmployeeChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none() && self.post.is_none()
    }
}

#[derive(Queryable, Selectable, Debug, Clone, Serialize, ToSchema)]
#[diesel(table_name = crate::schema::projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub init_date: Option<NaiveDate>,
    pub finish_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Deserialize, ToSchema)]
#[diesel(table_name = crate::schema::projects)]
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
    pub init_date: Option<NaiveDate>,
    pub finish_date: Option<NaiveDate>,
}

#[derive(AsChangeset, Debug, Default, Deserialize, ToSchema)]
#[diesel(table_name = crate::schema::projects)]
pub struct ProjectChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub init_date: Option<NaiveDate>,
    pub finish_date: Option<NaiveDate>,
}

impl ProjectChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.init_date.is_none()
            && self.finish_date.is_none()
    }
}

#[derive(Queryable, Selectable, Debug, Clone, Serialize, ToSchema)]
#[diesel(table_name = crate::schema::tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Task {
    pub id: Uuid,
    pub project_id: Uuid,
    pub employee_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::tasks)]
pub struct NewTask {
    pub project_id: Uuid,
    pub employee_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub status: String,
}

#[derive(AsChangeset, Debug, Default, Deserialize, ToSchema)]
#[diesel(table_name = crate::schema::tasks)]
pub struct TaskChanges {
    pub project_id: Option<Uuid>,
    pub employee_id: Option<Uuid>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub status: Option<String>,
}

impl TaskChanges {
    pub fn is_empty(&self) -> bool {
        self.project_id.is_none()
            && self.employee_id.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.deadline.is_none()
            && self.status.is_none()
    }
}

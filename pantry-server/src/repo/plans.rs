use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use mesa_core::ApiError;
use uuid::Uuid;

use crate::models::{NewPlan, Plan, PlanChanges};
use crate::schema::plans;

pub fn create(conn: &mut PgConnection, new: NewPlan) -> Result<Plan, ApiError> {
    if new.start_date > new.end_date {
        return Err(ApiError::validation(
            "start_date must not be after end_date",
        ));
    }
    conn.transaction(|conn| {
        super::users::ensure_exists(conn, new.user_id)?;
        Ok(diesel::insert_into(plans::table)
            .values(&new)
            .returning(Plan::as_returning())
            .get_result(conn)?)
    })
}

pub fn get(conn: &mut PgConnection, id: Uuid) -> Result<Plan, ApiError> {
    plans::table
        .find(id)
        .select(Plan::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("plan"))
}

pub fn list(
    conn: &mut PgConnection,
    user_id: Option<Uuid>,
    plan_type: Option<String>,
    limit: i64,
    offset: i64,
) -> Result<(Vec<Plan>, i64), ApiError> {
    let build = || {
        let mut query = plans::table.into_boxed();
        if let Some(user_id) = user_id {
            query = query.filter(plans::user_id.eq(user_id));
        }
        if let Some(plan_type) = &plan_type {
            query = query.filter(plans::plan_type.eq(plan_type.clone()));
        }
        query
    };

    let total: i64 = build().count().get_result(conn)?;
    let items = build()
        .order(plans::start_date.desc())
        .limit(limit)
        .offset(offset)
        .select(Plan::as_select())
        .load(conn)?;
    Ok((items, total))
}

pub fn update(conn: &mut PgConnection, id: Uuid, changes: PlanChanges) -> Result<Plan, ApiError> {
    conn.transaction(|conn| {
        let current = get(conn, id)?;
        let start = changes.start_date.unwrap_or(current.start_date);
        let end = changes.end_date.unwrap_or(current.end_date);
        if start > end {
            return Err(ApiError::validation(
                "start_date must not be after end_date",
            ));
        }
        Ok(diesel::update(plans::table.find(id))
            .set(&changes)
            .returning(Plan::as_returning())
            .get_result(conn)?)
    })
}

pub fn delete(conn: &mut PgConnection, id: Uuid) -> Result<(), ApiError> {
    let deleted = diesel::delete(plans::table.find(id))
        .execute(conn)
        .map_err(|e| match e {
            diesel::result::Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                ApiError::conflict("plan still has menus")
            }
            other => other.into(),
        })?;
    if deleted == 0 {
        return Err(ApiError::not_found("plan"));
    }
    Ok(())
}

pub fn ensure_exists(conn: &mut PgConnection, id: Uuid) -> Result<(), ApiError> {
    let found: bool = diesel::select(diesel::dsl::exists(plans::table.find(id))).get_result(conn)?;
    if !found {
        return Err(ApiError::not_found("plan"));
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
    fn test_inverted_date_range_is_rejected() {
        let Some(mut conn) = test_support::connection() else {
            return;
        };
        let user = test_support::make_user(&mut conn);
        let err = create(
            &mut conn,
            NewPlan {
                user_id: user.id,
                start_date: date("2026-09-08"),
                end_date: date("2026-09-01"),
                plan_type: "weekly".to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn test_update_cannot_invert_date_range() {
        let Some(mut conn) = test_support::connection() else {
            return;
        };
        let user = test_support::make_user(&mut conn);
        let plan = create(
            &mut conn,
            NewPlan {
                user_id: user.id,
                start_date: date("2026-09-01"),
                end_date: date("2026-09-07"),
                plan_type: "weekly".to_string(),
            },
        )
        .unwrap();

        // Moving only start_date past the stored end_date must fail.
        let err = update(
            &mut conn,
            plan.id,
            PlanChanges {
                start_date: Some(date("2026-09-10")),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));

        let unchanged = get(&mut conn, plan.id).unwrap();
        assert_eq!(unchanged.start_date, date("2026-09-01"));
    }
}

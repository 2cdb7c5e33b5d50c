use diesel::prelude::*;
use mesa_core::ApiError;
use uuid::Uuid;

use crate::models::{NewNotification, Notification, NotificationChanges};
use crate::schema::notifications;

pub fn create(conn: &mut PgConnection, new: NewNotification) -> Result<Notification, ApiError> {
    conn.transaction(|conn| {
        super::users::ensure_exists(conn, new.user_id)?;
        Ok(diesel::insert_into(notifications::table)
            .values(&new)
            .returning(Notification::as_returning())
            .get_result(conn)?)
    })
}

pub fn get(conn: &mut PgConnection, id: Uuid) -> Result<Notification, ApiError> {
    notifications::table
        .find(id)
        .select(Notification::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("notification"))
}

pub fn list(
    conn: &mut PgConnection,
    user_id: Option<Uuid>,
    limit: i64,
    offset: i64,
) -> Result<(Vec<Notification>, i64), ApiError> {
    let build = || {
        let mut query = notifications::table.into_boxed();
        if let Some(user_id) = user_id {
            query = query.filter(notifications::user_id.eq(user_id));
        }
        query
    };

    let total: i64 = build().count().get_result(conn)?;
    let items = build()
        .order(notifications::sent_at.desc())
        .limit(limit)
        .offset(offset)
        .select(Notification::as_select())
        .load(conn)?;
    Ok((items, total))
}

pub fn update(
    conn: &mut PgConnection,
    id: Uuid,
    changes: NotificationChanges,
) -> Result<Notification, ApiError> {
    diesel::update(notifications::table.find(id))
        .set(&changes)
        .returning(Notification::as_returning())
        .get_result(conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("notification"))
}

pub fn delete(conn: &mut PgConnection, id: Uuid) -> Result<(), ApiError> {
    let deleted = diesel::delete(notifications::table.find(id)).execute(conn)?;
    if deleted == 0 {
        return Err(ApiError::not_found("notification"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::test_support;

    fn make_notification(conn: &mut PgConnection) -> Notification {
        let user = test_support::make_user(conn);
        create(
            conn,
            NewNotification {
                user_id: user.id,
                message: "your plan starts tomorrow".to_string(),
            },
        )
        .expect("create notification")
    }

    #[test]
    fn test_update_rewrites_message() {
        let Some(mut conn) = test_support::connection() else {
            return;
        };
        let notification = make_notification(&mut conn);
        let updated = update(
            &mut conn,
            notification.id,
            NotificationChanges {
                message: Some("your plan starts today".to_string()),
            },
        )
        .unwrap();
        assert_eq!(updated.id, notification.id);
        assert_eq!(updated.message, "your plan starts today");

        let fetched = get(&mut conn, notification.id).unwrap();
        assert_eq!(fetched.message, "your plan starts today");
    }

    #[test]
    fn test_update_missing_notification_is_not_found() {
        let Some(mut conn) = test_support::connection() else {
            return;
        };
        let err = update(
            &mut conn,
            Uuid::new_v4(),
            NotificationChanges {
                message: Some("nope".to_string()),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}

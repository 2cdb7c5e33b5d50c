use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use mesa_core::ApiError;
use uuid::Uuid;

use crate::models::{Ingredient, IngredientChanges, NewIngredient};
use crate::schema::ingredients;

pub fn create(conn: &mut PgConnection, new: NewIngredient) -> Result<Ingredient, ApiError> {
    conn.transaction(|conn| {
        super::categories::ensure_exists(conn, new.category_id)?;
        ensure_name_free(conn, &new.name, None)?;
        Ok(diesel::insert_into(ingredients::table)
            .values(&new)
            .returning(Ingredient::as_returning())
            .get_result(conn)?)
    })
}

pub fn get(conn: &mut PgConnection, id: Uuid) -> Result<Ingredient, ApiError> {
    ingredients::table
        .find(id)
        .select(Ingredient::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("ingredient"))
}

pub fn list(
    conn: &mut PgConnection,
    category_id: Option<Uuid>,
    limit: i64,
    offset: i64,
) -> Result<(Vec<Ingredient>, i64), ApiError> {
    let mut count_query = ingredients::table.into_boxed();
    let mut query = ingredients::table.into_boxed();
    if let Some(category_id) = category_id {
        count_query = count_query.filter(ingredients::category_id.eq(category_id));
        query = query.filter(ingredients::category_id.eq(category_id));
    }

    let total: i64 = count_query.count().get_result(conn)?;
    let items = query
        .order(ingredients::name.asc())
        .limit(limit)
        .offset(offset)
        .select(Ingredient::as_select())
        .load(conn)?;
    Ok((items, total))
}

pub fn update(
    conn: &mut PgConnection,
    id: Uuid,
    changes: IngredientChanges,
) -> Result<Ingredient, ApiError> {
    conn.transaction(|conn| {
        if let Some(category_id) = changes.category_id {
            super::categories::ensure_exists(conn, category_id)?;
        }
        if let Some(name) = &changes.name {
            ensure_name_free(conn, name, Some(id))?;
        }
        diesel::update(ingredients::table.find(id))
            .set(&changes)
            .returning(Ingredient::as_returning())
            .get_result(conn)
            .optional()?
            .ok_or_else(|| ApiError::not_found("ingredient"))
    })
}

pub fn delete(conn: &mut PgConnection, id: Uuid) -> Result<(), ApiError> {
    let deleted = diesel::delete(ingredients::table.find(id))
        .execute(conn)
        .map_err(|e| match e {
            diesel::result::Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                ApiError::conflict("ingredient is still referenced by recipes, inventory or lists")
            }
            other => other.into(),
        })?;
    if deleted == 0 {
        return Err(ApiError::not_found("ingredient"));
    }
    Ok(())
}

pub fn ensure_exists(conn: &mut PgConnection, id: Uuid) -> Result<(), ApiError> {
    let found: bool =
        diesel::select(diesel::dsl::exists(ingredients::table.find(id))).get_result(conn)?;
    if !found {
        return Err(ApiError::not_found("ingredient"));
    }
    Ok(())
}

fn ensure_name_free(
    conn: &mut PgConnection,
    name: &str,
    exclude: Option<Uuid>,
) -> Result<(), ApiError> {
    let mut query = ingredients::table
        .filter(ingredients::name.eq(name))
        .into_boxed();
    if let Some(id) = exclude {
        query = query.filter(ingredients::id.ne(id));
    }
    let taken: i64 = query.count().get_result(conn)?;
    if taken > 0 {
        return Err(ApiError::conflict(format!(
            "ingredient name '{name}' is already taken"
        )));
    }
    Ok(())
}

use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use mesa_core::ApiError;
use uuid::Uuid;

use crate::models::{
    Ingredient, ListIngredient, ListIngredientChanges, NewListIngredient, NewShoppingList,
    ShoppingList, ShoppingListChanges,
};
use crate::schema::{ingredients, list_ingredients, shopping_lists};

pub fn create(conn: &mut PgConnection, new: NewShoppingList) -> Result<ShoppingList, ApiError> {
    conn.transaction(|conn| {
        super::users::ensure_exists(conn, new.user_id)?;
        Ok(diesel::insert_into(shopping_lists::table)
            .values(&new)
            .returning(ShoppingList::as_returning())
            .get_result(conn)?)
    })
}

pub fn get(conn: &mut PgConnection, id: Uuid) -> Result<ShoppingList, ApiError> {
    shopping_lists::table
        .find(id)
        .select(ShoppingList::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("shopping list"))
}

pub fn list(
    conn: &mut PgConnection,
    user_id: Option<Uuid>,
    completed: Option<bool>,
    limit: i64,
    offset: i64,
) -> Result<(Vec<ShoppingList>, i64), ApiError> {
    let build = || {
        let mut query = shopping_lists::table.into_boxed();
        if let Some(user_id) = user_id {
            query = query.filter(shopping_lists::user_id.eq(user_id));
        }
        if let Some(completed) = completed {
            query = query.filter(shopping_lists::completed.eq(completed));
        }
        query
    };

    let total: i64 = build().count().get_result(conn)?;
    let items = build()
        .order(shopping_lists::created_at.desc())
        .limit(limit)
        .offset(offset)
        .select(ShoppingList::as_select())
        .load(conn)?;
    Ok((items, total))
}

pub fn update(
    conn: &mut PgConnection,
    id: Uuid,
    changes: ShoppingListChanges,
) -> Result<ShoppingList, ApiError> {
    diesel::update(shopping_lists::table.find(id))
        .set(&changes)
        .returning(ShoppingList::as_returning())
        .get_result(conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("shopping list"))
}

pub fn delete(conn: &mut PgConnection, id: Uuid) -> Result<(), ApiError> {
    let deleted = diesel::delete(shopping_lists::table.find(id))
        .execute(conn)
        .map_err(|e| match e {
            diesel::result::Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                ApiError::conflict("shopping list still has items")
            }
            other => other.into(),
        })?;
    if deleted == 0 {
        return Err(ApiError::not_found("shopping list"));
    }
    Ok(())
}

pub fn ensure_exists(conn: &mut PgConnection, id: Uuid) -> Result<(), ApiError> {
    let found: bool =
        diesel::select(diesel::dsl::exists(shopping_lists::table.find(id))).get_result(conn)?;
    if !found {
        return Err(ApiError::not_found("shopping list"));
    }
    Ok(())
}

// --- list_ingredients ------------------------------------------------------

pub fn add_item(
    conn: &mut PgConnection,
    new: NewListIngredient,
) -> Result<ListIngredient, ApiError> {
    conn.transaction(|conn| {
        ensure_exists(conn, new.shopping_list_id)?;
        super::ingredients::ensure_exists(conn, new.ingredient_id)?;
        if let Some(unit_id) = new.unit_id {
            super::units::ensure_exists(conn, unit_id)?;
        }

        let already: bool = diesel::select(diesel::dsl::exists(
            list_ingredients::table.find((new.shopping_list_id, new.ingredient_id)),
        ))
        .get_result(conn)?;
        if already {
            return Err(ApiError::conflict("ingredient is already on this list"));
        }

        Ok(diesel::insert_into(list_ingredients::table)
            .values(&new)
            .returning(ListIngredient::as_returning())
            .get_result(conn)?)
    })
}

pub fn list_items(
    conn: &mut PgConnection,
    shopping_list_id: Uuid,
) -> Result<Vec<(ListIngredient, Ingredient)>, ApiError> {
    ensure_exists(conn, shopping_list_id)?;
    Ok(list_ingredients::table
        .inner_join(ingredients::table)
        .filter(list_ingredients::shopping_list_id.eq(shopping_list_id))
        .order(ingredients::name.asc())
        .select((ListIngredient::as_select(), Ingredient::as_select()))
        .load(conn)?)
}

pub fn update_item(
    conn: &mut PgConnection,
    shopping_list_id: Uuid,
    ingredient_id: Uuid,
    changes: ListIngredientChanges,
) -> Result<ListIngredient, ApiError> {
    conn.transaction(|conn| {
        if let Some(unit_id) = changes.unit_id {
            super::units::ensure_exists(conn, unit_id)?;
        }
        diesel::update(list_ingredients::table.find((shopping_list_id, ingredient_id)))
            .set(&changes)
            .returning(ListIngredient::as_returning())
            .get_result(conn)
            .optional()?
            .ok_or_else(|| ApiError::not_found("list item"))
    })
}

pub fn remove_item(
    conn: &mut PgConnection,
    shopping_list_id: Uuid,
    ingredient_id: Uuid,
) -> Result<(), ApiError> {
    let deleted = diesel::delete(list_ingredients::table.find((shopping_list_id, ingredient_id)))
        .execute(conn)?;
    if deleted == 0 {
        return Err(ApiError::not_found("list item"));
    }
    Ok(())
}

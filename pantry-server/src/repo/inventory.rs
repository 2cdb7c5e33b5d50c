use diesel::prelude::*;
use mesa_core::ApiError;
use uuid::Uuid;

use crate::models::{Ingredient, InventoryItem, InventoryItemChanges, NewInventoryItem};
use crate::schema::{ingredients, inventory_items};

pub fn add(conn: &mut PgConnection, new: NewInventoryItem) -> Result<InventoryItem, ApiError> {
    conn.transaction(|conn| {
        super::users::ensure_exists(conn, new.user_id)?;
        super::ingredients::ensure_exists(conn, new.ingredient_id)?;
        super::units::ensure_exists(conn, new.unit_id)?;

        let already: bool = diesel::select(diesel::dsl::exists(
            inventory_items::table.find((new.user_id, new.ingredient_id)),
        ))
        .get_result(conn)?;
        if already {
            return Err(ApiError::conflict(
                "ingredient is already in this user's inventory",
            ));
        }

        Ok(diesel::insert_into(inventory_items::table)
            .values(&new)
            .returning(InventoryItem::as_returning())
            .get_result(conn)?)
    })
}

/// A user's inventory with ingredient names resolved.
pub fn list_for_user(
    conn: &mut PgConnection,
    user_id: Uuid,
) -> Result<Vec<(InventoryItem, Ingredient)>, ApiError> {
    super::users::ensure_exists(conn, user_id)?;
    Ok(inventory_items::table
        .inner_join(ingredients::table)
        .filter(inventory_items::user_id.eq(user_id))
        .order(ingredients::name.asc())
        .select((InventoryItem::as_select(), Ingredient::as_select()))
        .load(conn)?)
}

pub fn update(
    conn: &mut PgConnection,
    user_id: Uuid,
    ingredient_id: Uuid,
    changes: InventoryItemChanges,
) -> Result<InventoryItem, ApiError> {
    conn.transaction(|conn| {
        if let Some(unit_id) = changes.unit_id {
            super::units::ensure_exists(conn, unit_id)?;
        }
        diesel::update(inventory_items::table.find((user_id, ingredient_id)))
            .set(&changes)
            .returning(InventoryItem::as_returning())
            .get_result(conn)
            .optional()?
            .ok_or_else(|| ApiError::not_found("inventory item"))
    })
}

pub fn remove(conn: &mut PgConnection, user_id: Uuid, ingredient_id: Uuid) -> Result<(), ApiError> {
    let deleted =
        diesel::delete(inventory_items::table.find((user_id, ingredient_id))).execute(conn)?;
    if deleted == 0 {
        return Err(ApiError::not_found("inventory item"));
    }
    Ok(())
}

use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use mesa_core::ApiError;
use uuid::Uuid;

use crate::models::{Menu, MenuChanges, NewMenu, NewMenuRecipe, Recipe};
use crate::schema::{menu_recipes, menus, recipes};

pub fn create(conn: &mut PgConnection, new: NewMenu) -> Result<Menu, ApiError> {
    conn.transaction(|conn| {
        super::plans::ensure_exists(conn, new.plan_id)?;
        Ok(diesel::insert_into(menus::table)
            .values(&new)
            .returning(Menu::as_returning())
            .get_result(conn)?)
    })
}

pub fn get(conn: &mut PgConnection, id: Uuid) -> Result<Menu, ApiError> {
    menus::table
        .find(id)
        .select(Menu::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("menu"))
}

pub fn list_for_plan(conn: &mut PgConnection, plan_id: Uuid) -> Result<Vec<Menu>, ApiError> {
    super::plans::ensure_exists(conn, plan_id)?;
    Ok(menus::table
        .filter(menus::plan_id.eq(plan_id))
        .order((menus::menu_date.asc(), menus::name.asc()))
        .select(Menu::as_select())
        .load(conn)?)
}

pub fn update(conn: &mut PgConnection, id: Uuid, changes: MenuChanges) -> Result<Menu, ApiError> {
    diesel::update(menus::table.find(id))
        .set(&changes)
        .returning(Menu::as_returning())
        .get_result(conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("menu"))
}

pub fn delete(conn: &mut PgConnection, id: Uuid) -> Result<(), ApiError> {
    let deleted = diesel::delete(menus::table.find(id))
        .execute(conn)
        .map_err(|e| match e {
            diesel::result::Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                ApiError::conflict("menu still has linked recipes")
            }
            other => other.into(),
        })?;
    if deleted == 0 {
        return Err(ApiError::not_found("menu"));
    }
    Ok(())
}

pub fn add_recipe(conn: &mut PgConnection, menu_id: Uuid, recipe_id: Uuid) -> Result<(), ApiError> {
    conn.transaction(|conn| {
        ensure_exists(conn, menu_id)?;
        super::recipes::ensure_exists(conn, recipe_id)?;

        let already: bool = diesel::select(diesel::dsl::exists(
            menu_recipes::table.find((menu_id, recipe_id)),
        ))
        .get_result(conn)?;
        if already {
            return Err(ApiError::conflict("recipe is already on this menu"));
        }

        diesel::insert_into(menu_recipes::table)
            .values(&NewMenuRecipe { menu_id, recipe_id })
            .execute(conn)?;
        Ok(())
    })
}

pub fn list_recipes(conn: &mut PgConnection, menu_id: Uuid) -> Result<Vec<Recipe>, ApiError> {
    ensure_exists(conn, menu_id)?;
    Ok(menu_recipes::table
        .inner_join(recipes::table)
        .filter(menu_recipes::menu_id.eq(menu_id))
        .order(recipes::name.asc())
        .select(Recipe::as_select())
        .load(conn)?)
}

pub fn remove_recipe(
    conn: &mut PgConnection,
    menu_id: Uuid,
    recipe_id: Uuid,
) -> Result<(), ApiError> {
    let deleted = diesel::delete(menu_recipes::table.find((menu_id, recipe_id))).execute(conn)?;
    if deleted == 0 {
        return Err(ApiError::not_found("menu recipe link"));
    }
    Ok(())
}

pub fn ensure_exists(conn: &mut PgConnection, id: Uuid) -> Result<(), ApiError> {
    let found: bool = diesel::select(diesel::dsl::exists(menus::table.find(id))).get_result(conn)?;
    if !found {
        return Err(ApiError::not_found("menu"));
    }
    Ok(())
}

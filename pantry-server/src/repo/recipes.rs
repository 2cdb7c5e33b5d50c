use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use mesa_core::ApiError;
use uuid::Uuid;

use crate::models::{
    Category, Ingredient, NewRecipe, NewRecipeCategory, NewRecipeIngredient, NewUserRecipe, Recipe,
    RecipeChanges, RecipeIngredient, RecipeIngredientChanges, Unit, UserRecipe,
};
use crate::schema::{
    categories, ingredients, recipe_categories, recipe_ingredients, recipes, units, user_recipes,
};

/// Filters accepted by [`list`].
#[derive(Debug, Default, Clone)]
pub struct RecipeFilter {
    pub is_public: Option<bool>,
    pub difficulty: Option<String>,
    /// Case-insensitive substring match on the recipe name.
    pub q: Option<String>,
}

/// Create a recipe and its initial ownership row in one transaction: a recipe
/// never exists without at least one owner in `user_recipes`.
pub fn create(conn: &mut PgConnection, owner_id: Uuid, new: NewRecipe) -> Result<Recipe, ApiError> {
    conn.transaction(|conn| {
        super::users::ensure_exists(conn, owner_id)?;

        let recipe = diesel::insert_into(recipes::table)
            .values(&new)
            .returning(Recipe::as_returning())
            .get_result(conn)?;

        diesel::insert_into(user_recipes::table)
            .values(&NewUserRecipe {
                user_id: owner_id,
                recipe_id: recipe.id,
                is_owner: true,
            })
            .execute(conn)?;

        Ok(recipe)
    })
}

pub fn get(conn: &mut PgConnection, id: Uuid) -> Result<Recipe, ApiError> {
    recipes::table
        .find(id)
        .select(Recipe::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("recipe"))
}

pub fn list(
    conn: &mut PgConnection,
    filter: RecipeFilter,
    limit: i64,
    offset: i64,
) -> Result<(Vec<Recipe>, i64), ApiError> {
    let build = |filter: &RecipeFilter| {
        let mut query = recipes::table.into_boxed();
        if let Some(is_public) = filter.is_public {
            query = query.filter(recipes::is_public.eq(is_public));
        }
        if let Some(difficulty) = &filter.difficulty {
            query = query.filter(recipes::difficulty.eq(difficulty.clone()));
        }
        if let Some(q) = &filter.q {
            query = query.filter(recipes::name.ilike(format!("%{q}%")));
        }
        query
    };

    let total: i64 = build(&filter).count().get_result(conn)?;
    let items = build(&filter)
        .order(recipes::created_at.desc())
        .limit(limit)
        .offset(offset)
        .select(Recipe::as_select())
        .load(conn)?;
    Ok((items, total))
}

pub fn update(conn: &mut PgConnection, id: Uuid, changes: RecipeChanges) -> Result<Recipe, ApiError> {
    diesel::update(recipes::table.find(id))
        .set(&changes)
        .returning(Recipe::as_returning())
        .get_result(conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("recipe"))
}

pub fn delete(conn: &mut PgConnection, id: Uuid) -> Result<(), ApiError> {
    let deleted = diesel::delete(recipes::table.find(id))
        .execute(conn)
        .map_err(|e| match e {
            diesel::result::Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                ApiError::conflict(
                    "recipe still has dependent rows (ingredients, categories, owners or menus)",
                )
            }
            other => other.into(),
        })?;
    if deleted == 0 {
        return Err(ApiError::not_found("recipe"));
    }
    Ok(())
}

pub fn ensure_exists(conn: &mut PgConnection, id: Uuid) -> Result<(), ApiError> {
    let found: bool =
        diesel::select(diesel::dsl::exists(recipes::table.find(id))).get_result(conn)?;
    if !found {
        return Err(ApiError::not_found("recipe"));
    }
    Ok(())
}

// --- recipe_ingredients ----------------------------------------------------

pub fn add_ingredient(
    conn: &mut PgConnection,
    new: NewRecipeIngredient,
) -> Result<RecipeIngredient, ApiError> {
    conn.transaction(|conn| {
        ensure_exists(conn, new.recipe_id)?;
        super::ingredients::ensure_exists(conn, new.ingredient_id)?;
        super::units::ensure_exists(conn, new.unit_id)?;

        let already: bool = diesel::select(diesel::dsl::exists(
            recipe_ingredients::table.find((new.recipe_id, new.ingredient_id)),
        ))
        .get_result(conn)?;
        if already {
            return Err(ApiError::conflict(
                "ingredient is already part of this recipe",
            ));
        }

        Ok(diesel::insert_into(recipe_ingredients::table)
            .values(&new)
            .returning(RecipeIngredient::as_returning())
            .get_result(conn)?)
    })
}

/// A recipe's ingredient list: the join row plus the referenced ingredient and
/// unit, resolved in one query.
pub fn list_ingredients(
    conn: &mut PgConnection,
    recipe_id: Uuid,
) -> Result<Vec<(RecipeIngredient, Ingredient, Unit)>, ApiError> {
    ensure_exists(conn, recipe_id)?;
    Ok(recipe_ingredients::table
        .inner_join(ingredients::table)
        .inner_join(units::table)
        .filter(recipe_ingredients::recipe_id.eq(recipe_id))
        .order(ingredients::name.asc())
        .select((
            RecipeIngredient::as_select(),
            Ingredient::as_select(),
            Unit::as_select(),
        ))
        .load(conn)?)
}

pub fn update_ingredient(
    conn: &mut PgConnection,
    recipe_id: Uuid,
    ingredient_id: Uuid,
    changes: RecipeIngredientChanges,
) -> Result<RecipeIngredient, ApiError> {
    conn.transaction(|conn| {
        if let Some(unit_id) = changes.unit_id {
            super::units::ensure_exists(conn, unit_id)?;
        }
        diesel::update(recipe_ingredients::table.find((recipe_id, ingredient_id)))
            .set(&changes)
            .returning(RecipeIngredient::as_returning())
            .get_result(conn)
            .optional()?
            .ok_or_else(|| ApiError::not_found("recipe ingredient"))
    })
}

pub fn remove_ingredient(
    conn: &mut PgConnection,
    recipe_id: Uuid,
    ingredient_id: Uuid,
) -> Result<(), ApiError> {
    let deleted = diesel::delete(recipe_ingredients::table.find((recipe_id, ingredient_id)))
        .execute(conn)?;
    if deleted == 0 {
        return Err(ApiError::not_found("recipe ingredient"));
    }
    Ok(())
}

// --- recipe_categories -----------------------------------------------------

pub fn add_category(
    conn: &mut PgConnection,
    recipe_id: Uuid,
    category_id: Uuid,
) -> Result<(), ApiError> {
    conn.transaction(|conn| {
        ensure_exists(conn, recipe_id)?;
        super::categories::ensure_exists(conn, category_id)?;

        let already: bool = diesel::select(diesel::dsl::exists(
            recipe_categories::table.find((recipe_id, category_id)),
        ))
        .get_result(conn)?;
        if already {
            return Err(ApiError::conflict(
                "recipe is already linked to this category",
            ));
        }

        diesel::insert_into(recipe_categories::table)
            .values(&NewRecipeCategory {
                recipe_id,
                category_id,
            })
            .execute(conn)?;
        Ok(())
    })
}

pub fn list_categories(conn: &mut PgConnection, recipe_id: Uuid) -> Result<Vec<Category>, ApiError> {
    ensure_exists(conn, recipe_id)?;
    Ok(recipe_categories::table
        .inner_join(categories::table)
        .filter(recipe_categories::recipe_id.eq(recipe_id))
        .order(categories::name.asc())
        .select(Category::as_select())
        .load(conn)?)
}

pub fn remove_category(
    conn: &mut PgConnection,
    recipe_id: Uuid,
    category_id: Uuid,
) -> Result<(), ApiError> {
    let deleted = diesel::delete(recipe_categories::table.find((recipe_id, category_id)))
        .execute(conn)?;
    if deleted == 0 {
        return Err(ApiError::not_found("recipe category link"));
    }
    Ok(())
}

// --- user_recipes (ownership / sharing) ------------------------------------

pub fn add_owner(conn: &mut PgConnection, new: NewUserRecipe) -> Result<UserRecipe, ApiError> {
    conn.transaction(|conn| {
        ensure_exists(conn, new.recipe_id)?;
        super::users::ensure_exists(conn, new.user_id)?;

        let already: bool = diesel::select(diesel::dsl::exists(
            user_recipes::table.find((new.user_id, new.recipe_id)),
        ))
        .get_result(conn)?;
        if already {
            return Err(ApiError::conflict(
                "recipe is already shared with this user",
            ));
        }

        Ok(diesel::insert_into(user_recipes::table)
            .values(&new)
            .returning(UserRecipe::as_returning())
            .get_result(conn)?)
    })
}

pub fn list_owners(conn: &mut PgConnection, recipe_id: Uuid) -> Result<Vec<UserRecipe>, ApiError> {
    ensure_exists(conn, recipe_id)?;
    Ok(user_recipes::table
        .filter(user_recipes::recipe_id.eq(recipe_id))
        .order(user_recipes::user_id.asc())
        .select(UserRecipe::as_select())
        .load(conn)?)
}

pub fn update_owner(
    conn: &mut PgConnection,
    recipe_id: Uuid,
    user_id: Uuid,
    is_owner: bool,
) -> Result<UserRecipe, ApiError> {
    diesel::update(user_recipes::table.find((user_id, recipe_id)))
        .set(user_recipes::is_owner.eq(is_owner))
        .returning(UserRecipe::as_returning())
        .get_result(conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("recipe share"))
}

pub fn remove_owner(
    conn: &mut PgConnection,
    recipe_id: Uuid,
    user_id: Uuid,
) -> Result<(), ApiError> {
    let deleted =
        diesel::delete(user_recipes::table.find((user_id, recipe_id))).execute(conn)?;
    if deleted == 0 {
        return Err(ApiError::not_found("recipe share"));
    }
    Ok(())
}

/// Recipes owned by or shared with a user, with the ownership flag.
pub fn list_for_user(
    conn: &mut PgConnection,
    user_id: Uuid,
) -> Result<Vec<(Recipe, bool)>, ApiError> {
    super::users::ensure_exists(conn, user_id)?;
    Ok(user_recipes::table
        .inner_join(recipes::table)
        .filter(user_recipes::user_id.eq(user_id))
        .order(recipes::name.asc())
        .select((Recipe::as_select(), user_recipes::is_owner))
        .load(conn)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::test_support;

    fn make_recipe(conn: &mut PgConnection, owner_id: Uuid) -> Recipe {
        create(
            conn,
            owner_id,
            NewRecipe {
                name: format!("recipe-{}", test_support::nonce()),
                description: None,
                instructions: "mix and bake".to_string(),
                difficulty: Some("easy".to_string()),
                prep_time_minutes: Some(30),
                is_public: false,
            },
        )
        .expect("create recipe")
    }

    #[test]
    fn test_create_records_owner() {
        let Some(mut conn) = test_support::connection() else {
            return;
        };
        let user = test_support::make_user(&mut conn);
        let recipe = make_recipe(&mut conn, user.id);

        let owners = list_owners(&mut conn, recipe.id).unwrap();
        assert_eq!(owners.len(), 1);
        assert_eq!(owners[0].user_id, user.id);
        assert!(owners[0].is_owner);
    }

    #[test]
    fn test_create_with_missing_owner_is_not_found() {
        let Some(mut conn) = test_support::connection() else {
            return;
        };
        let err = create(
            &mut conn,
            Uuid::new_v4(),
            NewRecipe {
                name: "orphan".to_string(),
                description: None,
                instructions: "n/a".to_string(),
                difficulty: None,
                prep_time_minutes: None,
                is_public: false,
            },
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_ingredient_list_resolves_quantity_and_unit() {
        let Some(mut conn) = test_support::connection() else {
            return;
        };
        let user = test_support::make_user(&mut conn);
        let recipe = make_recipe(&mut conn, user.id);
        let ingredient = test_support::make_ingredient(&mut conn);
        let unit = test_support::make_unit(&mut conn);

        add_ingredient(
            &mut conn,
            NewRecipeIngredient {
                recipe_id: recipe.id,
                ingredient_id: ingredient.id,
                quantity: "200".to_string(),
                unit_id: unit.id,
            },
        )
        .unwrap();

        let rows = list_ingredients(&mut conn, recipe.id).unwrap();
        assert_eq!(rows.len(), 1);
        let (link, listed_ingredient, listed_unit) = &rows[0];
        assert_eq!(link.quantity, "200");
        assert_eq!(listed_ingredient.id, ingredient.id);
        assert_eq!(listed_unit.id, unit.id);
    }

    #[test]
    fn test_duplicate_recipe_ingredient_is_conflict() {
        let Some(mut conn) = test_support::connection() else {
            return;
        };
        let user = test_support::make_user(&mut conn);
        let recipe = make_recipe(&mut conn, user.id);
        let ingredient = test_support::make_ingredient(&mut conn);
        let unit = test_support::make_unit(&mut conn);

        let new = |quantity: &str| NewRecipeIngredient {
            recipe_id: recipe.id,
            ingredient_id: ingredient.id,
            quantity: quantity.to_string(),
            unit_id: unit.id,
        };

        add_ingredient(&mut conn, new("1")).unwrap();
        let err = add_ingredient(&mut conn, new("2")).unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[test]
    fn test_owner_flag_can_be_toggled() {
        let Some(mut conn) = test_support::connection() else {
            return;
        };
        let owner = test_support::make_user(&mut conn);
        let reader = test_support::make_user(&mut conn);
        let recipe = make_recipe(&mut conn, owner.id);

        add_owner(
            &mut conn,
            NewUserRecipe {
                user_id: reader.id,
                recipe_id: recipe.id,
                is_owner: false,
            },
        )
        .unwrap();

        let promoted = update_owner(&mut conn, recipe.id, reader.id, true).unwrap();
        assert!(promoted.is_owner);

        let owners = list_owners(&mut conn, recipe.id).unwrap();
        assert!(owners
            .iter()
            .all(|share| share.is_owner));

        let err = update_owner(&mut conn, recipe.id, Uuid::new_v4(), true).unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_list_filters_by_name_fragment() {
        let Some(mut conn) = test_support::connection() else {
            return;
        };
        let user = test_support::make_user(&mut conn);
        let recipe = make_recipe(&mut conn, user.id);

        let filter = RecipeFilter {
            q: Some(recipe.name[3..12].to_uppercase()),
            ..Default::default()
        };
        let (items, total) = list(&mut conn, filter, 50, 0).unwrap();
        assert!(total >= 1);
        assert!(items.iter().any(|r| r.id == recipe.id));
    }
}

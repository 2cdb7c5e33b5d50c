//! Plain record structs for every table, plus the insert and partial-update
//! shapes the repositories accept. Read models serialize straight into API
//! responses; `User` deliberately omits `password_hash` so it can never leak.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Queryable, Selectable, Debug, Clone, Serialize, ToSchema)]
#[diesel(table_name = crate::schema::roles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Role {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Insertable, Debug, Deserialize, ToSchema)]
#[diesel(table_name = crate::schema::roles)]
pub struct NewRole {
    pub name: String,
    pub description: Option<String>,
}

#[derive(AsChangeset, Debug, Default, Deserialize, ToSchema)]
#[diesel(table_name = crate::schema::roles)]
pub struct RoleChanges {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl RoleChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

#[derive(Queryable, Selectable, Debug, Clone, Serialize, ToSchema)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub profile_photo: Option<String>,
    pub account_type: String,
    pub role_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub profile_photo: Option<String>,
    pub account_type: String,
    pub role_id: Uuid,
}

#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = crate::schema::users)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub profile_photo: Option<String>,
    pub account_type: Option<String>,
    pub role_id: Option<Uuid>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password_hash.is_none()
            && self.profile_photo.is_none()
            && self.account_type.is_none()
            && self.role_id.is_none()
    }
}

#[derive(Queryable, Selectable, Debug, Clone, Serialize, ToSchema)]
#[diesel(table_name = crate::schema::groups)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Insertable, Debug, Deserialize, ToSchema)]
#[diesel(table_name = crate::schema::groups)]
pub struct NewGroup {
    pub name: String,
    pub description: Option<String>,
}

#[derive(AsChangeset, Debug, Default, Deserialize, ToSchema)]
#[diesel(table_name = crate::schema::groups)]
pub struct GroupChanges {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl GroupChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

#[derive(Queryable, Selectable, Debug, Clone, Serialize, ToSchema)]
#[diesel(table_name = crate::schema::user_groups)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserGroup {
    pub user_id: Uuid,
    pub group_id: Uuid,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::user_groups)]
pub struct NewUserGroup {
    pub user_id: Uuid,
    pub group_id: Uuid,
}

#[derive(Queryable, Selectable, Debug, Clone, Serialize, ToSchema)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Category {
    pub id: Uuid,
    pub name: String,
}

#[derive(Insertable, Debug, Deserialize, ToSchema)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategory {
    pub name: String,
}

#[derive(Queryable, Selectable, Debug, Clone, Serialize, ToSchema)]
#[diesel(table_name = crate::schema::ingredients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    pub category_id: Uuid,
}

#[derive(Insertable, Debug, Deserialize, ToSchema)]
#[diesel(table_name = crate::schema::ingredients)]
pub struct NewIngredient {
    pub name: String,
    pub category_id: Uuid,
}

#[derive(AsChangeset, Debug, Default, Deserialize, ToSchema)]
#[diesel(table_name = crate::schema::ingredients)]
pub struct IngredientChanges {
    pub name: Option<String>,
    pub category_id: Option<Uuid>,
}

impl IngredientChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.category_id.is_none()
    }
}

#[derive(Queryable, Selectable, Debug, Clone, Serialize, ToSchema)]
#[diesel(table_name = crate::schema::units)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Unit {
    pub id: Uuid,
    pub name: String,
}

#[derive(Insertable, Debug, Deserialize, ToSchema)]
#[diesel(table_name = crate::schema::units)]
pub struct NewUnit {
    pub name: String,
}

#[derive(Queryable, Selectable, Debug, Clone, Serialize, ToSchema)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub instructions: String,
    pub difficulty: Option<String>,
    pub prep_time_minutes: Option<i32>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipe {
    pub name: String,
    pub description: Option<String>,
    pub instructions: String,
    pub difficulty: Option<String>,
    pub prep_time_minutes: Option<i32>,
    pub is_public: bool,
}

#[derive(AsChangeset, Debug, Default, Deserialize, ToSchema)]
#[diesel(table_name = crate::schema::recipes)]
pub struct RecipeChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub instructions: Option<String>,
    pub difficulty: Option<String>,
    pub prep_time_minutes: Option<i32>,
    pub is_public: Option<bool>,
}

impl RecipeChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.instructions.is_none()
            && self.difficulty.is_none()
            && self.prep_time_minutes.is_none()
            && self.is_public.is_none()
    }
}

#[derive(Queryable, Selectable, Debug, Clone, Serialize, ToSchema)]
#[diesel(table_name = crate::schema::recipe_ingredients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RecipeIngredient {
    pub recipe_id: Uuid,
    pub ingredient_id: Uuid,
    pub quantity: String,
    pub unit_id: Uuid,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::recipe_ingredients)]
pub struct NewRecipeIngredient {
    pub recipe_id: Uuid,
    pub ingredient_id: Uuid,
    pub quantity: String,
    pub unit_id: Uuid,
}

#[derive(AsChangeset, Debug, Default, Deserialize, ToSchema)]
#[diesel(table_name = crate::schema::recipe_ingredients)]
pub struct RecipeIngredientChanges {
    pub quantity: Option<String>,
    pub unit_id: Option<Uuid>,
}

impl RecipeIngredientChanges {
    pub fn is_empty(&self) -> bool {
        self.quantity.is_none() && self.unit_id.is_none()
    }
}

#[derive(Queryable, Selectable, Debug, Clone, Serialize, ToSchema)]
#[diesel(table_name = crate::schema::recipe_categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RecipeCategory {
    pub recipe_id: Uuid,
    pub category_id: Uuid,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::recipe_categories)]
pub struct NewRecipeCategory {
    pub recipe_id: Uuid,
    pub category_id: Uuid,
}

#[derive(Queryable, Selectable, Debug, Clone, Serialize, ToSchema)]
#[diesel(table_name = crate::schema::user_recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRecipe {
    pub user_id: Uuid,
    pub recipe_id: Uuid,
    pub is_owner: bool,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::user_recipes)]
pub struct NewUserRecipe {
    pub user_id: Uuid,
    pub recipe_id: Uuid,
    pub is_owner: bool,
}

#[derive(Queryable, Selectable, Debug, Clone, Serialize, ToSchema)]
#[diesel(table_name = crate::schema::inventory_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct InventoryItem {
    pub user_id: Uuid,
    pub ingredient_id: Uuid,
    pub quantity: String,
    pub unit_id: Uuid,
    pub expires_on: Option<NaiveDate>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::inventory_items)]
pub struct NewInventoryItem {
    pub user_id: Uuid,
    pub ingredient_id: Uuid,
    pub quantity: String,
    pub unit_id: Uuid,
    pub expires_on: Option<NaiveDate>,
}

#[derive(AsChangeset, Debug, Default, Deserialize, ToSchema)]
#[diesel(table_name = crate::schema::inventory_items)]
pub struct InventoryItemChanges {
    pub quantity: Option<String>,
    pub unit_id: Option<Uuid>,
    pub expires_on: Option<NaiveDate>,
}

impl InventoryItemChanges {
    pub fn is_empty(&self) -> bool {
        self.quantity.is_none() && self.unit_id.is_none() && self.expires_on.is_none()
    }
}

#[derive(Queryable, Selectable, Debug, Clone, Serialize, ToSchema)]
#[diesel(table_name = crate::schema::plans)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Plan {
    pub id: Uuid,
    pub user_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub plan_type: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::plans)]
pub struct NewPlan {
    pub user_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub plan_type: String,
}

#[derive(AsChangeset, Debug, Default, Deserialize, ToSchema)]
#[diesel(table_name = crate::schema::plans)]
pub struct PlanChanges {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub plan_type: Option<String>,
}

impl PlanChanges {
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none() && self.plan_type.is_none()
    }
}

#[derive(Queryable, Selectable, Debug, Clone, Serialize, ToSchema)]
#[diesel(table_name = crate::schema::menus)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Menu {
    pub id: Uuid,
    pub plan_id: Uuid,
    pub name: String,
    pub menu_date: Option<NaiveDate>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::menus)]
pub struct NewMenu {
    pub plan_id: Uuid,
    pub name: String,
    pub menu_date: Option<NaiveDate>,
}

#[derive(AsChangeset, Debug, Default, Deserialize, ToSchema)]
#[diesel(table_name = crate::schema::menus)]
pub struct MenuChanges {
    pub name: Option<String>,
    pub menu_date: Option<NaiveDate>,
}

impl MenuChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.menu_date.is_none()
    }
}

#[derive(Queryable, Selectable, Debug, Clone, Serialize, ToSchema)]
#[diesel(table_name = crate::schema::menu_recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MenuRecipe {
    pub menu_id: Uuid,
    pub recipe_id: Uuid,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::menu_recipes)]
pub struct NewMenuRecipe {
    pub menu_id: Uuid,
    pub recipe_id: Uuid,
}

#[derive(Queryable, Selectable, Debug, Clone, Serialize, ToSchema)]
#[diesel(table_name = crate::schema::shopping_lists)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ShoppingList {
    pub id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub completed: bool,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::shopping_lists)]
pub struct NewShoppingList {
    pub user_id: Uuid,
    pub completed: bool,
}

#[derive(AsChangeset, Debug, Default, Deserialize, ToSchema)]
#[diesel(table_name = crate::schema::shopping_lists)]
pub struct ShoppingListChanges {
    pub completed: Option<bool>,
}

impl ShoppingListChanges {
    pub fn is_empty(&self) -> bool {
        self.completed.is_none()
    }
}

#[derive(Queryable, Selectable, Debug, Clone, Serialize, ToSchema)]
#[diesel(table_name = crate::schema::list_ingredients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ListIngredient {
    pub shopping_list_id: Uuid,
    pub ingredient_id: Uuid,
    pub quantity: Option<String>,
    pub unit_id: Option<Uuid>,
    pub status: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::list_ingredients)]
pub struct NewListIngredient {
    pub shopping_list_id: Uuid,
    pub ingredient_id: Uuid,
    pub quantity: Option<String>,
    pub unit_id: Option<Uuid>,
    pub status: String,
}

#[derive(AsChangeset, Debug, Default, Deserialize, ToSchema)]
#[diesel(table_name = crate::schema::list_ingredients)]
pub struct ListIngredientChanges {
    pub quantity: Option<String>,
    pub unit_id: Option<Uuid>,
    pub status: Option<String>,
}

impl ListIngredientChanges {
    pub fn is_empty(&self) -> bool {
        self.quantity.is_none() && self.unit_id.is_none() && self.status.is_none()
    }
}

#[derive(Queryable, Selectable, Debug, Clone, Serialize, ToSchema)]
#[diesel(table_name = crate::schema::notifications)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub message: String,
    pub sent_at: DateTime<Utc>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::notifications)]
pub struct NewNotification {
    pub user_id: Uuid,
    pub message: String,
}

#[derive(AsChangeset, Debug, Default, Deserialize, ToSchema)]
#[diesel(table_name = crate::schema::notifications)]
pub struct NotificationChanges {
    pub message: Option<String>,
}

impl NotificationChanges {
    pub fn is_empty(&self) -> bool {
        self.message.is_none()
    }
}

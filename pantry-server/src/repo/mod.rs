//! Explicit per-entity repository functions. Each function takes a pooled
//! connection, issues its SQL directly through diesel, and returns plain
//! record structs — no lazy loading, no hidden queries.
//!
//! Conventions:
//! - writes that touch more than one row, or that pre-check foreign keys and
//!   uniqueness, run inside a single transaction;
//! - foreign-key targets are verified before insert/update and reported as
//!   `NotFound` naming the missing parent;
//! - uniqueness is verified before insert/update and reported as `Conflict`
//!   (the database constraints remain as backstop);
//! - deleting a row that still has dependents is a `Conflict`, uniformly, via
//!   `ON DELETE RESTRICT`.

#[cfg(test)]
pub mod test_support;

pub mod categories;
pub mod groups;
pub mod ingredients;
pub mod inventory;
pub mod menus;
pub mod notifications;
pub mod plans;
pub mod recipes;
pub mod roles;
pub mod shopping_lists;
pub mod units;
pub mod users;

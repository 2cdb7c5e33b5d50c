//! Explicit per-entity repository functions. Each function takes a pooled
//! connection, issues its SQL directly through diesel, and returns plain
//! record structs — no lazy loading, no hidden queries.
//!
//! Conventions match the write-path rules: multi-step writes run in one
//! transaction, foreign-key targets are verified and reported as `NotFound`
//! naming the missing parent, uniqueness is reported as `Conflict`, and
//! deleting a row with dependents is a `Conflict` via `ON DELETE RESTRICT`.

#[cfg(test)]
pub mod test_support;

pub mod employees;
pub mod projects;
pub mod tasks;

//! Repository layer for companies and customers.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Keep SQL text inside the persistence boundary.
//!
//! # Invariants
//! - Every repository method is exactly one parameterized statement.
//! - Name-matched updates/deletes report affected rows; zero is not an error.

pub mod company_repo;
pub mod customer_repo;

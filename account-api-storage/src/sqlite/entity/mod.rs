//! `SeaORM` entities.

pub mod account;

//! SeaORM entities mirroring the relational schema.

pub mod post;
pub mod user;

//! Entity structs mapped from database rows.

pub mod employee;

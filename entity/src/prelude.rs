//! `SeaORM` Entity prelude

pub use super::student::Entity as Student;

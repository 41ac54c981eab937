//! `SeaORM` Entity definitions for the student records store

pub mod prelude;

pub mod student;

//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and run exactly one statement per
//! operation. They report expected outcomes (missing rows, no assigned ID, no affected
//! rows) through `Option`/`bool` results and reserve `DbErr` for transport failures.

pub mod student;

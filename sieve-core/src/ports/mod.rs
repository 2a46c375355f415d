// sieve-core/src/ports/mod.rs

pub mod frame;

pub use frame::{ColumnShape, NestedFrame, Projection};

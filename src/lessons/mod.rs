//! One module per lesson. Each has a matching `lesson_*` binary.

pub mod collections;
pub mod delegate;
pub mod generics;
pub mod optionals;
pub mod retain_cycle;
pub mod sets;
pub mod singleton;
pub mod value_semantics;

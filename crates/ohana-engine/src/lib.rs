pub use self::{core::*, engine::*, self_test::*};

pub mod core;
pub mod engine;
mod self_test;

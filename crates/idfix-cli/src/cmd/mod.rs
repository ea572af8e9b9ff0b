// crates/idfix-cli/src/cmd/mod.rs

pub mod check;
pub mod normalize;

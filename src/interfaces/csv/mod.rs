pub mod plan_reader;
pub mod roster_reader;

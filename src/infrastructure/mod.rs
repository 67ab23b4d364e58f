pub mod file_roster;
pub mod in_memory;

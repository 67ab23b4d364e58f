//! Application layer: the payout pipeline.
//!
//! Each stage is a pure function of the team and the fee schedule.
//! `PayoutEngine` loads a roster through its port and runs the stages in
//! order, returning a report only when the closing balance check passes.

pub mod allocation;
pub mod balance;
pub mod engine;
pub mod fees;

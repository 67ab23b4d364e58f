//! Domain layer: money, plans, the team being paid, and the roster port.

pub mod money;
pub mod payout;
pub mod plan;
pub mod ports;
pub mod team;

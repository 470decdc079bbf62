pub mod intake;
pub mod qualification;
pub mod rate_sheet;

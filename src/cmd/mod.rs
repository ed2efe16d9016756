/// Block statistics command.
pub mod stats;

pub mod aggregate;

pub use aggregate::{Contract, ContractStatus, Milestone, MilestoneStatus};

pub mod estimator;
pub mod message;

pub use estimator::{
    estimate, parse_area, ComplexityResult, PropertyType, ProposalConfiguration, ProposalError,
    Tier,
};

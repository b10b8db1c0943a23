pub mod chart;
pub mod classifier;
pub mod journal;
pub mod mood;
pub mod payment;
pub mod premium;
pub mod status;

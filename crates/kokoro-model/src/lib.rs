pub mod chart;
pub mod journal;
pub mod login;
pub mod mood;
pub mod premium;
pub mod status;
pub mod user;

pub(crate) mod journal;
pub(crate) mod premium;
pub(crate) mod status;
pub(crate) mod user;

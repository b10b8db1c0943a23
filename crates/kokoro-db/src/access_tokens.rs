mod mutation;

pub use mutation::*;

pub mod customer;
pub mod dataset;
pub mod dimension;
pub mod fx;
pub mod journal;
pub mod ledger;

pub use customer::*;
pub use dataset::*;
pub use dimension::*;
pub use fx::*;
pub use journal::*;
pub use ledger::*;

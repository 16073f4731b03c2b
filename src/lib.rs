pub mod catalog;
pub mod change;
pub mod codec;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod session;

pub mod filter;
pub mod mock;
pub mod page;
pub mod search;

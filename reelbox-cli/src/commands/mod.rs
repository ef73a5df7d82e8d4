pub(crate) mod collection;
pub(crate) mod config;
pub(crate) mod users;

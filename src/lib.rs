pub mod cli;
pub mod interact;
pub mod io;
pub mod model;
pub mod ops;
pub mod query;
pub mod store;
pub mod util;
pub mod view;

mod config;
pub use config::*;

mod sdk;
pub use sdk::*;

mod check;
pub use check::*;

mod keystore;
pub use keystore::*;

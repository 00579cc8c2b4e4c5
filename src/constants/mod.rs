mod relayer;
pub use relayer::*;

mod http_client;
pub use http_client::*;

mod keystore;
pub use keystore::*;

mod logging;
pub use logging::*;

mod transaction;
pub use transaction::*;

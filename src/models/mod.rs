mod api_response;
pub use api_response::*;

mod error;
pub use error::*;

mod health;
pub use health::*;

mod relayer;
pub use relayer::*;

mod rpc;
pub use rpc::*;

mod transaction;
pub use transaction::*;

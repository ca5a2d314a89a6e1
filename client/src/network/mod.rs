pub mod http;
pub mod mint;

pub use http::{HttpResponse, HttpTransport, TransportError, UreqTransport};
pub use mint::{MintClient, MintError, MintRequest, MintTransaction, MINT_CONTENT_TYPE};

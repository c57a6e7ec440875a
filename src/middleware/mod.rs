pub mod session;

pub use session::{parse_session, SessionClaims, SessionExtractor};

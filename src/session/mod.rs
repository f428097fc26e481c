pub mod cookie;
pub mod store;
pub mod token;

pub use cookie::{session_cookie, session_token, SESSION_COOKIE};
pub use store::SessionStore;
pub use token::generate_token_default;

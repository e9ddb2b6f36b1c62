pub mod login;
pub mod session;

pub use login::{AuthError, LoginRequest};
pub use session::{AuthSession, AuthStore};

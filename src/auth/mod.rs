pub mod error;
pub mod gate;
pub mod jwt;
pub mod password;
pub mod session;

pub use gate::{AdminGate, GateState, LoginForm};
pub use jwt::{Claim, decode_jwt, encode_jwt};
pub use password::{compute_password_hash, verify_password_hash};
pub use session::SessionRegistry;

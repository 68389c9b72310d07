//! Rate limiting logic and state management.

mod key;
mod limiter;
mod window;

pub use key::{derive_client_key, FALLBACK_ADDR};
pub use limiter::{Decision, RateLimiter};
pub use window::Window;

pub mod session;
pub mod window;

pub use session::PaginationSession;
pub use window::{PageWindow, Slot};

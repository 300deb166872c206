// Utils compartidos

pub mod telegram_ffi;
pub mod time;

pub use telegram_ffi::{TelegramButton, TelegramWebApp};
pub use time::time_since;

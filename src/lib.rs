pub mod calculator;
pub mod config;
pub mod debounce;
pub mod error;
pub mod format;
pub mod glyph;
pub mod keys;
pub mod postfix;
pub mod session;
pub mod tokenizer;
pub mod validator;

pub use calculator::compute;
pub use config::Config;
pub use error::{ErrorKind, ExprError};
pub use format::format_number;
pub use session::{ResultText, Screen, Session};

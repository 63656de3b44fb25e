//! Command implementations

mod check;
mod generate;
mod init;
mod matches;
mod resolve;

pub use check::check;
pub use generate::{GenerateArgs, generate};
pub use init::init;
pub use matches::matches;
pub use resolve::resolve;

mod chain;
mod roster;

pub use self::chain::*;
pub use self::roster::*;

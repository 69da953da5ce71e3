mod bind;
mod check;
mod info;

pub use bind::*;
pub use check::*;
pub use info::*;

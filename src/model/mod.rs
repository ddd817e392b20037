mod board;
mod membership;
mod results;
mod season;

pub use board::*;
pub use membership::*;
pub use results::*;
pub use season::*;

mod emit;
mod run;


pub use emit::*;
pub use run::run;

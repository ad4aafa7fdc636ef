pub mod lookup;

pub mod prelude {
    pub use clap::{Arg, ArgAction, ArgMatches, Command};
}

pub use self::group::*;
pub use self::roster::*;
pub use self::student::*;

mod group;
mod roster;
mod student;

pub mod concat;
pub mod flip;
pub mod info;
pub mod merge;
pub mod pad;
pub mod patch;
pub mod split;

pub use concat::*;
pub use flip::*;
pub use info::*;
pub use merge::*;
pub use pad::*;
pub use patch::*;
pub use split::*;

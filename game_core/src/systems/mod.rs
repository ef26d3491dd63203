pub mod collision;
pub mod input;
pub mod speed;

pub use collision::*;
pub use input::*;
pub use speed::*;

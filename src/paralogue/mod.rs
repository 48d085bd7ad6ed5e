mod paralogue;
pub use paralogue::{Paralogue, ParalogueCharacter};

mod chapters;
pub use chapters::{ChapterRange, ParalogueChapters, ParalogueRoute};

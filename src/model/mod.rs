pub use self::project::{Project, ProjectId};
pub use self::selection::Selection;
pub use self::session::Session;

mod project;
mod selection;
mod session;

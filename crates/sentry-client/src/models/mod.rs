pub mod organization;
pub mod project;
pub mod team;

pub use organization::Organization;
pub use project::Project;
pub use team::Team;

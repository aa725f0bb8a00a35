pub mod developer_repo;
pub mod event_repo;
pub mod gallery_repo;
pub mod project_repo;
pub mod user_repo;

pub use developer_repo::DeveloperRepo;
pub use event_repo::EventRepo;
pub use gallery_repo::GalleryRepo;
pub use project_repo::ProjectRepo;
pub use user_repo::UserRepo;

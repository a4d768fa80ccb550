pub mod auth;
pub mod companies;
pub mod experts;
pub mod notifications;
pub mod profile;

pub use auth::AuthCommands;
pub use companies::CompanyCommands;
pub use experts::ExpertCommands;
pub use notifications::NotificationCommands;
pub use profile::ProfileCommands;

pub mod auth;
pub mod companies;
pub mod dispatch;
pub mod experts;
pub mod navigate;
pub mod notifications;
pub mod options;
pub mod profile;
pub mod routes;
pub mod schema;

pub mod bookingdb;
pub mod catalogdb;
pub mod db;
pub mod messagedb;
pub mod providerdb;
pub mod reviewdb;
pub mod schema;
pub mod userdb;

pub use db::DBClient;

pub mod auth;
pub mod bookings;
pub mod messages;
pub mod providers;
pub mod reviews;
pub mod services;

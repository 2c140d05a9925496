pub mod bookingmodel;
pub mod messagemodel;
pub mod providermodel;
pub mod reviewmodel;
pub mod servicemodel;
pub mod usermodel;

pub mod auth;
pub mod customers;
pub mod genres;
pub mod movies;
pub mod rentals;
pub mod returns;
pub mod users;

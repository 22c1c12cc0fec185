//! Train roulette server.
//!
//! A web application that answers: "Which train should I take?" by finding
//! the station closest to the user, picking one of its next trains at
//! random, and sending the user to a random stop along its route.

pub mod config;
pub mod geo;
pub mod journey;
pub mod transport;
pub mod web;

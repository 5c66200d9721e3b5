//! Google Calendar gateway for schedsync.
//!
//! Talks to the Calendar v3 REST API with a bearer access token. Obtaining
//! and refreshing the token happens outside this crate; `token` only reads a
//! stored one.

mod client;
pub mod token;

pub use client::{GoogleCalendar, DEFAULT_BASE_URL};
pub use token::AccountTokens;

//! Domain rules shared by the campus server and client.

pub mod domain;

//! Core type definitions

mod canvas;
mod connection;
mod point;
mod pose;

pub use canvas::*;
pub use connection::*;
pub use point::*;
pub use pose::*;

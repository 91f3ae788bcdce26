pub mod controller;
pub mod conversation;
pub mod stdio;

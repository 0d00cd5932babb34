// src/lib.rs
//
// An animated triangle sketch: each side is drawn in turn, then the finished
// triangle is shown with its midpoints marked.

pub mod animation;
pub mod config;
pub mod models;
pub mod render;
pub mod services;

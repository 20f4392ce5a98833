//! Ports: trait boundaries between the training pipeline and its
//! collaborators.

pub mod observer;

pub use observer::Observer;

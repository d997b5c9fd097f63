//! Micro-benchmark of neural-network activation functions and their
//! derivatives across integer and floating-point representations.

pub mod activation;
pub mod bench;
pub mod domain;
pub mod numeric;

//! Secret detection detectors

pub mod regex_detector;

pub use regex_detector::*;

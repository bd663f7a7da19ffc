//! Algorithm implementations for patient triage
//!
//! This module contains the scoring and classification rules that turn
//! a self-assessment into an urgency recommendation.

pub mod triage;

//! flownet library: transport network path enumeration, usage counting
//! and OD incidence analysis.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;

//! Use-Cases der Application-Layer-Orchestrierung.

pub mod bridge;
pub mod hit_test;
pub mod identify;
pub mod map;
pub mod mode;
pub mod network_ops;
pub mod selection;
pub mod session;
pub mod trace;
pub mod view;

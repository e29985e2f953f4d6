//! Services composing `clinic_core` primitives for the handlers.

pub mod auth;

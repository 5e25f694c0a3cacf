//! Supporting utilities shared across models.

pub mod constraint;

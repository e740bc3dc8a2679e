//! Domain building blocks shared by the persistence and HTTP layers:
//! error taxonomy, DTOs, validation, and request-parameter helpers.

pub mod dto;
pub mod error;
pub mod ordering;
pub mod paging;
pub mod parameters;
pub mod roles;
pub mod shaping;
pub mod types;
pub mod validation;

//! Entity models: one struct per table row.

pub mod company;
pub mod employee;
pub mod user;

pub use company::Company;
pub use employee::Employee;
pub use user::User;

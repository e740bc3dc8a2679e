//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods whose
//! first argument is a `sqlx` executor: `&DbPool` for read-only fetches, or
//! `UnitOfWork::conn()` when the change must be committed by `save()`.

pub mod company_repo;
pub mod employee_repo;
pub mod user_repo;

pub use company_repo::CompanyRepo;
pub use employee_repo::EmployeeRepo;
pub use user_repo::UserRepo;

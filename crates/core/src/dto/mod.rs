//! Wire-facing request and response shapes.
//!
//! These are deliberately separate from the persisted entities in
//! `corpdir_db::models`; `corpdir_db::mapping` translates between the two.
//! Write shapes derive [`validator::Validate`] so the validation extractor
//! can reject a body before any service method runs.

pub mod company;
pub mod employee;
pub mod user;

pub use company::{
    CompanyCollectionForCreationDto, CompanyDto, CompanyForCreationDto, CompanyForUpdateDto,
};
pub use employee::{EmployeeDto, EmployeeForCreationDto, EmployeeForUpdateDto};
pub use user::{TokenDto, UserForAuthenticationDto, UserForRegistrationDto};

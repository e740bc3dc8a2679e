pub mod authentication;
pub mod companies;
pub mod companies_v2;
pub mod employees;
pub mod health;

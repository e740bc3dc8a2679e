//! Business operations behind the HTTP handlers.
//!
//! Each service owns a pool handle, checks that parent and target entities
//! exist, maps DTOs to entities and stages writes in a [`UnitOfWork`] that is
//! saved once per operation.
//!
//! [`UnitOfWork`]: corpdir_db::UnitOfWork

pub mod authentication;
pub mod company;
pub mod employee;

use corpdir_db::DbPool;

use crate::auth::jwt::JwtConfig;

pub use authentication::AuthenticationService;
pub use company::CompanyService;
pub use employee::EmployeeService;

/// The set of services handed to handlers through `AppState`.
pub struct ServiceManager {
    pub company: CompanyService,
    pub employee: EmployeeService,
    pub authentication: AuthenticationService,
}

impl ServiceManager {
    pub fn new(pool: DbPool, jwt: JwtConfig) -> Self {
        Self {
            company: CompanyService::new(pool.clone()),
            employee: EmployeeService::new(pool.clone()),
            authentication: AuthenticationService::new(pool, jwt),
        }
    }
}

//! Well-known role name constants.
//!
//! These must match the seed data in `20240728000002_create_roles.sql`.

pub const ROLE_ADMINISTRATOR: &str = "Administrator";
pub const ROLE_MANAGER: &str = "Manager";

/// Every role a user may be registered with.
pub const KNOWN_ROLES: &[&str] = &[ROLE_ADMINISTRATOR, ROLE_MANAGER];

/// Whether `name` is one of the seeded roles (exact match).
pub fn is_known_role(name: &str) -> bool {
    KNOWN_ROLES.contains(&name)
}

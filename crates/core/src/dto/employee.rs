use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::EntityId;

/// Read shape of an employee. The owning company is implied by the route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub id: EntityId,
    pub name: String,
    pub age: i32,
    pub position: String,
}

/// Body of `POST /companies/{companyId}/employees`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeForCreationDto {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 30,
        message = "Employee name is a required field and can't be longer than 30 characters."
    ))]
    pub name: String,

    #[serde(default)]
    #[validate(range(
        min = 18,
        message = "Age is required and it can't be lower than 18."
    ))]
    pub age: i32,

    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 20,
        message = "Position is a required field and can't be longer than 20 characters."
    ))]
    pub position: String,
}

/// Body of `PUT /companies/{companyId}/employees/{id}` and the document a
/// JSON Patch is applied to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeForUpdateDto {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 30,
        message = "Employee name is a required field and can't be longer than 30 characters."
    ))]
    pub name: String,

    #[serde(default)]
    #[validate(range(
        min = 18,
        message = "Age is required and it can't be lower than 18."
    ))]
    pub age: i32,

    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 20,
        message = "Position is a required field and can't be longer than 20 characters."
    ))]
    pub position: String,
}

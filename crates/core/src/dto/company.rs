use serde::{Deserialize, Serialize};
use validator::Validate;

use super::employee::EmployeeForCreationDto;
use crate::types::EntityId;

/// Read shape of a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDto {
    pub id: EntityId,
    pub name: String,
    pub address: String,
    pub country: String,
}

/// Body of `POST /companies` and of each item in `POST /companies/collection`.
///
/// `employees`, when present, are created together with the company.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompanyForCreationDto {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 30,
        message = "Company name is a required field and can't be longer than 30 characters."
    ))]
    pub name: String,

    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 60,
        message = "Company address is a required field and can't be longer than 60 characters."
    ))]
    pub address: String,

    #[serde(default)]
    #[validate(length(max = 30, message = "Country can't be longer than 30 characters."))]
    pub country: String,

    #[validate(nested)]
    pub employees: Option<Vec<EmployeeForCreationDto>>,
}

/// Body of `PUT /companies/{id}`.
///
/// Scalar fields replace the stored values; `employees` are added to the company.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompanyForUpdateDto {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 30,
        message = "Company name is a required field and can't be longer than 30 characters."
    ))]
    pub name: String,

    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 60,
        message = "Company address is a required field and can't be longer than 60 characters."
    ))]
    pub address: String,

    #[serde(default)]
    #[validate(length(max = 30, message = "Country can't be longer than 30 characters."))]
    pub country: String,

    #[validate(nested)]
    pub employees: Option<Vec<EmployeeForCreationDto>>,
}

/// Body of `POST /companies/collection`: a bare JSON array of companies.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(transparent)]
pub struct CompanyCollectionForCreationDto {
    #[validate(nested)]
    pub companies: Vec<CompanyForCreationDto>,
}

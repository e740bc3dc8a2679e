//! Entity <-> DTO mapping.
//!
//! Read shapes are produced with `From`; write shapes become entities through
//! the `from_*` constructors, which assign a fresh id; update shapes merge into
//! an existing entity without touching its identity or foreign key.

use corpdir_core::dto::{
    CompanyDto, CompanyForCreationDto, CompanyForUpdateDto, EmployeeDto, EmployeeForCreationDto,
    EmployeeForUpdateDto,
};
use corpdir_core::types::{new_id, EntityId};

use crate::models::{Company, Employee};

impl From<Company> for CompanyDto {
    fn from(company: Company) -> Self {
        CompanyDto {
            id: company.id,
            name: company.name,
            address: company.address,
            country: company.country,
        }
    }
}

impl From<Employee> for EmployeeDto {
    fn from(employee: Employee) -> Self {
        EmployeeDto {
            id: employee.id,
            name: employee.name,
            age: employee.age,
            position: employee.position,
        }
    }
}

impl From<&Employee> for EmployeeForUpdateDto {
    fn from(employee: &Employee) -> Self {
        EmployeeForUpdateDto {
            name: employee.name.clone(),
            age: employee.age,
            position: employee.position.clone(),
        }
    }
}

impl Company {
    /// New company from a creation body. Nested employees are mapped separately.
    pub fn from_creation(dto: &CompanyForCreationDto) -> Self {
        Company {
            id: new_id(),
            name: dto.name.clone(),
            address: dto.address.clone(),
            country: dto.country.clone(),
        }
    }

    pub fn apply_update(&mut self, dto: &CompanyForUpdateDto) {
        self.name = dto.name.clone();
        self.address = dto.address.clone();
        self.country = dto.country.clone();
    }
}

impl Employee {
    pub fn from_creation(dto: &EmployeeForCreationDto, company_id: EntityId) -> Self {
        Employee {
            id: new_id(),
            name: dto.name.clone(),
            age: dto.age,
            position: dto.position.clone(),
            company_id,
        }
    }

    /// Merge an update (or patched) body into this employee.
    pub fn apply_update(&mut self, dto: &EmployeeForUpdateDto) {
        self.name = dto.name.clone();
        self.age = dto.age;
        self.position = dto.position.clone();
    }
}

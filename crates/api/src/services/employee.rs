use corpdir_core::dto::{EmployeeDto, EmployeeForCreationDto, EmployeeForUpdateDto};
use corpdir_core::error::CoreError;
use corpdir_core::paging::PagedList;
use corpdir_core::parameters::EmployeeParameters;
use corpdir_core::types::EntityId;
use corpdir_db::models::Employee;
use corpdir_db::repositories::{CompanyRepo, EmployeeRepo};
use corpdir_db::{Db, DbPool, UnitOfWork};
use sqlx::Executor;

use crate::error::{AppError, AppResult};

pub struct EmployeeService {
    pool: DbPool,
}

impl EmployeeService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// One page of a company's employees.
    pub async fn get_employees(
        &self,
        company_id: EntityId,
        params: &EmployeeParameters,
    ) -> AppResult<PagedList<EmployeeDto>> {
        if !params.valid_age_range() {
            return Err(AppError::bad_request("Max age can't be less than min age."));
        }

        ensure_company_exists(&self.pool, company_id).await?;
        let (items, total) = EmployeeRepo::list_for_company(&self.pool, company_id, params).await?;

        Ok(
            PagedList::new(items, total, params.page_number(), params.page_size())
                .map(EmployeeDto::from),
        )
    }

    pub async fn get_employee(&self, company_id: EntityId, id: EntityId) -> AppResult<EmployeeDto> {
        ensure_company_exists(&self.pool, company_id).await?;
        let employee = find_employee(&self.pool, company_id, id).await?;
        Ok(employee.into())
    }

    pub async fn create_for_company(
        &self,
        company_id: EntityId,
        dto: &EmployeeForCreationDto,
    ) -> AppResult<EmployeeDto> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;
        ensure_company_exists(uow.conn(), company_id).await?;

        let mut employee = Employee::from_creation(dto, company_id);
        EmployeeRepo::create_for_company(uow.conn(), company_id, &mut employee).await?;
        uow.save().await?;

        tracing::info!(%company_id, employee_id = %employee.id, "Employee created");
        Ok(employee.into())
    }

    pub async fn delete_for_company(&self, company_id: EntityId, id: EntityId) -> AppResult<()> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;
        ensure_company_exists(uow.conn(), company_id).await?;
        let employee = find_employee(uow.conn(), company_id, id).await?;

        EmployeeRepo::delete(uow.conn(), &employee).await?;
        uow.save().await?;

        tracing::info!(%company_id, employee_id = %id, "Employee deleted");
        Ok(())
    }

    pub async fn update_for_company(
        &self,
        company_id: EntityId,
        id: EntityId,
        dto: &EmployeeForUpdateDto,
    ) -> AppResult<()> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;
        ensure_company_exists(uow.conn(), company_id).await?;
        let mut employee = find_employee(uow.conn(), company_id, id).await?;

        employee.apply_update(dto);
        EmployeeRepo::update(uow.conn(), &employee).await?;
        uow.save().await?;

        tracing::info!(%company_id, employee_id = %id, "Employee updated");
        Ok(())
    }

    /// First half of a partial update: the patchable shape plus the entity it
    /// came from, which is handed back to [`EmployeeService::apply_patch`].
    pub async fn load_for_patch(
        &self,
        company_id: EntityId,
        id: EntityId,
    ) -> AppResult<(EmployeeForUpdateDto, Employee)> {
        ensure_company_exists(&self.pool, company_id).await?;
        let employee = find_employee(&self.pool, company_id, id).await?;
        Ok((EmployeeForUpdateDto::from(&employee), employee))
    }

    /// Second half of a partial update: merge the patched shape and save.
    pub async fn apply_patch(
        &self,
        patched: &EmployeeForUpdateDto,
        mut employee: Employee,
    ) -> AppResult<()> {
        employee.apply_update(patched);

        let mut uow = UnitOfWork::begin(&self.pool).await?;
        if !EmployeeRepo::update(uow.conn(), &employee).await? {
            return Err(CoreError::employee_not_found(employee.id).into());
        }
        uow.save().await?;

        tracing::info!(company_id = %employee.company_id, employee_id = %employee.id, "Employee patched");
        Ok(())
    }
}

async fn ensure_company_exists<'e, E>(executor: E, company_id: EntityId) -> AppResult<()>
where
    E: Executor<'e, Database = Db>,
{
    CompanyRepo::find_by_id(executor, company_id)
        .await?
        .map(|_| ())
        .ok_or_else(|| CoreError::company_not_found(company_id).into())
}

async fn find_employee<'e, E>(executor: E, company_id: EntityId, id: EntityId) -> AppResult<Employee>
where
    E: Executor<'e, Database = Db>,
{
    EmployeeRepo::find_for_company(executor, company_id, id)
        .await?
        .ok_or_else(|| CoreError::employee_not_found(id).into())
}

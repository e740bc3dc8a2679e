use corpdir_core::dto::{CompanyDto, CompanyForCreationDto, CompanyForUpdateDto};
use corpdir_core::error::CoreError;
use corpdir_core::types::EntityId;
use corpdir_db::models::{Company, Employee};
use corpdir_db::repositories::{CompanyRepo, EmployeeRepo};
use corpdir_db::{DbConnection, DbPool, UnitOfWork};

use crate::error::{AppError, AppResult};

pub struct CompanyService {
    pool: DbPool,
}

impl CompanyService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn get_all(&self) -> AppResult<Vec<CompanyDto>> {
        let companies = CompanyRepo::list(&self.pool).await?;
        Ok(companies.into_iter().map(CompanyDto::from).collect())
    }

    pub async fn get(&self, id: EntityId) -> AppResult<CompanyDto> {
        let company = CompanyRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| CoreError::company_not_found(id))?;
        Ok(company.into())
    }

    /// Create a company together with any nested employees.
    pub async fn create(&self, dto: &CompanyForCreationDto) -> AppResult<CompanyDto> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;
        let company = stage_company(uow.conn(), dto).await?;
        uow.save().await?;

        tracing::info!(company_id = %company.id, name = %company.name, "Company created");
        Ok(company.into())
    }

    /// Fetch exactly the companies named by `ids`.
    pub async fn get_by_ids(&self, ids: &[EntityId]) -> AppResult<Vec<CompanyDto>> {
        if ids.is_empty() {
            return Err(AppError::bad_request("Parameter ids is null"));
        }

        let companies = CompanyRepo::find_by_ids(&self.pool, ids).await?;
        if companies.len() != ids.len() {
            return Err(AppError::bad_request(
                "Collection count mismatch comparing to ids.",
            ));
        }
        Ok(companies.into_iter().map(CompanyDto::from).collect())
    }

    /// Create every company in one transaction.
    ///
    /// Returns the created companies and their comma-joined ids, in input order.
    pub async fn create_collection(
        &self,
        dtos: &[CompanyForCreationDto],
    ) -> AppResult<(Vec<CompanyDto>, String)> {
        if dtos.is_empty() {
            return Err(AppError::bad_request(
                "Company collection sent from a client is null.",
            ));
        }

        let mut uow = UnitOfWork::begin(&self.pool).await?;
        let mut created = Vec::with_capacity(dtos.len());
        for dto in dtos {
            created.push(stage_company(uow.conn(), dto).await?);
        }
        uow.save().await?;

        let ids = created
            .iter()
            .map(|c| c.id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        tracing::info!(count = created.len(), "Company collection created");

        Ok((created.into_iter().map(CompanyDto::from).collect(), ids))
    }

    /// Delete a company and, by cascade, its employees.
    pub async fn delete(&self, id: EntityId) -> AppResult<()> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;
        let company = CompanyRepo::find_by_id(uow.conn(), id)
            .await?
            .ok_or_else(|| CoreError::company_not_found(id))?;
        CompanyRepo::delete(uow.conn(), &company).await?;
        uow.save().await?;

        tracing::info!(company_id = %id, "Company deleted");
        Ok(())
    }

    /// Replace the company's fields and add any employees in the body.
    pub async fn update(&self, id: EntityId, dto: &CompanyForUpdateDto) -> AppResult<()> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;
        let mut company = CompanyRepo::find_by_id(uow.conn(), id)
            .await?
            .ok_or_else(|| CoreError::company_not_found(id))?;

        company.apply_update(dto);
        CompanyRepo::update(uow.conn(), &company).await?;
        for employee in dto.employees.iter().flatten() {
            let mut employee = Employee::from_creation(employee, company.id);
            EmployeeRepo::create_for_company(uow.conn(), company.id, &mut employee).await?;
        }
        uow.save().await?;

        tracing::info!(company_id = %id, "Company updated");
        Ok(())
    }
}

async fn stage_company(
    conn: &mut DbConnection,
    dto: &CompanyForCreationDto,
) -> Result<Company, sqlx::Error> {
    let company = Company::from_creation(dto);
    CompanyRepo::create(&mut *conn, &company).await?;
    for employee in dto.employees.iter().flatten() {
        let mut employee = Employee::from_creation(employee, company.id);
        EmployeeRepo::create_for_company(&mut *conn, company.id, &mut employee).await?;
    }
    Ok(company)
}

//! Companies command - company record management.

use common::AppResult;
use domain::{CreateCompany, UpdateCompany};

use crate::cli::args::{CompaniesAction, CompaniesArgs};
use crate::cli::OutputFormat;
use crate::container::Services;
use crate::output;

/// Execute the companies command
pub async fn execute(
    args: CompaniesArgs,
    services: &Services,
    format: OutputFormat,
) -> AppResult<()> {
    let companies = services.companies();

    match args.action {
        CompaniesAction::Create {
            name,
            fantasy_name,
            document,
            email,
            phone,
            address,
            logo,
            website,
        } => {
            let input = CreateCompany {
                name,
                fantasy_name,
                document,
                email,
                phone,
                address,
                logo,
                website,
            };
            let company = companies.create_company(input).await?;
            output::company(company, format)
        }
        CompaniesAction::List { with_deleted } => {
            output::companies(companies.list_companies(with_deleted).await?, format)
        }
        CompaniesAction::Get { id } => output::company(companies.get_company(id).await?, format),
        CompaniesAction::Update {
            id,
            name,
            fantasy_name,
            email,
            phone,
            address,
            logo,
            website,
        } => {
            let changes = UpdateCompany {
                name,
                fantasy_name,
                email,
                phone,
                address,
                logo,
                website,
            };
            output::company(companies.update_company(id, changes).await?, format)
        }
        CompaniesAction::Delete { id } => {
            companies.delete_company(id).await?;
            println!("Deleted company {id}");
            Ok(())
        }
    }
}

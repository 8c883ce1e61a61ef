use clap::Parser;
use dotenv::dotenv;
use tracing::warn;

use crate::{
    cli::command::{Cli, Commands},
    domain::contact::{Contact, ContactDraft},
    domain::service::ContactService,
    errors::AppError,
    format::format_phone,
    storage::{self, ContactStore, StorageMedium, stores::CsvStorage},
    validation::{name_requirement, phone_requirement, validate_name, validate_phone},
};

pub async fn run_app() -> Result<(), AppError> {
    // .env must be loaded before clap resolves env-backed flags
    dotenv().ok();
    let cli = Cli::parse();

    let medium = StorageMedium::from(&cli.storage_choice)?;
    let store = storage::open_store(Some(medium))?;
    let service = ContactService::new(store)?.with_renderer(render_contacts);

    match cli.command {
        Commands::Add { name, phone } => {
            let draft = checked_draft(&name, &phone)?;
            service.add_contact(draft).await?;

            println!("Contact added successfully");
            Ok(())
        }

        Commands::List => {
            render_contacts(&service.load()?);
            Ok(())
        }

        Commands::Edit { id, name, phone } => {
            let contacts = service.load()?;
            let current = contacts
                .iter()
                .find(|c| c.id == id)
                .ok_or(AppError::NotFound("Contact".to_string()))?;

            // Omitted fields keep their current values; the stored phone is
            // already canonical and passes validation again unchanged
            let new_name = name.unwrap_or(current.name.clone());
            let new_phone = phone.unwrap_or(current.phone.clone());

            let draft = checked_draft(&new_name, &new_phone)?;
            service.update_contact(id, draft.name, draft.phone).await?;

            println!("Contact updated successfully");
            Ok(())
        }

        Commands::Delete { id } => {
            service.delete_contact(id).await?;

            println!("Contact deleted successfully");
            Ok(())
        }

        Commands::Import { src } => {
            // Import format is the export format: id,name,phone. Rows are
            // replayed through the full add path, so they are revalidated,
            // reformatted and assigned fresh ids.
            let csv = CsvStorage::new(src.as_deref(), None)?;
            let rows = csv.load()?;

            let mut imported = 0;
            for row in rows {
                let draft = match checked_draft(&row.name, &row.phone) {
                    Ok(draft) => draft,
                    Err(e) => {
                        warn!(name = %row.name, "skipping invalid row: {}", e);
                        continue;
                    }
                };

                match service.add_contact(draft).await {
                    Ok(_) => imported += 1,
                    Err(AppError::DuplicatePhone(phone)) => {
                        warn!(%phone, "skipping duplicate phone");
                    }
                    Err(e) => return Err(e),
                }
            }

            println!("Imported {} contacts", imported);
            Ok(())
        }

        Commands::Export { des } => {
            let csv = CsvStorage::new(None, des.as_deref())?;
            let contacts = service.load()?;
            csv.save(&contacts)?;

            println!("Exported {} contacts to {}", contacts.len(), csv.dest);
            Ok(())
        }
    }
}

/// Validator then Formatter, in that order; the service only ever sees
/// canonical drafts.
fn checked_draft(name: &str, phone: &str) -> Result<ContactDraft, AppError> {
    let name = name.trim();

    if !validate_name(name) {
        return Err(AppError::InvalidName(name_requirement()));
    }

    if !validate_phone(phone)? {
        return Err(AppError::InvalidPhone(phone_requirement()));
    }

    Ok(ContactDraft::new(name, format_phone(phone)))
}

fn render_contacts(contacts: &[Contact]) {
    if contacts.is_empty() {
        println!("No contacts found");
        return;
    }

    for (mut i, c) in contacts.iter().enumerate() {
        i += 1;
        println!("{i:>3}. {:<20} {:<16} (id {})", c.name, c.phone, c.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_draft_trims_and_formats() -> Result<(), AppError> {
        let draft = checked_draft("  Alice  ", "+91-9876543210")?;

        assert_eq!(draft.name, "Alice");
        assert_eq!(draft.phone, "+91 9876543210");
        Ok(())
    }

    #[test]
    fn checked_draft_rejects_short_name() {
        let err = checked_draft("A", "9876543210");
        assert!(matches!(err, Err(AppError::InvalidName(_))));
    }

    #[test]
    fn checked_draft_rejects_bad_phone() {
        let err = checked_draft("Alice", "5876543210");
        assert!(matches!(err, Err(AppError::InvalidPhone(_))));
    }

    #[test]
    fn canonical_phone_revalidates_unchanged() -> Result<(), AppError> {
        // Edit keeps the stored canonical phone when --phone is omitted;
        // it must pass the validator and formatter untouched
        let draft = checked_draft("Alice", "+91 9876543210")?;
        assert_eq!(draft.phone, "+91 9876543210");
        Ok(())
    }
}

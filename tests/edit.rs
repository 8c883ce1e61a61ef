use dialdex::prelude::*;
use dialdex::storage::stores::MemStorage;

async fn seeded_service() -> Result<ContactService, AppError> {
    let service = ContactService::new(Box::new(MemStorage::new()))?;

    service
        .add_contact(ContactDraft::new("Alice", format_phone("9876543210")))
        .await?;
    service
        .add_contact(ContactDraft::new("Bob", format_phone("8765432109")))
        .await?;

    Ok(service)
}

#[tokio::test(start_paused = true)]
async fn update_to_another_contacts_phone_fails() -> Result<(), AppError> {
    let service = seeded_service().await?;
    let before = service.load()?;
    let bob = before[1].id;

    let result = service
        .update_contact(bob, "Bob".to_string(), "+91 9876543210".to_string())
        .await;

    assert!(matches!(result, Err(AppError::DuplicatePhone(_))));
    assert_eq!(service.load()?, before, "failed update must change nothing");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn update_to_own_unchanged_phone_succeeds() -> Result<(), AppError> {
    let service = seeded_service().await?;
    let alice = service.load()?[0].id;

    let contacts = service
        .update_contact(alice, "Alice Kumar".to_string(), "+91 9876543210".to_string())
        .await?;

    assert_eq!(contacts[0].name, "Alice Kumar");
    assert_eq!(contacts[0].phone, "+91 9876543210");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn update_replaces_in_place_keeping_position_and_id() -> Result<(), AppError> {
    let service = seeded_service().await?;
    let before = service.load()?;
    let alice = before[0].id;

    let contacts = service
        .update_contact(alice, "Asha".to_string(), "+91 7654321098".to_string())
        .await?;

    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].id, alice, "id must survive the update");
    assert_eq!(contacts[0].name, "Asha");
    assert_eq!(contacts[1], before[1], "other entries untouched");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn update_of_absent_id_leaves_collection_unchanged() -> Result<(), AppError> {
    let service = seeded_service().await?;
    let before = service.load()?;

    let contacts = service
        .update_contact(42, "Ghost".to_string(), "+91 7000000000".to_string())
        .await?;

    assert_eq!(contacts, before);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn freed_phone_is_reusable_after_update() -> Result<(), AppError> {
    let service = seeded_service().await?;
    let alice = service.load()?[0].id;

    // Alice moves to a new number, the old one becomes free
    service
        .update_contact(alice, "Alice".to_string(), "+91 7654321098".to_string())
        .await?;

    let contacts = service
        .add_contact(ContactDraft::new("Charu", format_phone("9876543210")))
        .await?;

    assert_eq!(contacts.len(), 3);
    Ok(())
}

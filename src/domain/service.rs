use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::sleep;
use tracing::info;

use super::contact::{Contact, ContactDraft, ContactId, IdGenerator};
use crate::errors::AppError;
use crate::storage::ContactStore;

// Simulated round-trip latency, matching the remote-call contract the
// store will grow into once it stops being local.
const ADD_LATENCY: Duration = Duration::from_millis(300);
const DELETE_LATENCY: Duration = Duration::from_millis(200);
const UPDATE_LATENCY: Duration = Duration::from_millis(150);

pub type RenderFn = Box<dyn Fn(&[Contact]) + Send + Sync>;

/// Orchestrates create/update/delete against the store.
///
/// The service trusts its callers to have validated and formatted candidate
/// data; the one business rule it owns is phone uniqueness. Every
/// read-modify-write runs behind a single-writer gate so two in-flight
/// mutations cannot both pass the duplicate check.
pub struct ContactService {
    store: Box<dyn ContactStore>,
    ids: IdGenerator,
    write_gate: Mutex<()>,
    renderer: Option<RenderFn>,
}

impl ContactService {
    pub fn new(store: Box<dyn ContactStore>) -> Result<Self, AppError> {
        let highest = store.load()?.iter().map(|c| c.id).max().unwrap_or(0);

        Ok(Self {
            store,
            ids: IdGenerator::starting_after(highest),
            write_gate: Mutex::new(()),
            renderer: None,
        })
    }

    /// Registers the callback invoked with the full collection after every
    /// successful mutation.
    pub fn with_renderer(mut self, render: impl Fn(&[Contact]) + Send + Sync + 'static) -> Self {
        self.renderer = Some(Box::new(render));
        self
    }

    /// The initial-render read. Storage access is synchronous and local.
    pub fn load(&self) -> Result<Vec<Contact>, AppError> {
        self.store.load()
    }

    pub async fn add_contact(&self, draft: ContactDraft) -> Result<Vec<Contact>, AppError> {
        sleep(ADD_LATENCY).await;

        let _guard = self.write_gate.lock().await;
        let mut contacts = self.store.load()?;

        if contacts.iter().any(|c| c.phone == draft.phone) {
            return Err(AppError::DuplicatePhone(draft.phone));
        }

        let contact = Contact {
            id: self.ids.next(),
            name: draft.name,
            phone: draft.phone,
        };
        info!(id = contact.id, "adding contact");

        contacts.push(contact);
        self.store.save(&contacts)?;
        self.notify(&contacts);
        Ok(contacts)
    }

    /// Removes the contact with the given id. Deleting an id that is not
    /// present is not an error; the collection is simply left as it was.
    pub async fn delete_contact(&self, id: ContactId) -> Result<Vec<Contact>, AppError> {
        sleep(DELETE_LATENCY).await;

        let _guard = self.write_gate.lock().await;
        let mut contacts = self.store.load()?;

        contacts.retain(|c| c.id != id);
        info!(id, "deleted contact");

        self.store.save(&contacts)?;
        self.notify(&contacts);
        Ok(contacts)
    }

    /// Rewrites the name and phone of the contact with the given id, in
    /// place; position and id are preserved. A phone already held by a
    /// *different* contact is rejected, so updating a contact to its own
    /// unchanged number succeeds. An absent id leaves the collection as is.
    pub async fn update_contact(
        &self,
        id: ContactId,
        new_name: String,
        new_phone: String,
    ) -> Result<Vec<Contact>, AppError> {
        sleep(UPDATE_LATENCY).await;

        let _guard = self.write_gate.lock().await;
        let mut contacts = self.store.load()?;

        if contacts.iter().any(|c| c.id != id && c.phone == new_phone) {
            return Err(AppError::DuplicatePhone(new_phone));
        }

        if let Some(contact) = contacts.iter_mut().find(|c| c.id == id) {
            contact.name = new_name;
            contact.phone = new_phone;
            info!(id, "updated contact");
        }

        self.store.save(&contacts)?;
        self.notify(&contacts);
        Ok(contacts)
    }

    fn notify(&self, contacts: &[Contact]) {
        if let Some(render) = &self.renderer {
            render(contacts);
        }
    }
}

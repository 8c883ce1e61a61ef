pub use crate::cli::{command, run_app};
pub use crate::domain::contact::{Contact, ContactDraft, ContactId, IdGenerator};
pub use crate::domain::service::ContactService;
pub use crate::errors::AppError;
pub use crate::format::format_phone;
pub use crate::storage::{self, ContactStore, StorageMedium, open_store, stores};
pub use crate::validation::{validate_name, validate_phone};

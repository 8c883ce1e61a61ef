pub mod stores;

use dotenv::dotenv;
use std::fs;
use std::path::Path;

use crate::domain::contact::Contact;
use crate::errors::AppError;

pub trait ContactStore: Send + Sync {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn medium(&self) -> &str;
}

#[derive(Debug)]
pub enum StorageMedium {
    Json,
    Mem,
}

impl StorageMedium {
    pub fn is_json(&self) -> bool {
        matches!(self, StorageMedium::Json)
    }

    pub fn is_mem(&self) -> bool {
        matches!(self, StorageMedium::Mem)
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str {
            "json" => Ok(StorageMedium::Json),
            "mem" => Ok(StorageMedium::Mem),
            _ => Err(AppError::Validation(
                "Not a recognized storage medium".to_string(),
            )),
        }
    }
}

pub fn open_store(medium: Option<StorageMedium>) -> Result<Box<dyn ContactStore>, AppError> {
    let medium = match medium {
        Some(medium) => medium,
        None => {
            dotenv().ok();

            let choice = std::env::var("STORAGE_CHOICE").unwrap_or("json".to_string());
            StorageMedium::from(&choice)?
        }
    };

    match medium {
        StorageMedium::Json => Ok(Box::new(stores::JsonStorage::new())),
        StorageMedium::Mem => Ok(Box::new(stores::MemStorage::new())),
    }
}

pub fn create_file_parent(path: &str) -> Result<(), AppError> {
    let path = Path::new(path);

    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

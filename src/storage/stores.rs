use super::*;

use csv::{Reader, Writer};
use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use std::{env, fs};
use tracing::debug;

/// File-backed store holding the whole collection as one JSON array.
/// Loads and saves are whole-file; there is no partial update.
pub struct JsonStorage {
    pub medium: String,
    pub path: String,
}

impl JsonStorage {
    pub fn new() -> Self {
        Self {
            medium: "json".to_string(),
            path: env::var("JSON_STORAGE_PATH").unwrap_or("./.instance/contacts.json".to_string()),
        }
    }

    pub fn at(path: &str) -> Self {
        Self {
            medium: "json".to_string(),
            path: path.to_string(),
        }
    }
}

impl Default for JsonStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for JsonStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        if !fs::exists(Path::new(&self.path))? {
            return Ok(Vec::new());
        }

        let mut file = OpenOptions::new().read(true).open(&self.path)?;

        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        let contacts: Vec<Contact> = serde_json::from_str(&data)?;
        debug!(count = contacts.len(), path = %self.path, "loaded contacts");
        Ok(contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        let path = Path::new(&self.path);
        if !path.exists() {
            create_file_parent(&self.path)?;
        }

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;

        let json_contacts = serde_json::to_string(&contacts)?;
        file.write_all(json_contacts.as_bytes())?;

        debug!(count = contacts.len(), path = %self.path, "saved contacts");
        Ok(())
    }

    fn medium(&self) -> &str {
        &self.medium
    }
}

/// Volatile store for tests and `STORAGE_CHOICE=mem` runs. The trait takes
/// `&self` on save, hence the interior mutex.
pub struct MemStorage {
    pub medium: String,
    data: Mutex<Vec<Contact>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            medium: "mem".to_string(),
            data: Mutex::new(Vec::new()),
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for MemStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        let data = self.data.lock()?;
        Ok(data.clone())
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        let mut data = self.data.lock()?;
        *data = contacts.to_vec();
        Ok(())
    }

    fn medium(&self) -> &str {
        &self.medium
    }
}

/// Import/export medium. Not selectable as the main store; the CLI replays
/// imported rows through the service so they get the same validation,
/// formatting and duplicate checks as hand-entered contacts.
pub struct CsvStorage {
    pub medium: String,
    pub src: String,
    pub dest: String,
}

impl CsvStorage {
    pub fn new(src: Option<&str>, dest: Option<&str>) -> Result<Self, AppError> {
        let mut dest = dest.map(|s| s.to_string());

        if let Some(path) = &dest {
            let mut file_path = PathBuf::from(path);

            if file_path.is_dir() {
                file_path = file_path.join("exported.csv");
                dest = file_path.to_str().map(|s| s.to_string());
            } else if file_path.extension().is_some_and(|ext| ext != "csv") {
                return Err(AppError::Validation(
                    "Export file must be a .csv file".to_string(),
                ));
            }
        }

        Ok(Self {
            medium: "csv".to_string(),
            src: src.unwrap_or("./csv/contacts.csv").to_string(),
            dest: dest.unwrap_or("./csv/exported.csv".to_string()),
        })
    }
}

impl ContactStore for CsvStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        let file_path = PathBuf::from(&self.src);

        if !file_path.exists() {
            return Err(AppError::NotFound("CSV file".to_string()));
        }

        if file_path.extension().is_some_and(|ext| ext != "csv") {
            return Err(AppError::Validation("File not .csv".to_string()));
        }

        let mut reader = Reader::from_path(&file_path)?;

        let mut contacts = Vec::new();
        for result in reader.deserialize() {
            let record: Contact = result?;
            contacts.push(record);
        }

        Ok(contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        let file_path = PathBuf::from(&self.dest);

        if !file_path.exists()
            && let Some(dest) = file_path.to_str()
        {
            create_file_parent(dest)?;
        }

        let mut writer = Writer::from_path(&file_path)?;

        for contact in contacts {
            writer.serialize(contact)?;
        }

        writer.flush()?;

        Ok(())
    }

    fn medium(&self) -> &str {
        &self.medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: i64, name: &str, phone: &str) -> Contact {
        Contact {
            id,
            name: name.to_string(),
            phone: phone.to_string(),
        }
    }

    #[test]
    fn json_store_returns_empty_for_missing_file() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("contacts.json");
        let store = JsonStorage::at(path.to_str().unwrap());

        assert!(store.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn json_store_returns_empty_for_empty_file() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("contacts.json");
        fs::write(&path, "")?;
        let store = JsonStorage::at(path.to_str().unwrap());

        assert!(store.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn json_store_persists_insertion_order() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested/dir/contacts.json");
        let store = JsonStorage::at(path.to_str().unwrap());

        let contacts = vec![
            sample(2, "Bina", "+91 9876543210"),
            sample(1, "Arjun", "+91 6000000000"),
        ];
        store.save(&contacts)?;

        assert_eq!(store.load()?, contacts);
        Ok(())
    }

    #[test]
    fn json_store_writes_a_plain_array() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("contacts.json");
        let store = JsonStorage::at(path.to_str().unwrap());

        store.save(&[sample(5, "Chitra", "+91 7000000000")])?;

        let raw = fs::read_to_string(&path)?;
        assert!(raw.starts_with('['), "expected a JSON array, got: {raw}");
        assert!(raw.contains(r#""id":5"#));
        Ok(())
    }

    #[test]
    fn mem_store_round_trips() -> Result<(), AppError> {
        let store = MemStorage::new();
        let contacts = vec![sample(1, "Dev", "+91 9000000000")];

        store.save(&contacts)?;
        assert_eq!(store.load()?, contacts);
        Ok(())
    }

    #[test]
    fn csv_round_trip_keeps_fields() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("contacts.csv");
        let path_str = path.to_str().unwrap();

        let out = CsvStorage::new(None, Some(path_str))?;
        let contacts = vec![
            sample(1, "Esha", "+91 8000000000"),
            sample(2, "Farid", "+91 9876501234"),
        ];
        out.save(&contacts)?;

        let back = CsvStorage::new(Some(path_str), None)?.load()?;
        assert_eq!(back, contacts);
        Ok(())
    }

    #[test]
    fn csv_export_rejects_non_csv_destination() {
        let err = CsvStorage::new(None, Some("./contacts.txt"));
        assert!(matches!(err, Err(AppError::Validation(_))));
    }
}

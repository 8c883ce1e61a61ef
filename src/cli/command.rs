use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "dialdex", version, about = "Contact book for Indian phone numbers")]
pub struct Cli {
    /// Storage choice (json, mem) are available
    #[arg(long, env = "STORAGE_CHOICE", default_value_t = String::from("json"))]
    pub storage_choice: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number (any accepted Indian format)
        #[arg(long)]
        phone: String,
    },

    /// List contacts
    List,

    /// Edit an existing contact by id
    /// Omitted fields keep their current value
    Edit {
        /// Id of the contact to edit
        #[arg(long)]
        id: i64,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New phone number
        #[arg(long)]
        phone: Option<String>,
    },

    /// Delete a contact by id
    Delete {
        /// Id of the contact to delete
        #[arg(long)]
        id: i64,
    },

    /// Import contacts from a .csv file
    Import {
        /// File path to the source .csv file
        #[arg(short, long)]
        src: Option<String>,
    },

    /// Export contacts to a .csv file
    Export {
        /// File path to the destination location for export file
        #[arg(short, long)]
        des: Option<String>,
    },
}

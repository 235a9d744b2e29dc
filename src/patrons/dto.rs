use serde::{Deserialize, Serialize};
use crate::core::library::{FieldValue, LibraryError};
use crate::patrons::domain::Patron;

pub const MEMBER_ID_FIELD: &str = "memberID";

// PatronRecord is the flat document persisted for every patron.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PatronRecord {
    #[serde(rename = "fname")]
    pub first_name: String,
    #[serde(rename = "lname")]
    pub last_name: String,
    pub age: FieldValue,
    #[serde(rename = "memberID")]
    pub member_id: FieldValue,
    #[serde(default)]
    pub borrowed_books: Vec<String>,
}

impl From<&Patron> for PatronRecord {
    fn from(other: &Patron) -> Self {
        Self {
            first_name: other.first_name().to_string(),
            last_name: other.last_name().to_string(),
            age: other.age().clone(),
            member_id: other.member_id().clone(),
            borrowed_books: other.borrowed_books().to_vec(),
        }
    }
}

// Stored records go through the validating constructor again.
impl TryFrom<&PatronRecord> for Patron {
    type Error = LibraryError;

    fn try_from(other: &PatronRecord) -> Result<Self, Self::Error> {
        let mut patron = Patron::new(other.first_name.as_str(), other.last_name.as_str(),
                                     &other.age, &other.member_id)?;
        for title in other.borrowed_books.iter() {
            patron.add_borrowed_book(title);
        }
        Ok(patron)
    }
}

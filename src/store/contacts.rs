use std::path::PathBuf;
use uuid::Uuid;

use super::{read_records, write_records, StoreError};
use crate::models::{is_valid_email, is_valid_phone, Contact};

/// File name for the contact collection, resolved against the working
/// directory.
pub const CONTACTS_FILE: &str = "contacts.json";

/// The contact collection and its backing file.
///
/// Kept sorted by case-insensitive name after load and after every
/// mutation. Records are addressed by id, never by display position, so a
/// filtered view (search results) can always resolve back to its record.
pub struct ContactBook {
    contacts: Vec<Contact>,
    path: PathBuf,
}

impl ContactBook {
    /// Open the book at the default location.
    pub fn open() -> Result<Self, StoreError> {
        Self::open_at(CONTACTS_FILE)
    }

    /// Open the book at an explicit path. A missing file yields an empty
    /// book; a file that will not decode is an error the caller may degrade
    /// from with [`ContactBook::empty`].
    pub fn open_at(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let mut contacts: Vec<Contact> = read_records(&path)?;
        sort_contacts(&mut contacts);
        Ok(Self { contacts, path })
    }

    /// An empty book bound to `path`, for degrading after a failed load.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            contacts: Vec::new(),
            path: path.into(),
        }
    }

    /// Rewrite the backing file with the whole collection.
    pub fn save(&self) -> Result<(), StoreError> {
        write_records(&self.path, &self.contacts)
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// Validate and append a new contact. Returns the new record's id.
    pub fn add(
        &mut self,
        name: &str,
        phone: &str,
        email: Option<&str>,
        address: Option<&str>,
    ) -> Result<Uuid, StoreError> {
        let name = name.trim();
        let phone = phone.trim();
        let email = normalize(email);
        let address = normalize(address);

        self.validate(name, phone, email, None)?;

        let mut contact = Contact::new(name.to_string(), phone.to_string());
        contact.email = email.map(str::to_string);
        contact.address = address.map(str::to_string);
        let id = contact.id;
        self.contacts.push(contact);
        sort_contacts(&mut self.contacts);
        Ok(id)
    }

    /// Validate and overwrite the record at `id` in place. The record
    /// itself is excluded from the duplicate-name check.
    pub fn update(
        &mut self,
        id: Uuid,
        name: &str,
        phone: &str,
        email: Option<&str>,
        address: Option<&str>,
    ) -> Result<(), StoreError> {
        let name = name.trim();
        let phone = phone.trim();
        let email = normalize(email);
        let address = normalize(address);

        let idx = self
            .contacts
            .iter()
            .position(|c| c.id == id)
            .ok_or(StoreError::NotFound(id))?;
        self.validate(name, phone, email, Some(id))?;

        let contact = &mut self.contacts[idx];
        contact.name = name.to_string();
        contact.phone = phone.to_string();
        contact.email = email.map(str::to_string);
        contact.address = address.map(str::to_string);
        contact.touch();
        sort_contacts(&mut self.contacts);
        Ok(())
    }

    /// Remove and return the record at `id`.
    pub fn delete(&mut self, id: Uuid) -> Result<Contact, StoreError> {
        let idx = self
            .contacts
            .iter()
            .position(|c| c.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(self.contacts.remove(idx))
    }

    /// Case-insensitive substring match against name or phone. Does not
    /// touch the store's order.
    pub fn search(&self, term: &str) -> Vec<&Contact> {
        let term = term.trim().to_lowercase();
        self.contacts
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&term) || c.phone.to_lowercase().contains(&term)
            })
            .collect()
    }

    fn validate(
        &self,
        name: &str,
        phone: &str,
        email: Option<&str>,
        exclude: Option<Uuid>,
    ) -> Result<(), StoreError> {
        if name.is_empty() {
            return Err(StoreError::NameRequired);
        }
        if phone.is_empty() {
            return Err(StoreError::PhoneRequired);
        }
        if !is_valid_phone(phone) {
            return Err(StoreError::InvalidPhone(phone.to_string()));
        }
        if let Some(email) = email {
            if !is_valid_email(email) {
                return Err(StoreError::InvalidEmail(email.to_string()));
            }
        }
        let lower = name.to_lowercase();
        if self
            .contacts
            .iter()
            .any(|c| Some(c.id) != exclude && c.name.to_lowercase() == lower)
        {
            return Err(StoreError::DuplicateName(name.to_string()));
        }
        Ok(())
    }
}

fn normalize(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|s| !s.is_empty())
}

fn sort_contacts(contacts: &mut [Contact]) {
    contacts.sort_by_cached_key(|c| c.sort_key());
}

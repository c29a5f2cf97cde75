//! Uncommitted form input for the contact form.
//!
//! DESIGN
//! ======
//! The four inputs are addressed through [`DraftField`] so the form can be
//! rendered from one list and the book can update fields without a setter per
//! input.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use super::entries::Entry;

/// One of the four editable contact fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    Email,
    Number,
    Date,
}

impl DraftField {
    /// All fields in form and table column order.
    pub const ALL: [DraftField; 4] = [Self::Name, Self::Email, Self::Number, Self::Date];

    /// Column heading.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Number => "Number",
            Self::Date => "Date",
        }
    }

    /// Input placeholder. Date inputs render the browser's own picker hint.
    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Number => "Phone Number",
            Self::Date => "",
        }
    }

    /// HTML `type` attribute for the input element.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Name => "text",
            Self::Email => "email",
            Self::Number => "tel",
            Self::Date => "date",
        }
    }
}

/// Draft values for a contact that has not been committed yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub number: String,
    pub date: String,
}

impl Draft {
    /// Build a draft from explicit values.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        number: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            number: number.into(),
            date: date.into(),
        }
    }

    /// Copy the data fields of an existing entry.
    #[must_use]
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            name: entry.name.clone(),
            email: entry.email.clone(),
            number: entry.number.clone(),
            date: entry.date.clone(),
        }
    }

    #[must_use]
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Email => &self.email,
            DraftField::Number => &self.number,
            DraftField::Date => &self.date,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::Name => &mut self.name,
            DraftField::Email => &mut self.email,
            DraftField::Number => &mut self.number,
            DraftField::Date => &mut self.date,
        };
        *slot = value.into();
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// `true` when every field is non-empty. Content is not inspected.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        DraftField::ALL.iter().all(|field| !self.get(*field).is_empty())
    }
}

//! Form record for the confirmation step.
//!
//! DESIGN
//! ======
//! Inputs bind to [`FormData`] by their element `name`. Text inputs are
//! stored verbatim; the numeric selectors are parsed on write into `u8`
//! quantities and range-checked against the options the selector offers,
//! so the persisted record always carries integers.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::session::SessionContext;

/// Options offered by the (disabled) party-size selector.
pub const PARTY_SIZE_RANGE: RangeInclusive<u8> = 1..=10;

/// Options offered by each add-on selector.
pub const ADD_ON_RANGE: RangeInclusive<u8> = 0..=10;

/// Error returned by [`FormData::on_field_change`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("unknown form field `{0}`")]
    UnknownField(String),
    #[error("`{value}` is not a valid quantity for {field}")]
    InvalidQuantity { field: &'static str, value: String },
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange { field: &'static str, value: u8, min: u8, max: u8 },
}

/// One input of the confirmation form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    PartySize,
    Chocolates,
    LargeTowels,
    Towels,
}

impl Field {
    pub const ALL: [Self; 7] = [
        Self::Name,
        Self::Phone,
        Self::Email,
        Self::PartySize,
        Self::Chocolates,
        Self::LargeTowels,
        Self::Towels,
    ];

    /// The input element `name`, which is also the persisted JSON key.
    #[must_use]
    pub fn input_name(self) -> &'static str {
        match self {
            Self::Name => "nombre",
            Self::Phone => "telefono",
            Self::Email => "email",
            Self::PartySize => "cantidadPersonas",
            Self::Chocolates => "chocolates",
            Self::LargeTowels => "toallones",
            Self::Towels => "toallas",
        }
    }

    #[must_use]
    pub fn from_input_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.input_name() == name)
    }

    /// Human-readable label shown next to the input.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Phone => "Phone",
            Self::Email => "Email",
            Self::PartySize => "Party size",
            Self::Chocolates => "Chocolates",
            Self::LargeTowels => "Large towels",
            Self::Towels => "Towels",
        }
    }

    /// Selector options for numeric fields, `None` for text inputs.
    #[must_use]
    pub fn range(self) -> Option<RangeInclusive<u8>> {
        match self {
            Self::Name | Self::Phone | Self::Email => None,
            Self::PartySize => Some(PARTY_SIZE_RANGE),
            Self::Chocolates | Self::LargeTowels | Self::Towels => Some(ADD_ON_RANGE),
        }
    }
}

/// Mutable form record. Serializes with the `reservas` collection's keys.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    pub email: String,
    #[serde(rename = "cantidadPersonas")]
    pub party_size: u8,
    pub chocolates: u8,
    #[serde(rename = "toallones")]
    pub large_towels: u8,
    #[serde(rename = "toallas")]
    pub towels: u8,
}

impl Default for FormData {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            party_size: *PARTY_SIZE_RANGE.start(),
            chocolates: 0,
            large_towels: 0,
            towels: 0,
        }
    }
}

impl FormData {
    /// Empty form with the party size taken from the session dates, if any.
    #[must_use]
    pub fn seeded(session: &SessionContext) -> Self {
        let mut form = Self::default();
        if let Some(dates) = &session.dates {
            form.party_size = dates.party_size;
        }
        form
    }

    /// Replace the field whose input is named `name`, leaving the rest untouched.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::UnknownField`] for names outside [`Field::ALL`],
    /// and the errors of [`FormData::set`] otherwise. The form is unchanged
    /// on error.
    pub fn on_field_change(&mut self, name: &str, value: &str) -> Result<(), FieldError> {
        let field = Field::from_input_name(name).ok_or_else(|| FieldError::UnknownField(name.to_owned()))?;
        self.set(field, value)
    }

    /// Replace one field from its raw input value.
    ///
    /// # Errors
    ///
    /// Numeric fields reject values that do not parse as an integer or fall
    /// outside the selector's range.
    pub fn set(&mut self, field: Field, value: &str) -> Result<(), FieldError> {
        match field {
            Field::Name => self.name = value.to_owned(),
            Field::Phone => self.phone = value.to_owned(),
            Field::Email => self.email = value.to_owned(),
            Field::PartySize => self.party_size = parse_quantity(field, value)?,
            Field::Chocolates => self.chocolates = parse_quantity(field, value)?,
            Field::LargeTowels => self.large_towels = parse_quantity(field, value)?,
            Field::Towels => self.towels = parse_quantity(field, value)?,
        }
        Ok(())
    }

    /// Current value rendered the way the bound input displays it.
    #[must_use]
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::Name => self.name.clone(),
            Field::Phone => self.phone.clone(),
            Field::Email => self.email.clone(),
            Field::PartySize => self.party_size.to_string(),
            Field::Chocolates => self.chocolates.to_string(),
            Field::LargeTowels => self.large_towels.to_string(),
            Field::Towels => self.towels.to_string(),
        }
    }
}

fn parse_quantity(field: Field, raw: &str) -> Result<u8, FieldError> {
    let value = raw
        .trim()
        .parse::<u8>()
        .map_err(|_| FieldError::InvalidQuantity { field: field.input_name(), value: raw.to_owned() })?;
    let Some(range) = field.range() else {
        return Ok(value);
    };
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(FieldError::OutOfRange { field: field.input_name(), value, min: *range.start(), max: *range.end() })
    }
}

#[cfg(test)]
#[path = "form_test.rs"]
mod tests;

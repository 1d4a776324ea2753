use std::collections::BTreeMap;

use crate::forms::phone;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Phone,
    Region,
    EducationType,
    Direction,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Region => "region",
            Field::EducationType => "educationType",
            Field::Direction => "direction",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Field::Name => "Ism majburiy",
            Field::Phone => "Toʻliq telefon raqam kiriting",
            Field::Region => "Viloyatni tanlang",
            Field::EducationType => "Ta'lim shaklini tanlang",
            Field::Direction => "Yo'nalishni tanlang",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn reject(&mut self, field: Field) {
        self.0.insert(field, field.message().to_string());
    }

    pub fn require_text(&mut self, field: Field, value: &str) {
        if value.trim().is_empty() {
            self.reject(field);
        }
    }

    pub fn require_phone(&mut self, value: &str) {
        if !phone::is_complete(value) {
            self.reject(Field::Phone);
        }
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_trims() {
        let mut errors = ValidationErrors::new();
        errors.require_text(Field::Name, "   ");
        assert_eq!(errors.get(Field::Name), Some("Ism majburiy"));

        let mut errors = ValidationErrors::new();
        errors.require_text(Field::Name, " Aziz ");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_require_phone_rejects_partial_numbers() {
        let mut errors = ValidationErrors::new();
        errors.require_phone("+99890123");
        assert_eq!(errors.get(Field::Phone), Some("Toʻliq telefon raqam kiriting"));

        let mut errors = ValidationErrors::new();
        errors.require_phone("+998901234567");
        assert!(errors.into_result().is_ok());
    }

    #[test]
    fn test_collects_every_failure() {
        let mut errors = ValidationErrors::new();
        errors.require_text(Field::Name, "");
        errors.require_phone("+998");
        errors.require_text(Field::Region, "");
        assert_eq!(errors.len(), 3);
        let fields: Vec<Field> = errors.fields().collect();
        assert_eq!(fields, vec![Field::Name, Field::Phone, Field::Region]);
    }
}

use tracing::error;

use crate::general::ConnectorError;

/// Form data provider
/// Snapshots the field values at the moment of submission
pub trait FormSource: Send + Sync {
    fn snapshot(&self) -> FormData;
}

/// Signup form fields
/// Named values in document order, duplicates preserved
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormData {
    fields: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Init from already collected fields
    pub fn from(fields: Vec<(String, String)>) -> Self {
        FormData { fields }
    }

    pub fn push(&mut self, name: &str, value: &str) {
        self.fields.push((name.to_owned(), value.to_owned()));
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Url encode every field in order into one request body
    pub fn serialize(&self) -> Result<String, ConnectorError> {
        serde_urlencoded::to_string(&self.fields).map_err(|encode_error| {
            error!("{:?}", encode_error);
            ConnectorError::InvalidForm
        })
    }
}

/// A plain form is its own provider, every snapshot returns the same fields
impl FormSource for FormData {
    fn snapshot(&self) -> FormData {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_fields_in_document_order() {
        let mut form = FormData::new();
        form.push("name", "Arthur");
        form.push("mail", "arthur@camelot.fr");
        form.push("password", "excalibur");

        assert_eq!(
            form.serialize().unwrap(),
            "name=Arthur&mail=arthur%40camelot.fr&password=excalibur"
        );
    }

    #[test]
    fn keeps_duplicate_names() {
        let form = FormData::from(vec![
            ("role".to_owned(), "knight".to_owned()),
            ("role".to_owned(), "king".to_owned()),
        ]);

        assert_eq!(form.serialize().unwrap(), "role=knight&role=king");
    }

    #[test]
    fn encodes_reserved_characters() {
        let form = FormData::from(vec![("name".to_owned(), "Morgane la Fée".to_owned())]);

        assert_eq!(
            form.serialize().unwrap(),
            "name=Morgane+la+F%C3%A9e"
        );
    }

    #[test]
    fn an_empty_form_serializes_to_an_empty_body() {
        let form = FormData::new();

        assert!(form.is_empty());
        assert_eq!(form.serialize().unwrap(), "");
    }
}

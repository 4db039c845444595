//! Message bodies together with their metadata.

use crate::RestError;
use crate::data::{Form, Language};
use bytes::Bytes;
use mime::Mime;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// The content of a message plus its media type and languages.
#[derive(Debug, Clone, PartialEq)]
pub struct Representation {
    content: Bytes,
    media_type: Option<Mime>,
    languages: Vec<Language>,
    available: bool,
}

impl Representation {
    pub fn new(content: impl Into<Bytes>, media_type: Option<Mime>) -> Self {
        Self { content: content.into(), media_type, languages: Vec::new(), available: true }
    }

    pub fn empty() -> Self {
        Self::new(Bytes::new(), None)
    }

    pub fn text(value: impl Into<String>, media_type: Mime) -> Self {
        Self::new(value.into(), Some(media_type))
    }

    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, RestError> {
        let bytes = serde_json::to_vec(value)?;
        Ok(Self::new(bytes, Some(mime::APPLICATION_JSON)))
    }

    pub fn form(form: &Form) -> Result<Self, RestError> {
        Ok(Self::new(form.encode()?, Some(mime::APPLICATION_WWW_FORM_URLENCODED)))
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<Language>) -> Self {
        self.languages.push(language.into());
        self
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }

    pub fn media_type(&self) -> Option<&Mime> {
        self.media_type.as_ref()
    }

    pub fn set_media_type(&mut self, media_type: Option<Mime>) {
        self.media_type = media_type;
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn languages_mut(&mut self) -> &mut Vec<Language> {
        &mut self.languages
    }

    /// Whether some content exists and can be sent
    pub fn is_available(&self) -> bool {
        self.available && !self.content.is_empty()
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// The content as text, invalid utf8 sequences are replaced
    pub fn to_text(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }

    pub fn decode_json<T: DeserializeOwned>(&self) -> Result<T, RestError> {
        Ok(serde_json::from_slice(&self.content)?)
    }

    pub fn decode_form<T: DeserializeOwned>(&self) -> Result<T, RestError> {
        serde_urlencoded::from_bytes(&self.content).map_err(RestError::invalid_form)
    }
}

impl From<String> for Representation {
    fn from(value: String) -> Self {
        Self::text(value, mime::TEXT_PLAIN_UTF_8)
    }
}

impl From<&'static str> for Representation {
    fn from(value: &'static str) -> Self {
        if value.is_empty() { Self::empty() } else { Self::new(Bytes::from_static(value.as_bytes()), Some(mime::TEXT_PLAIN_UTF_8)) }
    }
}

impl From<Bytes> for Representation {
    fn from(bytes: Bytes) -> Self {
        Self::new(bytes, Some(mime::APPLICATION_OCTET_STREAM))
    }
}

#[cfg(test)]
mod tests {
    use crate::representation::Representation;
    use serde::{Deserialize, Serialize};

    #[test]
    fn test_string_representation() {
        let s = "Hello world".to_string();
        let len = s.len();

        let repr = Representation::from(s);
        assert_eq!(repr.size(), len);
        assert!(repr.is_available());
        assert_eq!(repr.media_type(), Some(&mime::TEXT_PLAIN_UTF_8));
        assert_eq!(repr.to_text(), "Hello world");
    }

    #[test]
    fn test_empty_representation() {
        let repr = Representation::from("");
        assert!(!repr.is_available());
        assert_eq!(repr.size(), 0);
        assert!(repr.media_type().is_none());
    }

    #[test]
    fn test_unavailable() {
        let mut repr = Representation::from("content");
        repr.set_available(false);
        assert!(!repr.is_available());
    }

    #[test]
    fn test_json() {
        #[derive(Serialize, Deserialize, Debug, PartialEq)]
        struct User {
            name: String,
        }

        let user = User { name: "zava".into() };
        let repr = Representation::json(&user).unwrap();
        assert_eq!(repr.media_type(), Some(&mime::APPLICATION_JSON));
        assert_eq!(repr.to_text(), r#"{"name":"zava"}"#);
        assert_eq!(repr.decode_json::<User>().unwrap(), user);

        assert!(Representation::from("not json").decode_json::<User>().is_err());
    }

    #[test]
    fn test_languages() {
        let repr = Representation::text("bonjour", mime::TEXT_PLAIN).with_language("fr");
        assert_eq!(repr.languages().len(), 1);
        assert_eq!(repr.languages()[0].tag(), "fr");
    }
}

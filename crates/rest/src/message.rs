use crate::RestError;
use crate::data::{Attributes, Form};
use crate::representation::Representation;
use mime::Mime;

/// Behavior shared by requests and responses.
pub trait Message {
    /// Returns a modifiable attributes map that can be used by developers to
    /// save information relative to the message.
    fn attributes(&self) -> &Attributes;

    fn attributes_mut(&mut self) -> &mut Attributes;

    fn entity(&self) -> Option<&Representation>;

    /// Replaces the entity, any form previously parsed from the old entity is
    /// dropped.
    fn set_entity(&mut self, entity: Option<Representation>);

    /// Sets a textual entity.
    fn set_entity_text(&mut self, value: String, media_type: Mime);

    /// Returns the entity as a form.
    ///
    /// The entity is parsed on the first call only, the form is then cached on
    /// the message and returned by the following calls. A message without
    /// entity yields an empty form.
    fn entity_as_form(&mut self) -> Result<&Form, RestError>;

    /// Indicates if an entity exists and has some available data
    fn is_entity_available(&self) -> bool;
}

/// Entity storage shared by [`crate::Request`] and [`crate::Response`].
#[derive(Debug, Clone, Default)]
pub(crate) struct EntitySlot {
    entity: Option<Representation>,
    form: Option<Form>,
}

impl EntitySlot {
    pub(crate) fn get(&self) -> Option<&Representation> {
        self.entity.as_ref()
    }

    pub(crate) fn set(&mut self, entity: Option<Representation>) {
        self.entity = entity;
        self.form = None;
    }

    pub(crate) fn is_available(&self) -> bool {
        self.entity.as_ref().is_some_and(Representation::is_available)
    }

    pub(crate) fn as_form(&mut self) -> Result<&Form, RestError> {
        if self.form.is_none() {
            let form = match &self.entity {
                None => Form::new(),
                Some(entity) => parse_form(entity)?,
            };
            self.form = Some(form);
        }

        Ok(self.form.get_or_insert_with(Form::new))
    }
}

fn parse_form(entity: &Representation) -> Result<Form, RestError> {
    match entity.media_type() {
        Some(media_type) if media_type.essence_str() != mime::APPLICATION_WWW_FORM_URLENCODED.essence_str() => {
            Err(RestError::invalid_form(format!("unexpected media type {media_type}")))
        }
        _ => Form::parse(entity.content()),
    }
}

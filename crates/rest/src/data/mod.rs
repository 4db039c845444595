//! Plain data exchanged through messages.

mod challenge;
mod cookie;
mod form;
mod language;
mod preference;
mod reference;
mod server_info;

pub use challenge::ChallengeRequest;
pub use cookie::CookieSetting;
pub use form::Form;
pub use form::Parameter;
pub use language::Language;
pub use preference::Preference;
pub use preference::accepted_languages;
pub use preference::accepted_media_types;
pub use reference::Reference;
pub use server_info::ServerInfo;

/// String keyed values attached to a message by application code
pub type Attributes = serde_json::Map<String, serde_json::Value>;

use std::convert::Infallible;
use std::str::FromStr;

use serde::Deserialize;

use super::validate::{Report, Validate};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Recipient {
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
}

impl Recipient {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            name: None,
            email: email.into(),
        }
    }

    pub fn named(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: email.into(),
        }
    }
}

/// Accepts `Name <addr>` or a bare `addr`. Address syntax is checked later by
/// validation, so parsing never fails.
impl FromStr for Recipient {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();

        if let (Some(open), true) = (raw.rfind('<'), raw.ends_with('>')) {
            let email = raw[open + 1..raw.len() - 1].trim();
            let name = raw[..open].trim().trim_matches('"').trim();
            let name = (!name.is_empty()).then(|| name.to_string());
            return Ok(Self {
                name,
                email: email.to_string(),
            });
        }

        Ok(Self::new(raw))
    }
}

/// Compose fields shared by draft creation and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DraftFields {
    pub to: Option<Vec<Recipient>>,
    pub cc: Option<Vec<Recipient>>,
    pub bcc: Option<Vec<Recipient>>,
    pub from: Option<Vec<Recipient>>,
    pub reply_to: Option<Vec<Recipient>>,
    pub file_ids: Option<Vec<String>>,
    pub subject: Option<String>,
    pub body: Option<String>,
}

impl DraftFields {
    pub fn recipient_lists(&self) -> [(&'static str, Option<&[Recipient]>); 5] {
        [
            ("to", self.to.as_deref()),
            ("cc", self.cc.as_deref()),
            ("bcc", self.bcc.as_deref()),
            ("from", self.from.as_deref()),
            ("reply_to", self.reply_to.as_deref()),
        ]
    }
}

impl Validate for DraftFields {
    fn validate(&self, report: &mut Report) {
        for (key, recipients) in self.recipient_lists() {
            if let Some(recipients) = recipients {
                report.recipients(key, recipients);
            }
        }

        if let Some(file_ids) = &self.file_ids {
            report.string_list("file_ids", file_ids);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NewDraft {
    #[serde(flatten)]
    pub fields: DraftFields,
    pub access_token: Option<String>,
}

impl Validate for NewDraft {
    fn validate(&self, report: &mut Report) {
        self.fields.validate(report);
        report.required_non_empty("access_token", self.access_token.as_deref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UpdateDraft {
    pub id: Option<String>,
    pub version: Option<String>,
    #[serde(flatten)]
    pub fields: DraftFields,
    pub access_token: Option<String>,
}

impl UpdateDraft {
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            version: Some(version.into()),
            ..Self::default()
        }
    }
}

impl Validate for UpdateDraft {
    fn validate(&self, report: &mut Report) {
        self.fields.validate(report);
        report.required_non_empty("access_token", self.access_token.as_deref());
        report.required_non_empty("id", self.id.as_deref());
        report.min_length("version", self.version.as_deref(), 1);
    }
}

/// Deletion carries no compose fields, only the identity of the draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeleteDraft {
    pub id: Option<String>,
    pub version: Option<String>,
    pub access_token: Option<String>,
}

impl DeleteDraft {
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            version: Some(version.into()),
            access_token: None,
        }
    }
}

impl Validate for DeleteDraft {
    fn validate(&self, report: &mut Report) {
        report.required_non_empty("id", self.id.as_deref());
        report.required_non_empty("version", self.version.as_deref());
        report.required_non_empty("access_token", self.access_token.as_deref());
    }
}

/// Filter for listing drafts together with the token it runs under.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDrafts {
    pub any_email: Option<String>,
    pub access_token: Option<String>,
}

impl Validate for ListDrafts {
    fn validate(&self, report: &mut Report) {
        report.required_non_empty("access_token", self.access_token.as_deref());
        if let Some(email) = &self.any_email {
            report.email("any_email[0]", email);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetDraft {
    pub id: String,
    pub access_token: Option<String>,
}

impl Validate for GetDraft {
    fn validate(&self, report: &mut Report) {
        report.non_empty("id", &self.id);
        report.required_non_empty("access_token", self.access_token.as_deref());
    }
}

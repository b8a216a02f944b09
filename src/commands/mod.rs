pub mod add;
pub mod config;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use std::fs;

use serde_json::Value;

use crate::api::models::DraftFields;
use crate::cli::ComposeArgs;
use crate::error::AppResult;

/// Builds compose fields from the params file, if any, with flags layered on top.
pub fn compose_fields(args: ComposeArgs) -> AppResult<DraftFields> {
    let mut fields = match &args.params {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => DraftFields::default(),
    };

    overlay(&mut fields.to, args.to);
    overlay(&mut fields.cc, args.cc);
    overlay(&mut fields.bcc, args.bcc);
    overlay(&mut fields.from, args.from);
    overlay(&mut fields.reply_to, args.reply_to);
    overlay(&mut fields.file_ids, args.file_ids);

    if args.subject.is_some() {
        fields.subject = args.subject;
    }

    if let Some(path) = args.body_file {
        fields.body = Some(fs::read_to_string(path)?);
    } else if args.body.is_some() {
        fields.body = args.body;
    }

    Ok(fields)
}

fn overlay<T>(slot: &mut Option<Vec<T>>, values: Vec<T>) {
    if !values.is_empty() {
        *slot = Some(values);
    }
}

/// One-line summary of a draft as returned by the api.
pub fn draft_line(draft: &Value) -> String {
    let id = field(draft, "id").unwrap_or("(no id)");
    let version = draft
        .get("version")
        .map(|version| match version {
            Value::String(version) => version.clone(),
            other => other.to_string(),
        })
        .unwrap_or_else(|| "?".to_string());
    let subject = field(draft, "subject")
        .filter(|subject| !subject.is_empty())
        .unwrap_or("(no subject)");
    let to = draft
        .get("to")
        .and_then(Value::as_array)
        .map(|to| {
            to.iter()
                .filter_map(|recipient| field(recipient, "email"))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .filter(|to| !to.is_empty());

    match to {
        Some(to) => format!("{id} | v{version} | {subject} | to: {to}"),
        None => format!("{id} | v{version} | {subject}"),
    }
}

fn field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

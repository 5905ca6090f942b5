//! Payload inspection behind the `crmkit-inspect` binary.
//!
//! A payload is parsed as one known schema and reduced to a [`Summary`].
//! Entity custom fields are decoded against a definitions file when one is
//! given, otherwise against the type echoed in each value list.

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use crmkit_model::{
    Account, AccountConstant, ApiResponse, Company, Contact, CustomField, CustomFieldIndex,
    Customer, EntityRecord, Lead, Pipeline, User,
};
use crmkit_widget::WidgetManifest;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::path::Path;
use tracing::{debug, info, warn};

/// Schemas a payload can be checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PayloadKind {
    Leads,
    Contacts,
    Companies,
    Customers,
    Account,
    AccountConstant,
    User,
    Pipelines,
    Manifest,
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .to_possible_value()
            .map(|v| v.get_name().to_owned())
            .unwrap_or_default();
        f.write_str(&name)
    }
}

/// What an inspected payload contained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Top-level records (entities, pipelines, users...).
    pub records: usize,
    /// Custom field value lists decoded.
    pub custom_fields: usize,
    /// Advisory findings that do not make the payload invalid.
    pub warnings: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Definitions {
    List(Vec<CustomField>),
    Page {
        #[serde(rename = "_embedded")]
        embedded: EmbeddedDefinitions,
    },
}

#[derive(Deserialize)]
struct EmbeddedDefinitions {
    custom_fields: Vec<CustomField>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Pipelines {
    List(Vec<Pipeline>),
    Page {
        #[serde(rename = "_embedded")]
        embedded: EmbeddedPipelines,
    },
}

#[derive(Deserialize)]
struct EmbeddedPipelines {
    pipelines: Vec<Pipeline>,
}

/// Loads custom field definitions, either a bare array or a
/// `/custom_fields` list response.
pub fn load_definitions(path: &Path) -> Result<CustomFieldIndex> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading definitions {}", path.display()))?;
    let definitions: Definitions = serde_json::from_str(&json)
        .with_context(|| format!("parsing definitions {}", path.display()))?;
    let list = match definitions {
        Definitions::List(list) => list,
        Definitions::Page { embedded } => embedded.custom_fields,
    };
    let index = CustomFieldIndex::new(list);
    debug!(definitions = index.len(), "Loaded custom field definitions");
    Ok(index)
}

/// Parses `payload` as `kind` and summarises it.
pub fn inspect(
    kind: PayloadKind,
    payload: &str,
    definitions: Option<&CustomFieldIndex>,
) -> Result<Summary> {
    let summary = match kind {
        PayloadKind::Leads => inspect_list::<Lead>(payload, definitions)?,
        PayloadKind::Contacts => inspect_list::<Contact>(payload, definitions)?,
        PayloadKind::Companies => inspect_list::<Company>(payload, definitions)?,
        PayloadKind::Customers => inspect_list::<Customer>(payload, definitions)?,
        PayloadKind::Account => {
            let account: Account = parse(kind, payload)?;
            let mut summary = Summary {
                records: 1,
                ..Summary::default()
            };
            if account.embedded.is_none() {
                summary
                    .warnings
                    .push("account has no _embedded section (no `with` parameter)".into());
            }
            summary
        }
        PayloadKind::AccountConstant => {
            let account: AccountConstant = parse(kind, payload)?;
            account
                .check_custom_field_views()
                .context("runtime account custom field views disagree")?;
            Summary {
                records: 1,
                custom_fields: account.cf.len(),
                ..Summary::default()
            }
        }
        PayloadKind::User => {
            let _: User = parse(kind, payload)?;
            Summary {
                records: 1,
                ..Summary::default()
            }
        }
        PayloadKind::Pipelines => {
            let pipelines = match parse::<Pipelines>(kind, payload)? {
                Pipelines::List(list) => list,
                Pipelines::Page { embedded } => embedded.pipelines,
            };
            Summary {
                records: pipelines.len(),
                ..Summary::default()
            }
        }
        PayloadKind::Manifest => {
            let manifest = WidgetManifest::from_json(payload).context("parsing manifest")?;
            let warnings = manifest
                .missing_blocks()
                .into_iter()
                .map(|l| format!("location '{}' has no '{}' block", l.as_str(), l.block_key()))
                .collect();
            Summary {
                records: 1,
                custom_fields: 0,
                warnings,
            }
        }
    };
    for warning in &summary.warnings {
        warn!(%kind, "{warning}");
    }
    info!(
        %kind,
        records = summary.records,
        custom_fields = summary.custom_fields,
        "Payload matches schema"
    );
    Ok(summary)
}

fn parse<T: DeserializeOwned>(kind: PayloadKind, payload: &str) -> Result<T> {
    serde_json::from_str(payload).with_context(|| format!("payload is not a valid {kind} payload"))
}

fn inspect_list<E: EntityRecord>(
    payload: &str,
    definitions: Option<&CustomFieldIndex>,
) -> Result<Summary> {
    let page: ApiResponse<E> = serde_json::from_str(payload)
        .with_context(|| format!("payload is not a valid {} page", E::KIND))?;
    let mut summary = Summary {
        records: page.items().len(),
        ..Summary::default()
    };
    if page.is_empty() {
        summary.warnings.push("page has no records".into());
    }

    for record in page.items() {
        for field in record.custom_fields_values() {
            let decoded = match definitions {
                Some(index) if index.get(field.field_id).is_some() => index.decode(field),
                Some(_) => {
                    summary.warnings.push(format!(
                        "record {}: field {} has no definition",
                        record.id(),
                        field.field_id
                    ));
                    field.decode()
                }
                None => field.decode(),
            };
            if let Err(e) = decoded {
                bail!("record {}: {e}", record.id());
            }
            summary.custom_fields += 1;
        }
    }
    Ok(summary)
}

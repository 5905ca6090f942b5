use crate::{Company, Contact, Customer, EntityRecord, Lead};
use crmkit_types::{EntityKind, Link, PageLinks};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One page of a list endpoint:
/// `{_page, _links: {self, next}, _embedded: {<kind>: [...]}}`.
///
/// An empty page is a well-formed response; [`ApiResponse::items`] then
/// returns an empty slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<E> {
    #[serde(rename = "_page")]
    pub page: u32,
    #[serde(rename = "_links")]
    pub links: PageLinks,
    #[serde(rename = "_embedded")]
    pub embedded: BTreeMap<EntityKind, Vec<E>>,
}

pub type LeadsList = ApiResponse<Lead>;
pub type ContactsList = ApiResponse<Contact>;
pub type CompaniesList = ApiResponse<Company>;
pub type CustomersList = ApiResponse<Customer>;

impl<E: EntityRecord> ApiResponse<E> {
    /// Builds a page holding `items` under `E::KIND`.
    pub fn new(page: u32, self_href: impl Into<String>, items: Vec<E>) -> Self {
        Self {
            page,
            links: PageLinks {
                self_link: Link::new(self_href),
                next: None,
            },
            embedded: BTreeMap::from([(E::KIND, items)]),
        }
    }

    /// Records of this page. Records filed under another kind are ignored.
    pub fn items(&self) -> &[E] {
        self.embedded.get(&E::KIND).map_or(&[], Vec::as_slice)
    }

    pub fn into_items(mut self) -> Vec<E> {
        self.embedded.remove(&E::KIND).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Returns the `next` link, absent on the last page.
    pub fn next_href(&self) -> Option<&str> {
        self.links.next.as_ref().map(|l| l.href.as_str())
    }
}

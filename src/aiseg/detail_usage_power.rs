use crate::aiseg::client::Client;
use crate::aiseg::html::{select_numeric, select_text};
use crate::aiseg::pagination::{PageVerdict, PaginationConfig, Paginator};
use crate::error::{ExtractError, ParseError};
use crate::model::{DetailUsagePower, MetricSample, Unit};
use scraper::Html;
use std::sync::Arc;

const SLOTS_PER_PAGE: usize = 10;

fn page_path(page: usize) -> String {
    format!("/page/electricflow/1113?id={}", page)
}

/// Walks the paginated device listing and reads per-device usage in W.
pub struct DetailUsagePowerExtractor {
    client: Arc<Client>,
    pagination: PaginationConfig,
}

impl DetailUsagePowerExtractor {
    pub fn new(client: Arc<Client>) -> Self {
        Self::with_pagination(client, PaginationConfig::default())
    }

    pub fn with_pagination(client: Arc<Client>, pagination: PaginationConfig) -> Self {
        Self { client, pagination }
    }

    pub async fn extract(&self) -> Result<DetailUsagePower, ExtractError> {
        let mut paginator = Paginator::new(self.pagination.clone());
        let mut samples = vec![];

        while let Some(page) = paginator.next_page() {
            let document = self.client.fetch_document(&page_path(page)).await?;
            let names = read_slot_names(&document)?;
            match paginator.observe(&names) {
                PageVerdict::Fresh => samples.extend(read_slot_values(&document, &names)?),
                PageVerdict::Duplicate => {
                    tracing::debug!(page, "Listing page repeats the previous one");
                    break;
                }
            }
        }

        Ok(DetailUsagePower(samples))
    }
}

/// Device name in every slot, empty when the slot is absent.
fn read_slot_names(document: &Html) -> Result<Vec<String>, ParseError> {
    (1..=SLOTS_PER_PAGE)
        .map(|i| {
            Ok(select_text(document, &format!("#stage_{} > div.c_device", i))?
                .unwrap_or_default())
        })
        .collect()
}

/// Usage of every named slot; `names` comes from [`read_slot_names`].
fn read_slot_values(document: &Html, names: &[String]) -> Result<Vec<MetricSample>, ParseError> {
    let mut samples = vec![];
    for (i, name) in (1..).zip(names) {
        if name.is_empty() {
            continue;
        }
        let value = select_numeric(document, &format!("#stage_{} > div.c_value", i))?;
        samples.push(MetricSample::new(name, Unit::Watt, value));
    }
    Ok(samples)
}

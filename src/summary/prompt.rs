use serde::Serialize;

use super::SummaryError;
use crate::drops::Dataset;
use crate::filter::{FilterQuery, filter_stats};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopValue<'a> {
    pub value: &'a str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropSample<'a> {
    pub id: &'a str,
    pub time: &'a str,
    /// Raw value count, duplicates included
    pub count: usize,
}

/// Digest of a dataset sent along with the prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryPayload<'a> {
    pub total_drops: usize,
    pub total_unique_ips: usize,
    pub top_ten_ips: Vec<TopValue<'a>>,
    pub drop_samples: Vec<DropSample<'a>>,
}

/// `top_values` highest counts and the first `sample_drops` records
pub fn build_payload(dataset: &Dataset, top_values: usize, sample_drops: usize) -> SummaryPayload<'_> {
    let top_ten_ips = filter_stats(dataset.stats(), &FilterQuery::default())
        .into_iter()
        .take(top_values)
        .map(|stat| TopValue {
            value: &stat.value,
            count: stat.count,
        })
        .collect();

    let drop_samples = dataset
        .drops()
        .iter()
        .take(sample_drops)
        .map(|record| DropSample {
            id: record.id(),
            time: record.time(),
            count: record.raw_values().len(),
        })
        .collect();

    SummaryPayload {
        total_drops: dataset.drops().len(),
        total_unique_ips: dataset.stats().len(),
        top_ten_ips,
        drop_samples,
    }
}

pub fn build_prompt(payload: &SummaryPayload<'_>) -> Result<String, SummaryError> {
    let data = serde_json::to_string(payload).map_err(|e| SummaryError::Parse {
        message: format!("Failed to serialize summary data: {}", e),
    })?;

    Ok(format!(
        "I have log data from a system called \"DROP\".\n\
         Summary Data: {data}\n\
         \n\
         Task:\n\
         1. Identify any potential anomalies in the IP patterns or numeric values.\n\
         2. Suggest if any specific IPs look suspicious due to high frequency.\n\
         3. Provide a brief professional summary of the traffic observed.\n\
         \n\
         Keep the tone professional and the response formatted in Markdown.\n"
    ))
}

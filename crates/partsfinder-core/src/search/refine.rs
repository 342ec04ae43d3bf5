//! LLM-guided refinement loop over DigiKey keyword searches
//!
//! Runs a seed search with no filter, then repeatedly shows the full
//! search history to the model and applies whatever replacement filter
//! set it proposes, until the model declares the results good enough,
//! proposes nothing, or the history cap is reached.

use crate::digikey::schema::{FilterOptionsRequest, KeywordResponse};
use crate::digikey::PartSearch;
use crate::error::Result;
use crate::llm::{structured_completion, LlmClient};
use serde::{Deserialize, Serialize};

/// Hard cap on history length.
///
/// Bounds the external API and inference cost per invocation. The
/// model may re-add a filter it previously removed, so the loop is not
/// guaranteed to converge; the cap is a safety valve.
pub const MAX_HISTORY: usize = 8;

/// One search round: the filter set used (none for the seed search)
/// and the response it produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub filter: Option<FilterOptionsRequest>,
    pub response: KeywordResponse,
}

/// Output shape of one refinement completion
#[derive(Debug, Deserialize)]
pub struct RefinementDecision {
    /// The results are good enough; stop adjusting filters
    pub done: bool,
    /// Why the results are good enough, or why refinement continues
    pub reason: String,
    /// Replacement filter set for the next search, absent when done
    #[serde(rename = "newFilters")]
    pub new_filters: Option<FilterOptionsRequest>,
}

const REFINER_SYSTEM: &str = "You are helping refine an electronic parts search against the \
     DigiKey API. Output ONLY valid JSON with these fields: done (boolean), reason (string), \
     newFilters (FilterOptionsRequest object, optional).";

/// Run the refinement loop and return the final search response.
///
/// The keyword phrase stays fixed across rounds; only the filter set
/// changes. Any failed model or API call aborts the invocation.
pub async fn refine(
    search: &dyn PartSearch,
    llm: &dyn LlmClient,
    raw_query: &str,
    keywords: &str,
    access_token: &str,
) -> Result<KeywordResponse> {
    let seed = search.keyword_search(keywords, access_token, None).await?;
    let mut history = vec![HistoryEntry {
        filter: None,
        response: seed,
    }];

    while history.len() < MAX_HISTORY {
        let transcript = serde_json::to_string(&history)?;
        let prompt = build_refinement_prompt(raw_query, &transcript);

        let decision: RefinementDecision =
            structured_completion(llm, REFINER_SYSTEM, prompt).await?;

        tracing::debug!(
            round = history.len(),
            done = decision.done,
            reason = %decision.reason,
            "refinement decision"
        );

        let filter = match (decision.done, decision.new_filters) {
            (false, Some(filter)) => filter,
            _ => break,
        };

        let response = search
            .keyword_search(keywords, access_token, Some(filter.clone()))
            .await?;
        history.push(HistoryEntry {
            filter: Some(filter),
            response,
        });
    }

    Ok(history
        .pop()
        .map(|entry| entry.response)
        .unwrap_or_default())
}

fn build_refinement_prompt(raw_query: &str, transcript: &str) -> String {
    format!(
        r#"You are helping somebody search for electronic parts using the DigiKey API and they gave you '{raw_query}' as the query.
We ran the query along with some filters, but the API only returned general results (we are using the 'Products' array in the response as the results) as well as some additional filters that can be used to refine the search.
Please select some filters to improve the relevance (i.e. how well the results match the query) of the results without reducing the result count to 0.
Please only use filters that are present in the response from the last API call provided below (i.e. in the FilterOptions field of that response). Do not make up any filter ids, only use filter ids that are present in that response.
Don't stop refining the results if you think there are still improvements to be made. You may remove filters if they have made the results worse.
Try not to be too narrow when applying the filter (e.g. if the query is for "small display", don't assume that it should be exactly 2 inches wide and filter for that, but maybe filtering for 1 to 4 inches could work).

Here is the previous search history as a JSON array (remember to only use the filter options from the last element in the list):
{transcript}"#
    )
}

//! Live-mode extraction via an OpenAI-compatible chat completions API

use async_trait::async_trait;
use core_kernel::CaseData;
use reqwest::Client;
use serde_json::json;

use crate::error::ReviewError;
use crate::ports::CaseExtractor;

const SYSTEM_PROMPT: &str = "You are a clinical prior authorization co-pilot for a health plan. \
You never make final decisions; you prepare structured summaries based on policy and evidence. \
You must output valid JSON when asked.

You are highly knowledgeable about:
- Oncology drugs and treatment protocols
- NCCN Guidelines
- Clinical biomarkers and their significance
- Prior authorization criteria and medical necessity determinations

Always be precise, evidence-based, and cite specific clinical data from the case.";

/// Extractor backed by an OpenAI-compatible `/chat/completions` endpoint.
pub struct OpenAiExtractor {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl OpenAiExtractor {
    pub fn new(base_url: String, model: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            model,
            api_key,
        }
    }

    fn extraction_prompt(raw_text: &str) -> String {
        format!(
            "Analyze this prior authorization request and extract structured clinical data.\n\n\
             PA REQUEST TEXT:\n{raw_text}\n\n\
             Extract and return a JSON object with these exact fields:\n\
             {{\n\
               \"patient_info\": {{\"name\": \"\", \"dob\": \"\", \"member_id\": \"\"}},\n\
               \"diagnosis\": {{\"primary\": \"\", \"icd10\": \"\", \"histology\": \"\"}},\n\
               \"disease_stage\": {{\"stage\": \"e.g. Stage IV\", \"tnm\": \"\", \"metastatic_sites\": []}},\n\
               \"biomarkers\": {{\n\
                 \"pd_l1\": {{\"status\": \"positive/negative/pending/not tested\", \"value\": \"TPS percentage\", \"test_date\": \"\"}},\n\
                 \"egfr\": {{\"status\": \"wild type/mutated/pending/not tested\", \"mutation\": \"\"}},\n\
                 \"alk\": {{\"status\": \"positive/negative/pending/not tested\"}},\n\
                 \"other_markers\": [{{\"name\": \"\", \"result\": \"\"}}]\n\
               }},\n\
               \"labs\": {{\"wbc\": \"\", \"hemoglobin\": \"\", \"platelets\": \"\", \"creatinine\": \"\", \"alt\": \"\", \"ast\": \"\", \"other\": []}},\n\
               \"performance_status\": {{\"ecog\": \"0-4\", \"description\": \"\"}},\n\
               \"prior_therapy\": {{\"has_prior_systemic\": false, \"treatments\": [], \"immunotherapy_history\": \"none\"}},\n\
               \"comorbidities\": [],\n\
               \"requesting_provider\": {{\"name\": \"\", \"npi\": \"\", \"facility\": \"\"}},\n\
               \"drug_requested\": {{\"name\": \"\", \"dose\": \"\", \"duration\": \"\"}}\n\
             }}\n\n\
             Return ONLY valid JSON, no additional text."
        )
    }

    async fn complete(&self, prompt: String) -> Result<String, ReviewError> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": prompt }
            ],
            "response_format": { "type": "json_object" },
        });

        let response = self
            .client
            .post(format!(
                "{}/chat/completions",
                self.base_url.trim_end_matches('/')
            ))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ReviewError::Upstream(e.to_string()))?
            .error_for_status()
            .map_err(|e| ReviewError::Upstream(e.to_string()))?;

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ReviewError::Upstream(e.to_string()))?;

        payload["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| {
                ReviewError::MalformedResponse("no message content in completion".to_string())
            })
    }
}

/// Strips a markdown code fence if the model wrapped its JSON in one.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed)
}

#[async_trait]
impl CaseExtractor for OpenAiExtractor {
    async fn extract(&self, raw_text: &str) -> Result<CaseData, ReviewError> {
        tracing::debug!(model = %self.model, "requesting model extraction");

        let content = self.complete(Self::extraction_prompt(raw_text)).await?;
        serde_json::from_str(strip_code_fence(&content))
            .map_err(|e| ReviewError::MalformedResponse(e.to_string()))
    }
}

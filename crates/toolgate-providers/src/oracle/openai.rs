//! OpenAI-compatible chat oracle
//!
//! Implements the `SchemaOracle` port with a hosted chat model: the
//! definition is serialized to JSON, embedded in a validation prompt, and
//! the model's JSON reply is parsed into a verdict. Any transport error,
//! non-success status, or unparsable verdict is fatal for that one
//! definition; retry policy, if any, belongs to the caller's CI layer.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use toolgate_application::SchemaOracle;
use toolgate_domain::{Error, LiteralValue, Result, ValidationVerdict};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

const SYSTEM_PROMPT: &str =
    "You are a schema validation expert. Analyze OpenAI function definitions.";

/// Hosted chat-model oracle
pub struct OpenAiOracle {
    api_key: String,
    base_url: Option<String>,
    model: String,
    timeout: Duration,
    http_client: Client,
}

impl OpenAiOracle {
    /// Create a new chat oracle
    ///
    /// # Arguments
    /// * `api_key` - Bearer token for the API
    /// * `base_url` - Optional API base (defaults to the OpenAI endpoint)
    /// * `model` - Chat model name
    /// * `timeout` - Per-request timeout
    /// * `http_client` - Reqwest client for making API requests
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: String,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            api_key,
            base_url,
            model,
            timeout,
            http_client,
        }
    }

    /// API base URL for this oracle
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    async fn fetch_verdict(&self, prompt: &str) -> Result<serde_json::Value> {
        let payload = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": prompt }
            ],
            "response_format": { "type": "json_object" }
        });

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url()))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::network(format!("oracle request timed out after {:?}", self.timeout))
                } else {
                    Error::network_with_source("oracle request failed", e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::oracle(format!("oracle returned HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| Error::oracle(format!("oracle response was not JSON: {e}")))
    }
}

#[async_trait]
impl SchemaOracle for OpenAiOracle {
    async fn judge(&self, definition: &LiteralValue) -> Result<ValidationVerdict> {
        let definition_json = serde_json::to_string_pretty(&definition.to_json())?;
        let prompt = build_prompt(&definition_json);

        debug!(model = %self.model, "judging definition with chat oracle");
        let body = self.fetch_verdict(&prompt).await?;
        parse_verdict(&body)
    }

    fn oracle_name(&self) -> &str {
        "openai"
    }
}

/// Build the validation prompt for one definition
fn build_prompt(definition_json: &str) -> String {
    format!(
        r#"Analyze this OpenAI function definition schema. Return JSON with:
- "valid": boolean
- "errors": list of strings describing schema violations
- "missing_fields": list of required missing fields

Schema to validate: {definition_json}

Follow these validation rules based on the example structure:
1. Must have 'type' set to 'function'
2. Must have 'function' object containing:
   a. 'name' (string, required)
   b. 'description' (string, required)
   c. 'parameters' (object, required) following JSON Schema format
3. Parameters object must contain:
   a. 'type' set to 'object'
   b. 'properties' object containing parameter definitions
   c. 'required' array listing required parameters
   d. 'additionalProperties' set to false
4. Each parameter in 'properties' must define:
   a. 'type' (string, required)
   b. 'description' (string, required)
   c. 'enum' (array, optional) if parameter has specific allowed values
5. The 'function' object should include 'strict' set to true
6. No markdown formatting in descriptions

Example of valid structure:
{{
    "type": "function",
    "function": {{
        "name": "get_weather",
        "description": "Retrieves current weather for the given location.",
        "parameters": {{
            "type": "object",
            "properties": {{
                "location": {{
                    "type": "string",
                    "description": "City and country e.g. Bogota, Colombia"
                }},
                "units": {{
                    "type": "string",
                    "enum": ["celsius", "fahrenheit"],
                    "description": "Units the temperature will be returned in."
                }}
            }},
            "required": ["location", "units"],
            "additionalProperties": false
        }},
        "strict": true
    }}
}}"#
    )
}

/// Parse the chat completion body into a verdict
///
/// The verdict is the JSON object inside the first choice's message
/// content; anything else is a malformed oracle response.
fn parse_verdict(body: &serde_json::Value) -> Result<ValidationVerdict> {
    let content = body["choices"][0]["message"]["content"]
        .as_str()
        .ok_or_else(|| Error::oracle("oracle response has no message content"))?;

    serde_json::from_str::<ValidationVerdict>(content)
        .map_err(|e| Error::oracle(format!("oracle returned an unparsable verdict: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_definition_and_rules() {
        let prompt = build_prompt(r#"{"type": "function"}"#);
        assert!(prompt.contains(r#"{"type": "function"}"#));
        assert!(prompt.contains("'additionalProperties' set to false"));
        assert!(prompt.contains("'strict' set to true"));
        assert!(prompt.contains("No markdown formatting"));
    }

    #[test]
    fn test_parse_verdict_from_chat_body() {
        let body = serde_json::json!({
            "choices": [{
                "message": {
                    "content": r#"{"valid": false, "errors": ["bad type"], "missing_fields": ["function.strict"]}"#
                }
            }]
        });
        let verdict = parse_verdict(&body).unwrap();
        assert!(!verdict.valid);
        assert_eq!(verdict.errors, vec!["bad type"]);
        assert_eq!(verdict.missing_fields, vec!["function.strict"]);
    }

    #[test]
    fn test_malformed_body_is_an_oracle_error() {
        let no_choices = serde_json::json!({ "choices": [] });
        assert!(matches!(
            parse_verdict(&no_choices),
            Err(Error::Oracle { .. })
        ));

        let not_a_verdict = serde_json::json!({
            "choices": [{ "message": { "content": "sorry, I cannot help" } }]
        });
        assert!(matches!(
            parse_verdict(&not_a_verdict),
            Err(Error::Oracle { .. })
        ));
    }

    #[test]
    fn test_base_url_defaults_and_overrides() {
        let client = Client::new();
        let default = OpenAiOracle::new(
            "key".into(),
            None,
            "gpt-4o-mini".into(),
            Duration::from_secs(30),
            client.clone(),
        );
        assert_eq!(default.base_url(), "https://api.openai.com/v1");

        let custom = OpenAiOracle::new(
            "key".into(),
            Some("http://localhost:8080/v1".into()),
            "local".into(),
            Duration::from_secs(30),
            client,
        );
        assert_eq!(custom.base_url(), "http://localhost:8080/v1");
    }
}

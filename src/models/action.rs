use serde::{Deserialize, Serialize};

/// Metadata returned by `GET` on an action endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionGetResponse {
    pub title: String,
    pub icon: String,
    pub description: String,
    pub label: String,
    pub links: ActionLinks,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionLinks {
    pub actions: Vec<LinkedAction>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkedAction {
    pub label: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ActionParameter>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionParameter {
    pub name: String,
    pub label: String,
    pub required: bool,
}

/// Body a wallet posts to request a transaction
#[derive(Debug, Deserialize)]
pub struct ActionPostRequest {
    pub account: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionPostResponse {
    /// base64 of the unsigned transaction in wire format
    pub transaction: String,
    pub message: String,
}

/// `actions.json` served from the site root
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionsJson {
    pub rules: Vec<ActionRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActionRule {
    pub path_pattern: String,
    pub api_path: String,
}

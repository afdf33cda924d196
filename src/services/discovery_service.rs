use crate::models::{
    action::{
        ActionGetResponse, ActionLinks, ActionParameter, ActionRule, ActionsJson, LinkedAction,
    },
    address::Address,
    discovery::DiscoveryConfig,
};

pub const AMOUNT_PARAMETER: &str = "amount";

pub struct DiscoveryService;

impl DiscoveryService {
    /// `base_url` is the action endpoint without a query, e.g.
    /// `https://example.com/api/donate`.
    pub fn describe(
        config: &DiscoveryConfig,
        base_url: &str,
        recipient: &Address,
    ) -> ActionGetResponse {
        let base_href = format!("{}?to={}", base_url, recipient);

        let mut actions: Vec<LinkedAction> = config
            .preset_amounts
            .iter()
            .map(|amount| LinkedAction {
                label: format!("Send {} SOL", amount),
                href: format!("{}&{}={}", base_href, AMOUNT_PARAMETER, amount),
                parameters: None,
            })
            .collect();

        // the wallet substitutes the text input into the placeholder
        actions.push(LinkedAction {
            label: config.custom_amount_label.clone(),
            href: format!("{}&{}={{{}}}", base_href, AMOUNT_PARAMETER, AMOUNT_PARAMETER),
            parameters: Some(vec![ActionParameter {
                name: AMOUNT_PARAMETER.to_string(),
                label: config.custom_amount_placeholder.clone(),
                required: true,
            }]),
        });

        ActionGetResponse {
            title: config.title.clone(),
            icon: config.icon.clone(),
            description: config.description.clone(),
            label: config.label.clone(),
            links: ActionLinks { actions },
            kind: "action".to_string(),
        }
    }

    /// Map the site-level action path onto the API route
    pub fn actions_json(api_path: &str) -> ActionsJson {
        let public_path = api_path.trim_start_matches("/api");
        ActionsJson {
            rules: vec![
                ActionRule {
                    path_pattern: public_path.to_string(),
                    api_path: api_path.to_string(),
                },
                ActionRule {
                    path_pattern: format!("{}/**", api_path),
                    api_path: format!("{}/**", api_path),
                },
            ],
        }
    }
}

/// Static description of the donate action shown by wallets
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveryConfig {
    pub title: String,
    pub icon: String,
    pub description: String,
    pub label: String,
    /// Preset amounts in SOL, rendered as one button each
    pub preset_amounts: Vec<String>,
    pub custom_amount_label: String,
    pub custom_amount_placeholder: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            title: "Transfer Native SOL".to_string(),
            icon: "https://i.ibb.co/Zf5Fctp/Screenshot-2024-08-24-181920.png".to_string(),
            description: "Transfer SOL to author".to_string(),
            label: "Transfer".to_string(),
            preset_amounts: vec!["1".to_string(), "5".to_string(), "10".to_string()],
            custom_amount_label: "Send SOL".to_string(),
            custom_amount_placeholder: "Enter the amount of SOL to send".to_string(),
        }
    }
}

use log::debug;

use crate::{
    errors::CustomError,
    models::{
        action::ActionPostRequest,
        address::Address,
        transfer::{QueryParams, SolAmount},
    },
    services::wallet_service::RecipientResolver,
};

/// Raw query string of an action request; empty values count as absent
#[derive(Debug, Default)]
pub struct ActionQuery {
    pub to: Option<String>,
    pub amount: Option<String>,
}

impl ActionQuery {
    /// Collect the decoded query pairs. The first occurrence of a repeated
    /// key wins and unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "to" => &mut query.to,
                "amount" => &mut query.amount,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

pub struct ValidationService;

impl ValidationService {
    pub async fn validate_query(
        query: &ActionQuery,
        recipients: &dyn RecipientResolver,
        default_amount: SolAmount,
    ) -> Result<QueryParams, CustomError> {
        let recipient = match non_empty(&query.to) {
            Some(to) => to.parse::<Address>().map_err(|e| {
                debug!("rejecting recipient {:?}: {}", to, e);
                CustomError::InvalidRecipient
            })?,
            None => recipients.default_recipient().await?,
        };

        let amount = match non_empty(&query.amount) {
            Some(raw) => Self::parse_amount(raw)?,
            None => default_amount,
        };

        Ok(QueryParams { recipient, amount })
    }

    pub fn parse_amount(raw: &str) -> Result<SolAmount, CustomError> {
        raw.parse::<SolAmount>().map_err(|e| {
            debug!("rejecting amount {:?}: {:?}", raw, e);
            e
        })
    }

    /// Parse the posted signer account; a missing or malformed body is
    /// treated the same as a malformed key.
    pub fn validate_account(body: &[u8]) -> Result<Address, CustomError> {
        let request: ActionPostRequest = serde_json::from_slice(body).map_err(|e| {
            debug!("rejecting post body: {}", e);
            CustomError::InvalidAccount
        })?;
        request.account.parse::<Address>().map_err(|e| {
            debug!("rejecting account {:?}: {}", request.account, e);
            CustomError::InvalidAccount
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::transfer::LAMPORTS_PER_SOL;
    use crate::services::wallet_service::StaticRecipient;
    use crate::test_support::{address, NoRecipient};

    fn query(to: Option<&str>, amount: Option<&str>) -> ActionQuery {
        ActionQuery {
            to: to.map(str::to_string),
            amount: amount.map(str::to_string),
        }
    }

    fn default_amount() -> SolAmount {
        SolAmount::from_lamports(LAMPORTS_PER_SOL).unwrap()
    }

    async fn validate(query: ActionQuery) -> Result<QueryParams, CustomError> {
        let resolver = StaticRecipient(address(7));
        ValidationService::validate_query(&query, &resolver, default_amount()).await
    }

    #[actix_web::test]
    async fn absent_parameters_fall_back_to_defaults() {
        let params = validate(query(None, None)).await.unwrap();

        assert_eq!(params.recipient, address(7));
        assert_eq!(params.amount, default_amount());
    }

    #[actix_web::test]
    async fn empty_parameters_count_as_absent() {
        let params = validate(query(Some(""), Some(""))).await.unwrap();

        assert_eq!(params.recipient, address(7));
        assert_eq!(params.amount, default_amount());
    }

    #[actix_web::test]
    async fn explicit_parameters_win() {
        let to = address(8).to_string();
        let params = validate(query(Some(&to), Some("2.5"))).await.unwrap();

        assert_eq!(params.recipient, address(8));
        assert_eq!(params.amount.lamports(), 2_500_000_000);
    }

    #[actix_web::test]
    async fn malformed_recipient_is_rejected() {
        for to in ["not-an-address", "abc", "0x742d35Cc6634C0532925a3b844Bc454e4438f44e"] {
            let result = validate(query(Some(to), None)).await;
            assert!(matches!(result, Err(CustomError::InvalidRecipient)), "{} accepted", to);
        }
    }

    #[actix_web::test]
    async fn bad_amounts_are_rejected() {
        for amount in ["0", "-5", "abc", "1.2.3", "NaN", "inf", "5 SOL", "0.0000000001"] {
            let result = validate(query(None, Some(amount))).await;
            assert!(
                matches!(result, Err(CustomError::InvalidAmount(_))),
                "{} accepted",
                amount
            );
        }
    }

    #[actix_web::test]
    async fn resolver_is_not_consulted_when_recipient_is_given() {
        let to = address(8).to_string();
        let amount = default_amount();

        let given = query(Some(&to), None);
        let params = ValidationService::validate_query(&given, &NoRecipient, amount).await;
        assert_eq!(params.unwrap().recipient, address(8));

        let absent = query(None, None);
        let result = ValidationService::validate_query(&absent, &NoRecipient, amount).await;
        assert!(matches!(result, Err(CustomError::UnknownError)));
    }

    #[test]
    fn first_occurrence_of_a_repeated_key_wins() {
        let pairs = [("amount", "1"), ("utm", "x"), ("amount", "2"), ("to", ""), ("to", "abc")];
        let query =
            ActionQuery::from_pairs(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())));

        assert_eq!(query.amount.as_deref(), Some("1"));
        assert_eq!(query.to.as_deref(), Some(""));
    }

    #[test]
    fn account_body_is_validated() {
        let account = address(3);
        let body = format!(r#"{{"account":"{}"}}"#, account);
        assert_eq!(ValidationService::validate_account(body.as_bytes()).unwrap(), account);

        let rejected: [&[u8]; 5] =
            [b"", b"{}", b"not json", br#"{"account":"xyz"}"#, br#"{"account":42}"#];
        for body in rejected {
            assert!(matches!(
                ValidationService::validate_account(body),
                Err(CustomError::InvalidAccount)
            ));
        }
    }
}

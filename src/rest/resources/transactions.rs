//! Transactions API: the financial record of orders and donations.
//!
//! Each [`Document`] collects the payments, refunds, fees, taxes and
//! discounts of one sale.

use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::config::CommerceConfig;
use crate::rest::endpoint::{check_id_list, Endpoint};
use crate::rest::errors::CommerceError;
use crate::rest::params::QueryParams;
use crate::rest::resources::common::{Amount, Pagination};

/// A transaction document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    /// The unique identifier of the document.
    pub id: String,
    /// ISO 8601 creation time.
    pub created_on: String,
    /// ISO 8601 time of the last change.
    pub modified_on: String,
    /// Email address of the customer.
    pub customer_email: Option<String>,
    /// The order this document belongs to, if any.
    pub sales_order_id: Option<String>,
    /// Whether the transaction was voided.
    pub voided: bool,
    /// Gross sales before discounts.
    pub total_sales: Amount,
    /// Sales after discounts.
    pub total_net_sales: Amount,
    /// Shipping after discounts.
    pub total_net_shipping: Amount,
    /// Tax collected.
    pub total_taxes: Amount,
    /// Amount charged.
    pub total: Amount,
    /// Amount received after refunds and processing fees.
    pub total_net_payment: Amount,
    /// Payments applied to the document.
    pub payments: Vec<Payment>,
    /// Items sold.
    pub sales_line_items: Vec<SalesLineItem>,
    /// Discounts applied.
    pub discounts: Vec<Discount>,
    /// Shipping charges.
    pub shipping_line_items: Vec<ShippingLineItem>,
    /// Gateway error code, for failed charges.
    pub payment_gateway_error: Option<String>,
}

/// A payment collected for a document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Payment {
    /// The unique identifier of the payment.
    pub id: String,
    /// Amount charged.
    pub amount: Amount,
    /// Amount refunded.
    pub refunded_amount: Amount,
    /// Amount kept after refunds.
    pub net_amount: Amount,
    /// Card brand, e.g. `VISA`.
    pub credit_card_type: Option<String>,
    /// Payment processor, e.g. `STRIPE` or `PAYPAL`.
    pub provider: String,
    /// Refunds issued against the payment.
    pub refunds: Vec<Refund>,
    /// Fees charged by the processor.
    pub processing_fees: Vec<ProcessingFee>,
    /// Gift card used, for gift card payments.
    pub gift_card_id: Option<String>,
    /// ISO 8601 time the payment settled.
    pub paid_on: String,
    /// The processor's transaction ID.
    pub external_transaction_id: String,
    /// Provider specific properties, passed through unparsed.
    pub external_transaction_properties: Vec<serde_json::Value>,
    /// The processor's customer ID.
    pub external_customer_id: Option<String>,
}

/// A refund of a payment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Refund {
    /// The unique identifier of the refund.
    pub id: String,
    /// Amount refunded.
    pub amount: Amount,
    /// ISO 8601 time of the refund.
    pub refunded_on: String,
    /// The processor's refund ID.
    pub external_transaction_id: String,
}

/// A fee charged by the payment gateway.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessingFee {
    /// The unique identifier of the fee.
    pub id: String,
    /// Fee in the store currency.
    pub amount: Amount,
    /// Fee in the processor's currency.
    pub amount_gateway_currency: Amount,
    /// Rate from the processor's currency to the store currency.
    pub exchange_rate: String,
    /// Fee returned by the processor, in the store currency.
    pub refunded_amount: Amount,
    /// Fee returned by the processor, in its currency.
    pub refunded_amount_gateway_currency: Amount,
    /// Fee kept by the processor, in the store currency.
    pub net_amount: Amount,
    /// Fee kept by the processor, in its currency.
    pub net_amount_gateway_currency: Amount,
    /// Individual fee returns.
    pub fee_refunds: Vec<FeeRefund>,
}

/// A refund of a processing fee.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeeRefund {
    /// The unique identifier of the fee refund.
    pub id: String,
    /// Amount returned, in the store currency.
    pub amount: Amount,
    /// Amount returned, in the processor's currency.
    pub amount_gateway_currency: Amount,
    /// Rate from the processor's currency to the store currency.
    pub exchange_rate: String,
    /// ISO 8601 time of the return.
    pub refunded_on: String,
    /// The processor's ID for the return.
    pub external_transaction_id: String,
}

/// A sold item.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SalesLineItem {
    /// The unique identifier of the line item.
    pub id: String,
    /// Discount applied to the item.
    pub discount_amount: Amount,
    /// Gross sale.
    pub total_sales: Amount,
    /// Sale after discounts.
    pub total_net_sales: Amount,
    /// Amount charged, tax included.
    pub total: Amount,
    /// Taxes charged on the item.
    pub taxes: Vec<Tax>,
}

/// A tax applied to a line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tax {
    /// Tax charged.
    pub amount: Amount,
    /// Decimal rate, e.g. `0.0825`.
    pub rate: String,
    /// Display name.
    pub name: String,
    /// Taxing authority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<String>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A discount applied to the document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Discount {
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Discount or promo code name.
    pub name: String,
    /// Amount taken off.
    pub amount: Amount,
}

/// A shipping charge.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingLineItem {
    /// The unique identifier of the shipping charge.
    pub id: String,
    /// Shipping charged before discounts.
    pub amount: Amount,
    /// Discount applied to shipping.
    pub discount_amount: Amount,
    /// Shipping after discounts.
    pub net_amount: Amount,
    /// Shipping method shown at checkout.
    pub description: String,
    /// Taxes charged on shipping.
    pub taxes: Vec<Tax>,
}

/// Response of [`retrieve_all_transactions`].
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RetrieveAllTransactionsResponse {
    /// Documents on this page.
    pub documents: Vec<Document>,
    /// Cursor for the next page.
    pub pagination: Pagination,
}

/// Response of [`retrieve_specific_transactions`].
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RetrieveSpecificTransactionsResponse {
    /// The requested documents.
    pub documents: Vec<Document>,
}

const RETRIEVE_ALL_TRANSACTIONS: Endpoint = Endpoint::new(
    "RetrieveAllTransactions",
    "retrieve all transactions",
    HttpMethod::Get,
    "commerce/transactions",
    200,
);
const RETRIEVE_SPECIFIC_TRANSACTIONS: Endpoint = Endpoint::new(
    "RetrieveSpecificTransactions",
    "retrieve specific transactions",
    HttpMethod::Get,
    "commerce/transactions/{transactionIds}",
    200,
);

/// Lists transaction documents.
///
/// Forwards `cursor`, `modifiedAfter` and `modifiedBefore`. `status`,
/// `product_type`, `filter`, `sort_direction` and `sort_field` are not sent.
/// They still take part in validation, so a cursor combined with any of them
/// is rejected.
///
/// # Errors
///
/// Returns [`CommerceError::InvalidQuery`] if `params` fails validation, and
/// [`CommerceError`] unless the API answers `200 OK`.
pub async fn retrieve_all_transactions(
    config: &CommerceConfig,
    params: &QueryParams,
) -> Result<RetrieveAllTransactionsResponse, CommerceError> {
    params.validate()?;
    RETRIEVE_ALL_TRANSACTIONS
        .call(config)
        .query_param("cursor", params.cursor())
        .query_param("modifiedAfter", params.modified_after())
        .query_param("modifiedBefore", params.modified_before())
        .fetch()
        .await
}

/// Retrieves up to 50 transaction documents by ID.
///
/// The joined ID list is escaped as a single path segment, so the separating
/// commas are sent as `%2C`.
///
/// # Errors
///
/// Returns [`CommerceError::InvalidInput`] if `transaction_ids` is empty or
/// has more than 50 entries, and [`CommerceError`] unless the API answers
/// `200 OK`.
pub async fn retrieve_specific_transactions<S: AsRef<str>>(
    config: &CommerceConfig,
    transaction_ids: &[S],
) -> Result<RetrieveSpecificTransactionsResponse, CommerceError> {
    check_id_list(
        transaction_ids,
        "transactionIDs cannot be empty",
        "transactionIDs cannot exceed 50 IDs",
    )?;
    let joined = transaction_ids
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",");
    RETRIEVE_SPECIFIC_TRANSACTIONS
        .call(config)
        .path_param("transactionIds", &joined)
        .fetch()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_deserializes_nested_records() {
        let document: Document = serde_json::from_value(json!({
            "id": "d1",
            "voided": false,
            "total": {"currency": "USD", "value": "20.00"},
            "payments": [{
                "id": "pay1",
                "provider": "STRIPE",
                "amount": {"currency": "USD", "value": "20.00"},
                "processingFees": [{"id": "f1", "exchangeRate": "1.0",
                                    "feeRefunds": [{"id": "fr1"}]}],
                "externalTransactionProperties": [{"k": "v"}]
            }],
            "salesLineItems": [{"id": "s1", "taxes": [{"name": "VAT", "rate": "0.2"}]}]
        }))
        .unwrap();

        assert_eq!(document.payments[0].processing_fees[0].fee_refunds[0].id, "fr1");
        assert_eq!(document.payments[0].external_transaction_properties.len(), 1);
        assert_eq!(document.sales_line_items[0].taxes[0].name, "VAT");
        assert!(document.customer_email.is_none());
    }
}

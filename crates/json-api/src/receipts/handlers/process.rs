//! Process Receipt Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use tally::{RawItem, RawReceipt, Receipt};

use crate::{extensions::*, receipts::errors::into_status_error, state::State};

/// Process Receipt Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProcessReceiptRequest {
    /// Name of the retailer
    pub retailer: String,

    /// Purchase date, `YYYY-MM-DD`
    pub purchase_date: String,

    /// Purchase time, 24-hour `HH:MM`
    pub purchase_time: String,

    /// Purchased items
    pub items: Vec<ItemRequest>,

    /// Total amount paid, e.g. `"35.35"`
    pub total: String,
}

/// Receipt Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ItemRequest {
    /// Short product description
    pub short_description: String,

    /// Price paid, e.g. `"6.49"`
    pub price: String,
}

impl From<ProcessReceiptRequest> for RawReceipt {
    fn from(request: ProcessReceiptRequest) -> Self {
        RawReceipt {
            retailer: request.retailer,
            purchase_date: request.purchase_date,
            purchase_time: request.purchase_time,
            items: request.items.into_iter().map(RawItem::from).collect(),
            total: request.total,
        }
    }
}

impl From<ItemRequest> for RawItem {
    fn from(request: ItemRequest) -> Self {
        RawItem {
            short_description: request.short_description,
            price: request.price,
        }
    }
}

/// Receipt Processed Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReceiptProcessedResponse {
    /// Id to fetch the receipt's points with
    pub id: String,
}

/// Process Receipt Handler
///
/// Stores a receipt and returns its id.
///
/// The body is decoded as JSON whatever `Content-Type` the client sends.
#[endpoint(
    tags("receipts"),
    summary = "Process Receipt",
    request_body = ProcessReceiptRequest,
    responses(
        (status_code = StatusCode::OK, description = "Receipt stored"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed or invalid receipt"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ReceiptProcessedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let body = req.payload().await.or_400("unreadable request body")?;

    let request: ProcessReceiptRequest =
        serde_json::from_slice(body).or_400("malformed receipt json")?;

    let receipt = Receipt::try_from(RawReceipt::from(request)).or_400("rejected receipt")?;

    let uuid = state
        .app
        .receipts
        .process_receipt(receipt)
        .await
        .map_err(into_status_error)?;

    Ok(Json(ReceiptProcessedResponse {
        id: uuid.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;
    use uuid::Uuid;

    use tally_app::domain::receipts::{MockReceiptsService, records::ReceiptUuid};

    use crate::{receipts::handlers::tests::target_receipt_json, test_helpers::receipts_service};

    use super::*;

    fn make_service(receipts: MockReceiptsService) -> Service {
        receipts_service(
            receipts,
            Router::with_path("receipts/process").post(handler),
        )
    }

    fn rejecting_mock() -> MockReceiptsService {
        let mut receipts = MockReceiptsService::new();

        receipts.expect_process_receipt().never();
        receipts.expect_get_points().never();

        receipts
    }

    #[tokio::test]
    async fn test_process_receipt_returns_id() -> TestResult {
        let uuid = ReceiptUuid::new_random();

        let mut receipts = MockReceiptsService::new();

        receipts
            .expect_process_receipt()
            .once()
            .withf(|receipt| receipt.retailer() == "Target" && receipt.items().len() == 5)
            .return_once(move |_| Ok(uuid));

        receipts.expect_get_points().never();

        let mut res = TestClient::post("http://example.com/receipts/process")
            .json(&target_receipt_json())
            .send(&make_service(receipts))
            .await;

        let body: ReceiptProcessedResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, uuid.to_string());
        assert!(Uuid::parse_str(&body.id).is_ok(), "id should be a uuid");

        Ok(())
    }

    #[tokio::test]
    async fn test_body_without_content_type_is_decoded() -> TestResult {
        let uuid = ReceiptUuid::new_random();

        let mut receipts = MockReceiptsService::new();

        receipts
            .expect_process_receipt()
            .once()
            .withf(|receipt| receipt.retailer() == "Target")
            .return_once(move |_| Ok(uuid));

        receipts.expect_get_points().never();

        let mut res = TestClient::post("http://example.com/receipts/process")
            .body(target_receipt_json().to_string())
            .send(&make_service(receipts))
            .await;

        let body: ReceiptProcessedResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, uuid.to_string());

        Ok(())
    }

    #[tokio::test]
    async fn test_body_with_form_content_type_is_decoded() {
        let mut receipts = MockReceiptsService::new();

        receipts
            .expect_process_receipt()
            .once()
            .return_once(|_| Ok(ReceiptUuid::new_random()));

        receipts.expect_get_points().never();

        let res = TestClient::post("http://example.com/receipts/process")
            .add_header("content-type", "application/x-www-form-urlencoded", true)
            .body(target_receipt_json().to_string())
            .send(&make_service(receipts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400_with_decoder_message() -> TestResult {
        let mut res = TestClient::post("http://example.com/receipts/process")
            .raw_json("{\"retailer\": \"Target\",")
            .send(&make_service(rejecting_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: Value = res.take_json().await?;
        let brief = body["error"]["brief"].as_str().unwrap_or_default();

        assert!(
            brief.contains("EOF while parsing"),
            "brief should carry the decoder message, got {brief:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_field_returns_400() -> TestResult {
        let mut receipt = target_receipt_json();

        if let Some(fields) = receipt.as_object_mut() {
            fields.remove("total");
        }

        let mut res = TestClient::post("http://example.com/receipts/process")
            .json(&receipt)
            .send(&make_service(rejecting_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(
            res.take_string().await?.contains("missing field `total`"),
            "error body should name the missing field"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_wrongly_typed_items_return_400() {
        let mut receipt = target_receipt_json();

        receipt["items"] = json!("five items");

        let res = TestClient::post("http://example.com/receipts/process")
            .json(&receipt)
            .send(&make_service(rejecting_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_invalid_purchase_date_returns_400() -> TestResult {
        let mut receipt = target_receipt_json();

        receipt["purchaseDate"] = json!("2022-13-01");

        let mut res = TestClient::post("http://example.com/receipts/process")
            .json(&receipt)
            .send(&make_service(rejecting_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(
            res.take_string().await?.contains("purchaseDate"),
            "error body should name the rejected field"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_purchase_time_returns_400() {
        let mut receipt = target_receipt_json();

        receipt["purchaseTime"] = json!("1:01 PM");

        let res = TestClient::post("http://example.com/receipts/process")
            .json(&receipt)
            .send(&make_service(rejecting_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_unparsable_total_returns_400() {
        let mut receipt = target_receipt_json();

        receipt["total"] = json!("thirty five");

        let res = TestClient::post("http://example.com/receipts/process")
            .json(&receipt)
            .send(&make_service(rejecting_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_imprecise_total_returns_400() {
        let mut receipt = target_receipt_json();

        receipt["total"] = json!("1.00000000000000000000000000001");

        let res = TestClient::post("http://example.com/receipts/process")
            .json(&receipt)
            .send(&make_service(rejecting_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_short_purchase_date_returns_400() {
        let mut receipt = target_receipt_json();

        receipt["purchaseDate"] = json!("22-01-01");

        let res = TestClient::post("http://example.com/receipts/process")
            .json(&receipt)
            .send(&make_service(rejecting_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_negative_price_returns_400() {
        let mut receipt = target_receipt_json();

        receipt["items"][0]["price"] = json!("-6.49");

        let res = TestClient::post("http://example.com/receipts/process")
            .json(&receipt)
            .send(&make_service(rejecting_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}

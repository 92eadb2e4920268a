mod common;

use common::{ACCOUNT, CONTRACT, MockTransport, client};
use confluxscan_client::types::NftListParams;
use serde_json::json;

#[tokio::test]
async fn nft_balances_for_owner() {
    let transport = MockTransport::new().with_data(json!({
        "total": 1,
        "list": [{ "contract": CONTRACT, "name": "Conflux Punks", "type": "CRC721", "balance": 1500 }]
    }));
    let client = client(&transport);

    let envelope = client
        .nft()
        .balances_formatted(&NftListParams::for_owner(ACCOUNT).page(0, 10))
        .await
        .unwrap();

    assert_eq!(envelope.formatted["list"][0]["balance"], "1,500");
    assert_eq!(envelope.raw.list[0].token_type.as_deref(), Some("CRC721"));
    assert!(transport.last_url().contains("/nft/balances?owner="));
}

#[tokio::test]
async fn nft_tokens_require_a_valid_contract() {
    let transport = MockTransport::new();
    let client = client(&transport);

    let err = client
        .nft()
        .tokens(&NftListParams::default())
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let err = client
        .nft()
        .owners(&NftListParams::for_contract("invalid"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid address: invalid");
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn nft_preview_sends_token_id() {
    let transport = MockTransport::new().with_data(json!({
        "contract": CONTRACT,
        "tokenId": "42",
        "name": { "en": "Forty-two" },
        "image": "ipfs://image"
    }));
    let client = client(&transport);

    let token = client.nft().preview(CONTRACT, "42", true).await.unwrap();

    assert_eq!(token.token_id.as_deref(), Some("42"));
    assert_eq!(token.image.as_deref(), Some("ipfs://image"));
    assert!(transport.last_url().ends_with("&tokenId=42&withMetadata=true"));
}

#[tokio::test]
async fn decode_method_accepts_single_or_list() {
    let transport = MockTransport::new()
        .with_data(json!({ "hash": "0x123", "decodedData": { "name": "transfer" } }))
        .with_data(json!([
            { "hash": "0x123", "decodedData": { "name": "transfer" } },
            { "hash": "0x456", "error": "unknown method" }
        ]));
    let client = client(&transport);

    let single = client.utils().decode_method(&["0x123"]).await.unwrap();
    assert_eq!(single.len(), 1);
    assert!(single[0].is_decoded());
    assert!(transport.last_url().ends_with("/util/decode/method?hashes=0x123"));

    let many = client
        .utils()
        .decode_method(&["0x123", "0x456"])
        .await
        .unwrap();
    assert_eq!(many.len(), 2);
    assert!(!many[1].is_decoded());
    assert_eq!(many[1].error.as_deref(), Some("unknown method"));
}

#[tokio::test]
async fn decode_method_raw_requires_both_lists() {
    let transport = MockTransport::new().with_data(json!([
        { "contract": CONTRACT, "input": "0xa9059cbb", "decodedData": { "name": "transfer" } }
    ]));
    let client = client(&transport);

    let err = client
        .utils()
        .decode_method_raw::<&str, &str>(&[], &["0x456"])
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid contracts: ''");

    let err = client
        .utils()
        .decode_method_raw(&[CONTRACT], &[""])
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid inputs: ''");
    assert_eq!(transport.call_count(), 0);

    let decoded = client
        .utils()
        .decode_method_raw(&[CONTRACT], &["0xa9059cbb"])
        .await
        .unwrap();
    assert_eq!(decoded[0].input.as_deref(), Some("0xa9059cbb"));
    assert!(transport.last_url().contains("&inputs=0xa9059cbb"));
}

#[tokio::test]
async fn decode_method_raw_keeps_pairs_aligned() {
    let transport = MockTransport::new();
    let client = client(&transport);

    let err = client
        .utils()
        .decode_method_raw(&[CONTRACT, CONTRACT], &["0xa9059cbb"])
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.to_string(), "2 contracts cannot pair with 1 inputs");

    let err = client
        .utils()
        .decode_method_raw(&[CONTRACT, " ", CONTRACT], &["0x1", "0x2", "0x3"])
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid contracts: ' '");

    let err = client
        .utils()
        .decode_method_raw(&[CONTRACT, CONTRACT], &["0x1", ""])
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid inputs: ''");
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn decode_method_rejects_empty_hashes() {
    let transport = MockTransport::new();
    let client = client(&transport);

    let err = client
        .utils()
        .decode_method::<&str>(&[])
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Invalid hashes: ''");
    assert_eq!(transport.call_count(), 0);
}

mod common;

use common::{ACCOUNT, MockTransport, client};
use confluxscan_client::types::{AccountListParams, ApprovalParams, Scalar};
use confluxscan_client::{Error, SortOrder, TokenType, TokenTypes, TransferType};
use serde_json::json;

#[tokio::test]
async fn crc20_tokens_are_formatted_end_to_end() {
    let transport = MockTransport::new().with_data(json!({
        "total": 1,
        "list": [{
            "contract": "cfx:acf2rcsh8payyxpg6xj7b0ztswwh81ute60tsw35j7",
            "name": "Fans Coin",
            "symbol": "FC",
            "decimals": 18,
            "type": "CRC20",
            "amount": "1000000000000000000"
        }]
    }));
    let client = client(&transport);

    let envelope = client
        .account()
        .tokens_formatted(ACCOUNT, Some(TokenType::Crc20.into()))
        .await
        .unwrap();

    assert_eq!(envelope.formatted["list"][0]["amount"], "1");
    assert_eq!(envelope.formatted["total"], 1);
    assert_eq!(envelope.formatted["list"][0]["symbol"], "FC");
    assert_eq!(envelope.raw.total, Some(Scalar::from(1i64)));
    assert_eq!(
        envelope.raw.list[0].amount,
        Some(Scalar::from("1000000000000000000"))
    );
    assert_eq!(
        transport.last_url(),
        format!(
            "https://api.confluxscan.org/account/tokens?account={}&tokenType=CRC20",
            ACCOUNT.replace(':', "%3A")
        )
    );
}

#[tokio::test]
async fn token_transfers_take_decimals_from_address_info() {
    let transport = MockTransport::new().with_data(json!({
        "total": 2,
        "list": [
            { "contract": "cfx:usdt", "amount": "2500000", "timestamp": 1704067200 },
            { "contract": "cfx:unknown", "amount": "3000000000000000000", "timestamp": 1704067200 }
        ],
        "addressInfo": {
            "cfx:usdt": { "token": { "name": "Tether USD", "symbol": "USDT", "decimals": 6 } }
        }
    }));
    let client = client(&transport);

    let envelope = client
        .account()
        .crc20_transfers_formatted(&AccountListParams::new(ACCOUNT))
        .await
        .unwrap();

    let list = &envelope.formatted["list"];
    assert_eq!(list[0]["amount"], "2.5");
    assert_eq!(list[1]["amount"], "3");
    assert_eq!(list[0]["timestamp"], "2024-01-01 00:00:00");
    assert_eq!(envelope.raw.token_info("cfx:usdt").unwrap().decimals, Some(6));
}

#[tokio::test]
async fn transactions_send_only_set_filters() {
    let transport = MockTransport::new().with_data(json!({ "total": 0, "list": [] }));
    let client = client(&transport);

    let params = AccountListParams::new(ACCOUNT)
        .page(0, 10)
        .time_range(1_700_000_000, 1_700_086_400)
        .sort(SortOrder::Asc);
    let txs = client.account().transactions(&params).await.unwrap();

    assert!(txs.is_empty());
    let url = transport.last_url();
    assert!(url.starts_with("https://api.confluxscan.org/account/transactions?account="));
    assert!(url.contains("skip=0&limit=10"));
    assert!(url.contains("minTimestamp=1700000000&maxTimestamp=1700086400"));
    assert!(url.contains("sort=ASC"));
    assert!(!url.contains("from="));
    assert!(!url.contains("apiKey"));
}

#[tokio::test]
async fn transactions_formatted_render_gas_and_value() {
    let transport = MockTransport::new().with_data(json!({
        "total": 1,
        "list": [{
            "hash": "0xabc",
            "value": "1500000000000000000",
            "gasPrice": "1000000000",
            "gasFee": "21000000000000",
            "timestamp": 1704067200
        }]
    }));
    let client = client(&transport);

    let envelope = client
        .account()
        .transactions_formatted(&AccountListParams::new(ACCOUNT))
        .await
        .unwrap();

    let tx = &envelope.formatted["list"][0];
    assert_eq!(tx["value"], "1.5");
    assert_eq!(tx["gasPrice"], "1 Gdrip");
    assert_eq!(tx["gasFee"], "21,000 Gdrip");
    assert_eq!(tx["timestamp"], "2024-01-01 00:00:00");
    assert_eq!(tx["hash"], "0xabc");
    assert_eq!(envelope.raw.list[0].hash.as_deref(), Some("0xabc"));
}

#[tokio::test]
async fn reversed_time_range_fails_before_request() {
    let transport = MockTransport::new();
    let client = client(&transport);

    let params = AccountListParams::new(ACCOUNT).time_range(200, 100);
    let err = client.account().cfx_transfers(&params).await.unwrap_err();

    assert!(err.is_validation());
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn empty_account_is_rejected() {
    let transport = MockTransport::new();
    let client = client(&transport);

    let err = client.account().tokens("", None).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn transfers_feed_carries_cursor_and_type() {
    let transport = MockTransport::new().with_data(json!({
        "next": "cursor-2",
        "list": [{ "type": "transfer_20", "amount": "5", "contract": "cfx:token" }]
    }));
    let client = client(&transport);

    let mut params = AccountListParams::new(ACCOUNT);
    params.cursor = Some("cursor-1".into());
    params.transfer_type = Some(TransferType::Transfer20);
    let feed = client.account().transfers(&params).await.unwrap();

    assert_eq!(feed.next, Some(Scalar::from("cursor-2")));
    assert_eq!(feed.list[0].transfer_type.as_deref(), Some("transfer_20"));
    let url = transport.last_url();
    assert!(url.contains("cursor=cursor-1"));
    assert!(url.contains("transferType=transfer_20"));
}

#[tokio::test]
async fn approvals_and_token_infos() {
    let transport = MockTransport::new()
        .with_data(json!({
            "total": 1,
            "list": [{
                "value": "100",
                "approvalType": "Approval",
                "spender": "cfx:spender",
                "tokenInfo": { "symbol": "FC", "type": "CRC20", "decimals": 18 }
            }]
        }))
        .with_data(json!({
            "list": [
                { "contract": "cfx:a", "symbol": "A", "decimals": 6 },
                { "contract": "cfx:b", "error": "not a token" }
            ]
        }));
    let client = client(&transport);

    let mut params = ApprovalParams::new(ACCOUNT);
    params.token_type = Some("CRC20,CRC721".parse::<TokenTypes>().unwrap());
    let approvals = client.account().approvals(&params).await.unwrap();
    assert_eq!(
        approvals.list[0].token_info.as_ref().unwrap().symbol.as_deref(),
        Some("FC")
    );
    assert!(transport.last_url().contains("tokenType=CRC20%2CCRC721"));

    let infos = client
        .account()
        .token_infos(&["cfx:a", "cfx:b"])
        .await
        .unwrap();
    assert_eq!(infos.list.len(), 2);
    assert_eq!(infos.list[1].error.as_deref(), Some("not a token"));
    assert!(transport.last_url().ends_with("/token/tokeninfos?contracts=cfx%3Aa%2Ccfx%3Ab"));
}

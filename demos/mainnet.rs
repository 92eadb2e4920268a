//! Example: Query ConfluxScan mainnet for account, contract and network data.
//!
//! Run with: cargo run --example mainnet
//! Set `RUST_LOG=confluxscan_client=debug` to see each request.

use confluxscan_client::format::{
    current_timestamp, render_token, render_top_stats, twenty_four_hours_ago,
};
use confluxscan_client::types::{AccountListParams, StatsParams};
use confluxscan_client::{ScanClient, StatsSpan, TokenType, client::Result};

const ACCOUNT: &str = "cfx:aapgmw9up7tm7dxy5pctg8442dz6x7ak4u9fzsj0fm";
const CONTRACT: &str = "cfx:achc8nxj7r451c223m18w2dwjnmhkd6rxawrvkvsy2";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = ScanClient::mainnet();

    println!("=== ConfluxScan Mainnet Client ===\n");

    // 1. Supply snapshot
    println!("1. Fetching supply...");
    let supply = client.statistics().supply_formatted().await?;
    println!("   Total supply: {}", supply.formatted["totalSupply"]);
    println!("   Circulating: {}", supply.formatted["totalCirculating"]);
    println!();

    // 2. Recent transactions
    println!("2. Fetching recent transactions of {ACCOUNT}...");
    let txs = client
        .account()
        .transactions_formatted(&AccountListParams::new(ACCOUNT).page(0, 5))
        .await?;
    println!("   Total: {}", txs.formatted["total"]);
    if let Some(list) = txs.formatted["list"].as_array() {
        for tx in list {
            println!(
                "   {} | {} | value {} | fee {}",
                tx["timestamp"], tx["hash"], tx["value"], tx["gasFee"]
            );
        }
    }
    println!();

    // 3. CRC20 balances
    println!("3. Fetching CRC20 balances...");
    let tokens = client
        .account()
        .tokens(ACCOUNT, Some(TokenType::Crc20.into()))
        .await?;
    for token in tokens.list.iter().take(3) {
        println!("{}\n", render_token(token));
    }

    // 4. Contract ABI
    println!("4. Fetching ABI of {CONTRACT}...");
    match client.contract().abi(CONTRACT).await {
        Ok(abi) => println!(
            "   {} ABI entries",
            abi.as_array().map_or(0, |entries| entries.len())
        ),
        Err(e) => println!("   {e}"),
    }
    println!();

    // 5. Gas leaderboard
    println!("5. Fetching top gas users (24h)...");
    let top = client.statistics().top_gas_used(StatsSpan::Day).await?;
    println!("{}", render_top_stats(&top));
    println!();

    // 6. TPS over the last day
    println!("6. Fetching TPS...");
    let range = StatsParams::range(twenty_four_hours_ago(), current_timestamp()).page(0, 5);
    let tps = client.statistics().tps_formatted(range).await?;
    if let Some(list) = tps.formatted["list"].as_array() {
        for item in list {
            println!("   {} -> {}", item["statTime"], item["tps"]);
        }
    }

    println!("\n=== Done ===");
    Ok(())
}

/// Example running a small Binance-style trade history through the FIFO
/// engine and printing realized gains per trade and per pair.
use fifogains::engine::compute_fifo;
use fifogains::summary::{net_realized, summarize_by_pair};
use fifogains::trade::Trade;

fn main() {
    // date, pair, side, price, executed, amount, fee
    let trades: Vec<Trade> = [
        "2024-01-05 09:30:00,BTCUSDT,BUY,42000.0,0.5,21000.0,21.0",
        "2024-02-12 14:05:10,BTCUSDT,BUY,48000.0,0.5,24000.0,24.0",
        "2024-03-20 11:45:33,BTCUSDT,SELL,65000.0,0.75,48750.0,48.75",
        "2024-01-10 16:20:00,ETHUSDT,BUY,2500.0,4.0,10000.0,10.0",
        "2024-04-02 10:00:00,ETHUSDT,SELL,2200.0,4.0,8800.0,8.8",
        "2024-04-15 13:37:00,SOLUSDT,SELL,150.0,10.0,1500.0,1.5",
    ]
    .iter()
    .map(|row| Trade::from(*row))
    .collect();

    let outcome = compute_fifo(&trades);

    println!("TRADES ENRICHED");
    println!("-------------------------------------------------------------");
    for enriched in &outcome.trades {
        println!("{}", enriched);
    }

    println!("-------------------------------------------------------------");
    let summaries = summarize_by_pair(&outcome.trades);
    for summary in &summaries {
        println!("{}", summary);
    }
    let (gains, losses, net) = net_realized(&summaries);
    println!("gains:{:+.2}, losses:{:+.2}, net:{:+.2}", gains, losses, net);

    if !outcome.report.is_clean() {
        println!("{}", outcome.report);
    }
}

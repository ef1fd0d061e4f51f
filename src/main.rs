//! Demo CLI for the feed controller.
//!
//! Searches the news API for a query given on the command line, prints
//! the results, and accepts simple commands to page through them:
//!
//! ```text
//! NEWSDATA_API_KEY=... cargo run -- "rust language"
//! ```
//!
//! Commands at the prompt: `m` load more, `r` repeat the search (served
//! from cache within the TTL), `c` clear and refetch, `q` quit.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use log::info;

use newsfeed_cache::{CacheSnapshot, FeedController, FilterSet, NewsdataClient};

fn main() -> Result<()> {
    env_logger::init();

    // -- parse arguments -----------------------------------------------------
    let query = std::env::args().nth(1).unwrap_or_default();
    let filters = if query.is_empty() {
        FilterSet::default()
    } else {
        FilterSet::query(query)
    };

    // -- build the controller ------------------------------------------------
    let api_key = std::env::var("NEWSDATA_API_KEY")
        .context("set NEWSDATA_API_KEY to your newsdata.io api key")?;
    let mut feed = FeedController::new(NewsdataClient::new(api_key));

    // -- initial fetch -------------------------------------------------------
    match feed.request_feed(&filters, 0) {
        Ok(snapshot) => print_snapshot(snapshot),
        Err(e) => eprintln!("fetch failed: {e}"),
    }

    // -- command loop --------------------------------------------------------
    let stdin = io::stdin();
    loop {
        print!("[m]ore  [r]epeat  [c]lear  [q]uit > ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match line.trim() {
            "m" => {
                let next = feed.snapshot().current_page + 1;
                match feed.request_feed(&filters, next) {
                    Ok(snapshot) => print_snapshot(snapshot),
                    Err(e) => eprintln!("fetch failed: {e}"),
                }
            }
            "r" => match feed.request_feed(&filters, 0) {
                Ok(snapshot) => print_snapshot(snapshot),
                Err(e) => eprintln!("fetch failed: {e}"),
            },
            "c" => {
                feed.clear_feed();
                info!("cache cleared");
                match feed.request_feed(&filters, 0) {
                    Ok(snapshot) => print_snapshot(snapshot),
                    Err(e) => eprintln!("fetch failed: {e}"),
                }
            }
            "q" => break,
            other => eprintln!("unknown command: {other}"),
        }
    }

    Ok(())
}

fn print_snapshot(snapshot: &CacheSnapshot) {
    for article in &snapshot.articles {
        let date = article
            .published
            .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "no date".into());
        println!("{date:<18} {}  [{}]", article.title, article.source_id);
    }
    println!(
        "-- {} of {} results, page {}{} --",
        snapshot.articles.len(),
        snapshot.total_results,
        snapshot.current_page,
        if snapshot.next_page.is_some() {
            ", more available"
        } else {
            ""
        }
    );
}

//! Basic example demonstrating both delivery modes.
//!
//! This example shows how to:
//! - Create a client from an access token
//! - Await an operation and read the reply and rate limit pair
//! - Pass optional parameters, or leave them out
//! - Send an operation with a callback instead of awaiting it
//!
//! Run with: `INSTAGRAM_ACCESS_TOKEN=... cargo run --example basic_call`

use instagram_client::{endpoints, params::MediaPage, Client, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("instagram_client=debug,basic_call=info")
        .init();

    let token = std::env::var("INSTAGRAM_ACCESS_TOKEN").unwrap_or_default();
    let client = Client::new(token)?;

    println!("=== Awaiting a reply ===");
    match client.get_user("self").await {
        Ok(reply) => {
            println!("Username: {}", reply.data["username"]);
            println!("Calls left: {} of {}", reply.remaining, reply.count);
        }
        Err(Error::Api { meta, .. }) => println!("Instagram said no: {}", meta),
        Err(e) => println!("Call failed: {}", e),
    }
    println!();

    println!("=== Optional parameters ===");
    let reply = client
        .recently_posted("self", MediaPage::new().count(3))
        .await?;
    for media in reply.data.as_array().into_iter().flatten() {
        println!("Post {}: {}", media["id"], media["link"]);
    }
    if let Some(cursor) = reply.next_max_id() {
        println!("Next page starts before {}", cursor);
    }
    println!();

    println!("=== Callback delivery ===");
    let handle = client.send_with(endpoints::get_follows(), |result, rate_limit| {
        match result {
            Ok(envelope) => println!(
                "meta.code = {}, {} calls left",
                envelope["meta"]["code"], rate_limit.remaining
            ),
            Err(e) => println!("Call failed: {}", e),
        }
    });
    handle.await.ok();

    Ok(())
}

use std::time::Instant;

use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "hello-cli")]
#[command(about = "Client CLI for the hello benchmark server", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check server liveness
    Status,
    /// Fetch the plaintext endpoint
    Plaintext,
    /// Fetch the JSON endpoint
    Json,
    /// Fire a batch of requests and report throughput
    Bench {
        /// Total number of requests
        #[arg(short, long, default_value_t = 1000)]
        requests: usize,

        /// Concurrent workers
        #[arg(short, long, default_value_t = 8)]
        concurrency: usize,

        /// Endpoint path to hit
        #[arg(short, long, default_value = "/plaintext")]
        path: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Status => {
            let res = client.get(format!("{}/health", cli.url)).send().await?;
            println!("{} {}", res.status(), res.text().await?);
        }
        Commands::Plaintext => {
            let res = client.get(format!("{}/plaintext", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Json => {
            let res = client.get(format!("{}/json", cli.url)).send().await?;
            let body: Value = res.json().await?;
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        Commands::Bench {
            requests,
            concurrency,
            path,
        } => {
            run_bench(&client, &cli.url, &path, requests, concurrency).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: server returned status {}", status);
    }
    let request_id = res
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    println!("{} (request id {})", res.text().await?, request_id);
    Ok(())
}

async fn run_bench(
    client: &reqwest::Client,
    url: &str,
    path: &str,
    requests: usize,
    concurrency: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let target = format!("{}{}", url, path);
    let per_worker = requests / concurrency.max(1);
    let start = Instant::now();

    let mut workers = Vec::with_capacity(concurrency);
    for _ in 0..concurrency {
        let client = client.clone();
        let target = target.clone();
        workers.push(tokio::spawn(async move {
            let mut ok = 0usize;
            for _ in 0..per_worker {
                match client.get(&target).send().await {
                    Ok(res) if res.status().is_success() => ok += 1,
                    _ => {}
                }
            }
            ok
        }));
    }

    let mut ok = 0usize;
    for worker in workers {
        ok += worker.await?;
    }

    let elapsed = start.elapsed();
    let total = per_worker * concurrency;
    println!(
        "{}/{} ok in {:.2}s ({:.0} req/s, {:.2}ms mean)",
        ok,
        total,
        elapsed.as_secs_f64(),
        total as f64 / elapsed.as_secs_f64(),
        elapsed.as_secs_f64() * 1000.0 / total.max(1) as f64 * concurrency as f64,
    );

    Ok(())
}

use anyhow::Result;
use clap::Parser;
use georoute_cli::{parse_point, RouteClient};
use georoute_core::Coordinate;

#[derive(Parser, Debug)]
#[command(author, version, about = "Resolve a route through two or more points", long_about = None)]
struct Args {
    /// georoute server URL
    #[arg(long, default_value = "http://localhost:8080")]
    url: String,

    /// Route point as LAT,LON (repeat; first is origin, last is destination)
    #[arg(long = "point", value_parser = parse_point, required = true, allow_hyphen_values = true)]
    points: Vec<Coordinate>,

    /// Snap points onto the road network before routing
    #[arg(long)]
    approximate: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let client = RouteClient::new(args.url);

    match client.resolve(&args.points, args.approximate).await? {
        Some(route) => println!("{}", serde_json::to_string_pretty(&route)?),
        None => eprintln!("No route found between the given points."),
    }
    Ok(())
}

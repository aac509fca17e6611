//! Loading a configuration file into a struct, and reading it dynamically.
//!
//! Run with: cargo run --example load_config

use serde::Deserialize;
use sml::{parse_str, Array, Table};
use std::error::Error;

const CONFIG: &str = r#"
# service configuration
name = "gateway"
workers = 8
ratio = 0.75
ports = [8080, 8443]

[database]
url = "postgres://localhost/app"
pool = 16

[database.replica]
url = "postgres://replica/app"
"#;

#[derive(Debug, Deserialize)]
struct Replica {
    url: String,
}

#[derive(Debug, Deserialize)]
struct Database {
    url: String,
    pool: u32,
    replica: Option<Replica>,
}

#[derive(Debug, Deserialize)]
struct Config {
    name: String,
    workers: u16,
    ratio: f64,
    ports: Vec<u16>,
    database: Database,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Typed view through serde
    let config: Config = sml::from_str(CONFIG)?;
    println!("{:#?}\n", config);

    // Dynamic view through the value tree
    let root: Table = parse_str(CONFIG)?;
    println!("root keys: {}", root.len());
    println!("name = {}", root.get::<&str>("name")?);
    println!("pool = {}", root.get_path::<i64>("database.pool")?);

    let ports = root.get::<&Array>("ports")?;
    if ports.is::<i64>() {
        for i in 0..ports.len() {
            println!("port[{}] = {}", i, ports.get::<i64>(i)?);
        }
    }

    // Errors carry their position
    match parse_str("name = \"x\"\nname = \"y\"") {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("\n{}", e),
    }

    Ok(())
}

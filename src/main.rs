use ipnetgen::IpNetGenerator;
use std::error::Error;

const DEMO_NETWORK: &str = "192.168.100.0/29";

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    if let Err(e) = log4rs::init_file("log4rs.yml", Default::default()) {
        eprintln!("Logging disabled, could not read log4rs.yml: {e}");
    }
    log::info!("#Start main()");

    let gen = IpNetGenerator::new(DEMO_NETWORK)?;
    log::info!("Enumerating {} addresses of {}", gen.remaining(), gen.network());
    for ip in gen {
        log::info!("{ip}");
    }

    Ok(())
}

/* 3rd party libraries */
use clap::{Arg, Command};
use log::{error, info};
use std::thread::sleep;
use std::thread::Builder;
use std::time::Duration;

/* Custom libraries */
use building::Building;

/* Modules */
mod building;
mod config;
mod controller;
mod floor;
mod lift;
mod shared;

/* Main */
fn main() {
    env_logger::init();

    let matches = Command::new("liftsim")
        .about("Message-driven simulation of a multi-lift elevator bank")
        .arg(
            Arg::new("config")
                .long("config")
                .takes_value(true)
                .default_value("config.toml")
                .help("Path to the configuration file"),
        )
        .arg(
            Arg::new("floors")
                .long("floors")
                .takes_value(true)
                .help("Override the number of floors"),
        )
        .arg(
            Arg::new("lifts")
                .long("lifts")
                .takes_value(true)
                .help("Override the number of lifts"),
        )
        .get_matches();

    // Load the configuration
    let mut config = unwrap_or_exit!(config::load_config(matches.value_of("config").unwrap()));
    if let Some(floors) = matches.value_of("floors") {
        config.building.n_floors = unwrap_or_exit!(floors
            .parse::<i32>()
            .map_err(|e| format!("invalid --floors value: {}", e)));
    }
    if let Some(lifts) = matches.value_of("lifts") {
        config.building.n_lifts = unwrap_or_exit!(lifts
            .parse::<i32>()
            .map_err(|e| format!("invalid --lifts value: {}", e)));
    }

    let pause = Duration::from_millis(config.timing.pause_ms);
    let building = Building::new(&config);

    // Bridge the trace event stream to the log.
    let events = building.events();
    let event_logger = Builder::new().name("events".into());
    let event_logger_thread = event_logger
        .spawn(move || {
            for event in events.iter() {
                info!("{}", event);
            }
        })
        .unwrap();

    info!(
        "simulating {} floors and {} lifts",
        config.building.n_floors, config.building.n_lifts
    );

    // Demo traffic: two floor calls followed by four in-cabin calls.
    if config.building.n_floors >= 10 && config.building.n_lifts >= 2 {
        building.floor(9).call();
        sleep(pause * 5 / 2);
        building.floor(10).call();

        sleep(pause / 2);
        building.lift(1).call(3);
        building.lift(2).call(2);
        building.lift(1).call(8);
        building.lift(2).call(6);
    } else {
        building.floor(config.building.n_floors).call();
        sleep(pause / 2);
        building.lift(1).call(config.building.n_floors);
    }

    // Let the simulation play out, then tear everything down.
    sleep(pause * 20);
    building.shutdown();
    let _ = event_logger_thread.join();
}

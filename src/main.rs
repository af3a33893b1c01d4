#![doc = include_str!("../README.md")]

mod api;
mod cli;
mod core;
mod depot;
mod prelude;
mod quantity;
mod statistics;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, estimate, snapshot, survey},
    prelude::*,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Survey(args) => survey(&args).await?,
        Command::Estimate(args) => estimate(&args)?,
        Command::Snapshot(args) => snapshot(&args).await?,
    }

    info!("done!");
    Ok(())
}

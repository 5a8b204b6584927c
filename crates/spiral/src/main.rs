use std::io;
use std::process::ExitCode;

use clap::Parser;
use spiral::{App, logging, run};
use spiral_fetch::{Fetcher, ReqwestClient};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let app = App::parse();
    logging::init(app.verbose);

    let options = app.fetch_options();
    let fetcher = Fetcher::new(ReqwestClient::with_options(&options)?, options);

    let exit = run(&fetcher, &app, &mut io::stdout(), &mut io::stderr()).await?;
    Ok(exit.into())
}

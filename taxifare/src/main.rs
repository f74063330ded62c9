use clap::Parser;
use taxifare::app::TaxiFareCliArguments;

fn main() {
    env_logger::init();
    let args = TaxiFareCliArguments::parse();
    match args.op.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running taxifare: {e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

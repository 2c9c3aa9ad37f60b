use budget_ledger::{cli::run_cli, init};

fn main() {
    init();

    match run_cli(std::env::args().skip(1)) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

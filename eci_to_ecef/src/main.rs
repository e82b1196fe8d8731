use eci_to_ecef::{convert, init_logging, parse_args, usage, CliErrors};

fn main() {
    init_logging();

    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(CliErrors::Usage { found }) => {
            tracing::debug!(found, "wrong number of arguments");
            println!("{}", usage());
            std::process::exit(1);
        }
        // clap reports the bad value on stderr and exits non-zero
        Err(CliErrors::Parse(e)) => e.exit(),
    };

    let ecef = convert(&cli.timestamp(), &cli.eci());

    println!("{}", ecef[0]);
    println!("{}", ecef[1]);
    println!("{}", ecef[2]);
}

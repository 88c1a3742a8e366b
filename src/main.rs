use structopt::StructOpt;

mod arch;
mod report;

use report::Report;

/// Print the native word bit-width and byte size of this build target.
#[derive(StructOpt, Debug)]
#[structopt(name = "longbit")]
struct CliArgs {}

fn main() {
    let CliArgs {} = CliArgs::from_args();

    print!("{}", Report::probe());
}

use pl0c_drv::{run, PROGRAM};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", e.to_diagnostic().headline(PROGRAM));
        std::process::exit(1);
    }
}

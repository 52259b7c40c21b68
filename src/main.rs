use std::env;
use std::error::Error;
use std::process;

use gbcart::load_file;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = env::args().skip(1);
    let rom_path = match (args.next(), args.next()) {
        (Some(path), None) => path,
        _ => {
            eprintln!("Usage: gbcart <rom file>");
            process::exit(1);
        }
    };

    let cart = match load_file(&rom_path) {
        Ok(cart) => cart,
        Err(e) => {
            eprintln!("Error loading rom: {}. Exiting program...", e);
            let mut cause = e.source();
            while let Some(inner) = cause {
                eprintln!("  caused by: {}", inner);
                cause = inner.source();
            }
            process::exit(1);
        }
    };

    println!("{}", cart);
}

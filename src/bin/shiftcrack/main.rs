use shiftcrack::util::{Error, Result};
use std::env;

mod analyze_main;
pub mod args;
mod cmdmain;
mod decode_main;
mod findshift_main;
pub mod globals;
mod history_main;
mod list_main;
mod sample_main;
mod score_main;
mod shift_main;
use crate::globals::Settings;

fn main() {
    let mut settings = Settings::new();
    match inner_main(env::args().collect(), &mut settings) {
        Err(e) => {
            if e.suppress() {
                std::process::exit(0);
            }
            if e.silent() {
                std::process::exit(1);
            }
            tracing::debug!("failed : {e:?}");
            eprintln!("Error\t{}", e);
            eprint!("Command\t");
            for x in env::args() {
                eprint!("{} ", x);
            }
            eprintln!();
            std::process::exit(1);
        }
        Ok(()) => {
            std::process::exit(0);
        }
    }
}

pub fn inner_main(mut args: Vec<String>, settings: &mut Settings) -> Result<()> {
    if args.len() < 2 {
        eprintln!("USAGE : shiftcrack <command> [options...]");
        eprintln!("Type 'shiftcrack help' for more details");
        return Err(Error::Silent);
    }
    if args[1] == "help" || args[1] == "--help" {
        println!("USAGE : shiftcrack <command> [options...]");
        println!("Commands are :");
        for x in cmdmain::MAINLIST {
            println!("{:10} : {}", x.name, x.help);
        }
        println!("Options for every command are :");
        Settings::help();
        return Ok(());
    }
    if args[1] == "version" || args[1] == "--version" {
        println!("shiftcrack version {}", args::version());
        return Ok(());
    }
    for x in cmdmain::MAINLIST {
        if args[1] == x.name {
            let arg1 = args.remove(1);
            args[0] += " ";
            args[0] += &arg1;
            return (x.proc)(&args, settings);
        }
    }
    eprintln!("Valid subcommands are :");
    for x in cmdmain::MAINLIST {
        eprintln!("{:10} : {}", x.name, x.help);
    }
    Err(Error::Silent)
}

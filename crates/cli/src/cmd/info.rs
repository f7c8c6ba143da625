use nobuild_lib::consts::{COMMAND_CAPACITY, ECHO_ENV, NAME_CAPACITY, OUTPUT_CAPACITY};

use crate::output::print_stat;

pub fn cmd_info() {
  println!("nob {}", env!("CARGO_PKG_VERSION"));
  println!("Limits (bytes):");
  print_stat("Flag/file name", &(NAME_CAPACITY - 1).to_string());
  print_stat("Compiler", &(COMMAND_CAPACITY - 1).to_string());
  print_stat("Output", &(OUTPUT_CAPACITY - 1).to_string());
  println!("Environment:");
  print_stat(ECHO_ENV, "print the command line before building");
}

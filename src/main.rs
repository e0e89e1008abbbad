// Exclude entire file from coverage - binary entry point cannot be unit tested
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use std::process::ExitCode;

fn main() -> ExitCode {
    glossary_lib::cli::run()
}

/* Copyright (C) 2022 Antmicro
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     https://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use clap::Parser;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use pinmap::{convert_file, Error, PinTable, PCF_FILE_NAME};

#[derive(Parser, Debug)]
#[clap(
    author = "Antmicro",
    version = "0.1.0",
    about = "Converts @MAP_IO pin map annotations into a nextpnr PCF constraint file",
    long_about = None
)]
struct Args {
    #[clap(
        parse(from_os_str),
        help = "Pin map file with @MAP_IO <NAME> <LOGICAL PIN> annotations"
    )]
    input: Option<PathBuf>,
    /* Anything past the input path is ignored */
    #[clap(parse(from_os_str), hide = true)]
    _rest: Vec<OsString>,
}

fn main() {
    let args = Args::parse();

    /* Not an error as far as the exit status goes, just nothing to do */
    let input = match args.input {
        Some(input) => input,
        None => {
            println!("{}", Error::MissingInput);
            return;
        }
    };

    let pcf = Path::new(PCF_FILE_NAME);
    match convert_file(&PinTable::DEFAULT, &input, pcf) {
        Ok(stats) => println!(
            "{}: {} aliases, {} mapped ports",
            PCF_FILE_NAME, stats.aliases, stats.directives
        ),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

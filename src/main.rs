// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::{Parser, Subcommand};
use mokka::commands::resolve::ResolveCommand;
use mokka::error::{Result, get_exit_code};
use mokka::logging;
use mokka::models::request::PackageType;

#[derive(Parser)]
#[command(name = "mokka")]
#[command(author, version, about = "Adoptium Temurin JDK resolver for CI runners", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a version specification to a concrete build
    #[command(visible_alias = "r")]
    Resolve {
        /// Version to resolve (e.g. "21", "17.0", "8.x", "x", "23-ea")
        version: String,

        /// Target architecture (defaults to the current machine)
        #[arg(long)]
        arch: Option<String>,

        /// Package type to resolve
        #[arg(long, value_name = "TYPE", default_value = "jdk")]
        package_type: PackageType,

        /// Override the operating system token sent to the catalog
        #[arg(long)]
        os: Option<String>,

        /// Output the result as JSON for programmatic use
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    logging::setup_logger(cli.verbose);

    let result: Result<()> = (|| {
        match cli.command {
            Commands::Resolve {
                version,
                arch,
                package_type,
                os,
                json,
            } => {
                let command = ResolveCommand::new(os);
                command.execute(&version, arch.as_deref(), package_type, json)
            }
        }
    })();

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(get_exit_code(&e));
    }
}

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

use clap::Parser;
use odl::commands::download::{DownloadCommand, DownloadRequest};
use odl::commands::list::ListCommand;
use odl::config::new_odl_config;
use odl::error::{
    OdlError, Result, format_error_chain, format_error_with_color, get_exit_code,
};
use odl::logging;
use odl::models::Arch;
use std::io::IsTerminal;

#[derive(Parser)]
#[command(name = "odl")]
#[command(author, about = "Download license-gated software from OTN", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// OTN account username [falls back to OTN_USERNAME, then auth.username]
    #[arg(long)]
    username: Option<String>,

    /// OTN account password [falls back to OTN_PASSWORD, then a prompt]
    #[arg(long)]
    password: Option<String>,

    /// Operating system of the download (e.g. "linux", "windows", "na")
    #[arg(long, default_value = "linux")]
    os: String,

    /// Component to download (e.g. "db", "sqlcl", "sqldev", "java")
    #[arg(long, default_value = "")]
    component: String,

    /// Version of the component (e.g. "11gXE", "4.2")
    #[arg(long, default_value = "")]
    version: String,

    /// Language of the download
    #[arg(long, default_value = "na")]
    lang: String,

    /// Architecture of the download: x86, x64 or na
    #[arg(long, default_value = "na", value_parser = parse_arch)]
    arch: Arch,

    /// Accept the license agreement without prompting
    #[arg(long)]
    accept_license: bool,

    /// Skip files that already exist instead of asking to overwrite them
    #[arg(long)]
    skip_existing: bool,

    /// Disable progress indicators
    #[arg(long)]
    no_progress: bool,

    /// Download timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// List every downloadable resource and exit
    #[arg(long)]
    list: bool,
}

fn parse_arch(value: &str) -> std::result::Result<Arch, String> {
    value.parse::<Arch>().map_err(|e| e.to_string())
}

impl Cli {
    fn download_request(self) -> DownloadRequest {
        DownloadRequest {
            username: self.username,
            password: self.password,
            component: self.component,
            version: self.version,
            os: self.os,
            arch: self.arch,
            lang: self.lang,
            accept_license: self.accept_license,
            skip_existing: self.skip_existing,
            no_progress: self.no_progress,
            timeout: self.timeout,
        }
    }
}

fn exit_with(error: &OdlError) -> ! {
    if std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none() {
        eprint!("{}", format_error_with_color(error, true));
    } else {
        eprintln!("{}", format_error_chain(error));
    }
    std::process::exit(get_exit_code(error));
}

fn main() {
    let cli = Cli::parse();

    logging::setup_logger(cli.verbose);

    // Load configuration once at startup
    let config = match new_odl_config() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    let result: Result<()> = (|| {
        if cli.list {
            let command = ListCommand::new()?;
            return command.execute();
        }

        let command = DownloadCommand::new(&config)?;
        command.execute(&cli.download_request())
    })();

    if let Err(e) = result {
        exit_with(&e);
    }
}

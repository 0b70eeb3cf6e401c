// Copyright 2023 The RocketMQ Rust Authors
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

use std::process::ExitCode;

use clap::CommandFactory;
use clap::Parser;
use clap_complete::generate;
use clap_complete::shells::Bash;
use clap_complete::shells::Fish;
use clap_complete::shells::Zsh;

use crate::commands::CommandExecute;
use crate::commands::Commands;

const BIN_NAME: &str = "mesos-kafka-admin-cli";

#[derive(Parser)]
#[command(name = "mesos-kafka-admin-cli")]
#[command(about = "Mesos Kafka broker admin commands", long_about = None, author = "mxsm")]
pub struct MesosKafkaCli {
    /// Generate shell completion script
    #[arg(
        long = "generate-completion",
        value_name = "SHELL",
        help = "Generate shell completion script (bash, zsh, fish)"
    )]
    completion: Option<String>,

    #[command(subcommand)]
    commands: Option<Commands>,
}

impl MesosKafkaCli {
    pub fn handle(&self) -> ExitCode {
        // Handle completion generation
        if let Some(shell) = &self.completion {
            let mut cmd = MesosKafkaCli::command();

            match shell.to_lowercase().as_str() {
                "bash" => generate(Bash, &mut cmd, BIN_NAME, &mut std::io::stdout()),
                "zsh" => generate(Zsh, &mut cmd, BIN_NAME, &mut std::io::stdout()),
                "fish" => generate(Fish, &mut cmd, BIN_NAME, &mut std::io::stdout()),
                _ => {
                    eprintln!("Unsupported shell: {}", shell);
                    eprintln!("Supported shells: bash, zsh, fish");
                    return ExitCode::FAILURE;
                }
            }
            return ExitCode::SUCCESS;
        }

        // Handle regular commands
        let Some(ref commands) = self.commands else {
            eprintln!("No command specified. Use --help for usage information.");
            return ExitCode::FAILURE;
        };
        match commands.execute() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        }
    }
}

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

use std::path::PathBuf;

use clap::Parser;
use mesos_kafka_error::MesosKafkaResult;
use tracing::info;

use crate::cli::validators;
use crate::commands::CommandExecute;
use crate::commands::CommonArgs;
use crate::desired_state::DesiredState;

#[derive(Debug, Clone, Parser)]
pub struct UpdateBrokersSubCommand {
    #[command(flatten)]
    common_args: CommonArgs,

    #[arg(
        short = 'f',
        long = "file",
        required = true,
        help = "Broker file (json, or yaml by extension) with the new broker settings"
    )]
    file: PathBuf,
}

impl CommandExecute for UpdateBrokersSubCommand {
    fn execute(&self) -> MesosKafkaResult<()> {
        let state = DesiredState::load(&self.file)?;
        validators::validate_broker_specs(&state.brokers)?;
        // Reject the whole file up front rather than stopping halfway through it
        validators::validate_numeric_ids(&state.brokers)?;

        let controller = self.common_args.controller()?;
        info!("updating broker(s) {}", state.ids().join(","));
        controller.update_brokers(&state.brokers).inspect_err(|e| {
            eprintln!("Failed to update brokers from '{}': {e}", self.file.display());
        })?;

        println!("update brokers success: {}", state.ids().join(","));
        Ok(())
    }
}

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

use clap::Parser;
use mesos_kafka_error::MesosKafkaResult;
use tracing::info;

use crate::cli::validators;
use crate::commands::CommandExecute;
use crate::commands::CommonArgs;

#[derive(Debug, Clone, Parser)]
pub struct DeleteBrokersSubCommand {
    #[command(flatten)]
    common_args: CommonArgs,

    #[arg(
        short = 'b',
        long = "brokerIds",
        required = true,
        value_delimiter = ',',
        help = "Comma separated broker ids, eg: '3,4'"
    )]
    broker_ids: Vec<String>,
}

impl CommandExecute for DeleteBrokersSubCommand {
    fn execute(&self) -> MesosKafkaResult<()> {
        validators::validate_broker_ids(&self.broker_ids)?;
        let ids: Vec<&str> = self.broker_ids.iter().map(|id| id.trim()).collect();

        let controller = self.common_args.controller()?;
        info!("deleting broker(s) {}", ids.join(","));
        controller.delete_brokers(&ids).inspect_err(|e| {
            eprintln!("Failed to delete brokers {}: {e}", ids.join(","));
        })?;

        println!("delete brokers success: {}", ids.join(","));
        Ok(())
    }
}

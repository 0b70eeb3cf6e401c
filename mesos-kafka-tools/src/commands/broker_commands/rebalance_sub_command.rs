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

use crate::commands::CommandExecute;
use crate::commands::CommonArgs;

#[derive(Debug, Clone, Parser)]
pub struct RebalanceSubCommand {
    #[command(flatten)]
    common_args: CommonArgs,
}

impl CommandExecute for RebalanceSubCommand {
    fn execute(&self) -> MesosKafkaResult<()> {
        let controller = self.common_args.controller()?;
        controller.rebalance_and_wait()?;
        println!("rebalance finished");
        Ok(())
    }
}

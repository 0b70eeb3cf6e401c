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

mod broker_list_sub_command;
mod create_brokers_sub_command;
mod delete_brokers_sub_command;
mod rebalance_status_sub_command;
mod rebalance_sub_command;
mod update_brokers_sub_command;

use clap::Subcommand;
use mesos_kafka_error::MesosKafkaResult;

use crate::commands::CommandExecute;

#[derive(Subcommand)]
pub enum BrokerCommands {
    #[command(
        name = "brokerList",
        about = "List brokers",
        long_about = r#"List every broker known to the framework with its resources and state."#
    )]
    BrokerList(broker_list_sub_command::BrokerListSubCommand),

    #[command(
        name = "createBrokers",
        about = "Create brokers from a broker file",
        long_about = r#"For each broker of the file, in order: add it, start it, then rebalance
all brokers and wait until the rebalance is idle before moving to the next one."#
    )]
    CreateBrokers(create_brokers_sub_command::CreateBrokersSubCommand),

    #[command(
        name = "deleteBrokers",
        about = "Delete brokers",
        long_about = r#"For each broker id, in order: stop it, remove it, then rebalance all
brokers and wait until the rebalance is idle before moving to the next one."#
    )]
    DeleteBrokers(delete_brokers_sub_command::DeleteBrokersSubCommand),

    #[command(
        name = "updateBrokers",
        about = "Update brokers from a broker file",
        long_about = r#"For each broker of the file, in order: stop it, apply the new settings,
start it, then rebalance all brokers and wait until idle. Broker ids must be numeric."#
    )]
    UpdateBrokers(update_brokers_sub_command::UpdateBrokersSubCommand),

    #[command(
        name = "rebalance",
        about = "Rebalance all brokers",
        long_about = r#"Trigger a rebalance of all brokers and block until the framework reports idle."#
    )]
    Rebalance(rebalance_sub_command::RebalanceSubCommand),

    #[command(
        name = "rebalanceStatus",
        about = "Show rebalance status",
        long_about = r#"Fetch the current rebalance status once, without triggering a rebalance."#
    )]
    RebalanceStatus(rebalance_status_sub_command::RebalanceStatusSubCommand),
}

impl CommandExecute for BrokerCommands {
    fn execute(&self) -> MesosKafkaResult<()> {
        match self {
            BrokerCommands::BrokerList(value) => value.execute(),
            BrokerCommands::CreateBrokers(value) => value.execute(),
            BrokerCommands::DeleteBrokers(value) => value.execute(),
            BrokerCommands::UpdateBrokers(value) => value.execute(),
            BrokerCommands::Rebalance(value) => value.execute(),
            BrokerCommands::RebalanceStatus(value) => value.execute(),
        }
    }
}

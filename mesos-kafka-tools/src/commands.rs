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

mod broker_commands;

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use mesos_kafka_client::BrokerController;
use mesos_kafka_client::ClientConfig;
use mesos_kafka_client::ControllerBuilder;
use mesos_kafka_client::HttpTransport;
use mesos_kafka_error::MesosKafkaResult;
use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;

use crate::cli::validators;

/// A trait that defines the execution behavior for commands.
///
/// Every command builds its own controller from [`CommonArgs`], so `execute`
/// takes no context beyond the parsed arguments.
pub trait CommandExecute {
    /// Executes the command.
    fn execute(&self) -> MesosKafkaResult<()>;
}

#[derive(Debug, Parser, Clone)]
pub struct CommonArgs {
    /// Framework API base URL
    #[arg(
        short = 'u',
        long = "url",
        required = false,
        help = "Mesos Kafka API base URL, eg: 'https://mesos-kafka:7000'"
    )]
    pub url: Option<String>,

    /// Client config file
    #[arg(
        short = 'c',
        long = "config",
        required = false,
        help = "Client config file (toml, yaml or json); MESOS_KAFKA_* variables override it"
    )]
    pub config: Option<PathBuf>,

    /// Log and ignore rebalance failures instead of aborting
    #[arg(
        long = "lenientRebalance",
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Log rebalance failures and continue with the next broker; '--lenientRebalance false' \
                overrides a config file that enables it"
    )]
    pub lenient_rebalance: Option<bool>,
}

impl CommonArgs {
    /// Resolve the client config: file and environment first, then flags
    pub fn client_config(&self) -> MesosKafkaResult<ClientConfig> {
        let mut config = ClientConfig::load(self.config.as_deref())?;
        if let Some(url) = &self.url {
            validators::validate_url(url)?;
            config.url = Some(url.trim().to_string());
        }
        if let Some(lenient) = self.lenient_rebalance {
            config.lenient_rebalance = lenient;
        }
        Ok(config)
    }

    pub fn controller(&self) -> MesosKafkaResult<BrokerController<HttpTransport>> {
        ControllerBuilder::from_config(self.client_config()?).build()
    }
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(subcommand)]
    #[command(about = "Broker commands")]
    Broker(broker_commands::BrokerCommands),

    #[command(about = "Category commands show")]
    Show(ClassificationTablePrint),
}

impl CommandExecute for Commands {
    fn execute(&self) -> MesosKafkaResult<()> {
        match self {
            Commands::Broker(value) => value.execute(),
            Commands::Show(value) => value.execute(),
        }
    }
}

// ================for commands table print================
#[derive(Tabled, Clone)]
struct Command {
    #[tabled(rename = "Category")]
    category: &'static str,

    #[tabled(rename = "Command")]
    command: &'static str,

    #[tabled(rename = "Remark")]
    remark: &'static str,
}

#[derive(Parser)]
pub struct ClassificationTablePrint;

impl CommandExecute for ClassificationTablePrint {
    fn execute(&self) -> MesosKafkaResult<()> {
        let commands: Vec<Command> = vec![
            Command {
                category: "Broker",
                command: "brokerList",
                remark: "List brokers known to the framework.",
            },
            Command {
                category: "Broker",
                command: "createBrokers",
                remark: "Add, start and rebalance brokers from a broker file.",
            },
            Command {
                category: "Broker",
                command: "deleteBrokers",
                remark: "Stop, remove and rebalance brokers.",
            },
            Command {
                category: "Broker",
                command: "updateBrokers",
                remark: "Stop, update, start and rebalance brokers from a broker file.",
            },
            Command {
                category: "Broker",
                command: "rebalance",
                remark: "Rebalance all brokers and wait until idle.",
            },
            Command {
                category: "Broker",
                command: "rebalanceStatus",
                remark: "Show the current rebalance status.",
            },
        ];
        let mut table = Table::new(commands);
        table.with(Style::extended());
        print!("{table}");
        Ok(())
    }
}

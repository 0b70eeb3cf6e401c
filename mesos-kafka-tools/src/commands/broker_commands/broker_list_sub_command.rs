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
use mesos_kafka_client::BrokerState;
use mesos_kafka_client::ClusterStatus;
use mesos_kafka_client::FailoverPolicy;
use mesos_kafka_error::MesosKafkaError;
use mesos_kafka_error::MesosKafkaResult;
use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;

use crate::cli::formatters::OutputFormat;
use crate::commands::CommandExecute;
use crate::commands::CommonArgs;

#[derive(Debug, Clone, Parser)]
pub struct BrokerListSubCommand {
    #[command(flatten)]
    common_args: CommonArgs,

    #[arg(short = 'b', long = "brokerId", required = false, help = "Only show this broker")]
    broker_id: Option<String>,

    #[arg(
        short = 'o',
        long = "format",
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Output format"
    )]
    format: OutputFormat,
}

#[derive(Tabled)]
struct BrokerRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Active")]
    active: bool,
    #[tabled(rename = "Cpus")]
    cpus: f64,
    #[tabled(rename = "Mem")]
    mem: u64,
    #[tabled(rename = "Heap")]
    heap: u64,
    #[tabled(rename = "Constraints")]
    constraints: String,
    #[tabled(rename = "Options")]
    options: String,
    #[tabled(rename = "Failover")]
    failover: String,
}

impl From<&BrokerState> for BrokerRow {
    fn from(broker: &BrokerState) -> Self {
        Self {
            id: broker.id.clone(),
            active: broker.active,
            cpus: broker.cpus,
            mem: broker.mem,
            heap: broker.heap,
            constraints: broker.constraints.clone(),
            options: broker.options.clone(),
            failover: describe_failover(&broker.failover),
        }
    }
}

fn describe_failover(failover: &FailoverPolicy) -> String {
    let mut parts = Vec::new();
    if let Some(delay) = &failover.delay {
        parts.push(format!("delay:{delay}"));
    }
    if let Some(max_delay) = &failover.max_delay {
        parts.push(format!("maxDelay:{max_delay}"));
    }
    if let Some(max_tries) = failover.max_tries {
        parts.push(format!("maxTries:{max_tries}"));
    }
    parts.join(", ")
}

impl BrokerListSubCommand {
    fn select(&self, status: ClusterStatus) -> MesosKafkaResult<ClusterStatus> {
        let Some(id) = self.broker_id.as_deref().map(str::trim) else {
            return Ok(status);
        };
        let broker = status
            .find(id)
            .cloned()
            .ok_or_else(|| MesosKafkaError::validation_error("broker_id", format!("Broker '{id}' not found")))?;
        Ok(ClusterStatus { brokers: vec![broker] })
    }
}

impl CommandExecute for BrokerListSubCommand {
    fn execute(&self) -> MesosKafkaResult<()> {
        let controller = self.common_args.controller()?;
        let status = self.select(controller.list_brokers()?)?;

        match self.format {
            OutputFormat::Table => {
                if status.brokers.is_empty() {
                    println!("No brokers");
                    return Ok(());
                }
                let mut table = Table::new(status.brokers.iter().map(BrokerRow::from));
                table.with(Style::extended());
                println!("{table}");
            }
            format => println!("{}", format.render(&status)),
        }
        Ok(())
    }
}

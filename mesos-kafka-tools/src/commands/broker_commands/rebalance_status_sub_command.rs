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

use crate::cli::formatters::OutputFormat;
use crate::commands::CommandExecute;
use crate::commands::CommonArgs;

#[derive(Debug, Clone, Parser)]
pub struct RebalanceStatusSubCommand {
    #[command(flatten)]
    common_args: CommonArgs,

    #[arg(
        short = 'o',
        long = "format",
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Output format"
    )]
    format: OutputFormat,
}

impl CommandExecute for RebalanceStatusSubCommand {
    fn execute(&self) -> MesosKafkaResult<()> {
        let controller = self.common_args.controller()?;
        let status = controller.rebalance_status()?;

        println!("{}", self.format.render(&status));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format_is_table() {
        let cmd = RebalanceStatusSubCommand::try_parse_from(["rebalanceStatus"]).unwrap();
        assert_eq!(cmd.format, OutputFormat::Table);
    }

    #[test]
    fn test_command_with_format() {
        let cmd = RebalanceStatusSubCommand::try_parse_from(["rebalanceStatus", "--format", "yaml"]).unwrap();
        assert_eq!(cmd.format, OutputFormat::Yaml);
    }
}

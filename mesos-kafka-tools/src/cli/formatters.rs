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

//! Output formats of the read-only broker commands

mod json_formatter;
mod table_formatter;
mod yaml_formatter;

use clap::ValueEnum;
pub use json_formatter::JsonFormatter;
use serde::Serialize;
pub use table_formatter::TableFormatter;
pub use yaml_formatter::YamlFormatter;

/// Value of the `-o/--format` flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    #[value(alias = "yml")]
    Yaml,
}

impl OutputFormat {
    /// Render `data` with the formatter of this format
    pub fn render<T: Serialize>(self, data: &T) -> String {
        match self {
            Self::Table => TableFormatter.format(data),
            Self::Json => JsonFormatter.format(data),
            Self::Yaml => YamlFormatter.format(data),
        }
    }
}

pub trait Formatter {
    fn format<T: Serialize>(&self, data: &T) -> String;
}

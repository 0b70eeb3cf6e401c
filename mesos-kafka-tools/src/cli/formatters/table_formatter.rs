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

//! Table formatter
//!
//! Objects render as `Key | Value` rows, arrays of objects as one row per
//! element with the keys of the first element as header.

use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use tabled::builder::Builder;
use tabled::settings::Style;

use super::Formatter;

pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format<T: Serialize>(&self, data: &T) -> String {
        match serde_json::to_value(data) {
            Ok(Value::Object(map)) => key_value_table(&map),
            Ok(Value::Array(items)) => rows_table(&items),
            Ok(other) => cell(&other),
            Err(e) => format!("error: {e}"),
        }
    }
}

fn key_value_table(map: &Map<String, Value>) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Key".to_string(), "Value".to_string()]);
    for (key, value) in map {
        builder.push_record([key.clone(), cell(value)]);
    }
    render(builder)
}

fn rows_table(items: &[Value]) -> String {
    let header: Vec<String> = match items.first() {
        Some(Value::Object(first)) => first.keys().cloned().collect(),
        _ => vec!["Value".to_string()],
    };
    let mut builder = Builder::default();
    builder.push_record(header.clone());
    for item in items {
        let row: Vec<String> = match item {
            Value::Object(map) => header
                .iter()
                .map(|key| map.get(key).map(cell).unwrap_or_default())
                .collect(),
            other => vec![cell(other)],
        };
        builder.push_record(row);
    }
    render(builder)
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table.with(Style::extended());
    table.to_string()
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
